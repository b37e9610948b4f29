//! UI components for Sunshine.

pub mod fonts;
pub mod image;
pub mod settings;
pub mod widget;

// Theme-aware colors for the UI
pub mod colors {
    use eframe::egui::{Color32, Stroke, Visuals};
    use sunshine_core::{ButtonStyle, Theme};

    /// Bootstrap-style color roles of a theme.
    #[derive(Debug, Clone, Copy)]
    pub struct Palette {
        pub primary: Color32,
        pub secondary: Color32,
        pub success: Color32,
        pub info: Color32,
        pub warning: Color32,
        pub danger: Color32,
        pub background: Color32,
        pub text: Color32,
    }

    const fn hex(rgb: u32) -> Color32 {
        Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    const fn palette(colors: [u32; 8]) -> Palette {
        Palette {
            primary: hex(colors[0]),
            secondary: hex(colors[1]),
            success: hex(colors[2]),
            info: hex(colors[3]),
            warning: hex(colors[4]),
            danger: hex(colors[5]),
            background: hex(colors[6]),
            text: hex(colors[7]),
        }
    }

    /// Get the palette of a theme.
    pub fn for_theme(theme: Theme) -> Palette {
        // primary, secondary, success, info, warning, danger, background, text
        match theme {
            Theme::Cosmo => palette([0x2780e3, 0x373a3c, 0x3fb618, 0x9954bb, 0xff7518, 0xff0039, 0xffffff, 0x373a3c]),
            Theme::Flatly => palette([0x2c3e50, 0x95a5a6, 0x18bc9c, 0x3498db, 0xf39c12, 0xe74c3c, 0xffffff, 0x212529]),
            Theme::Litera => palette([0x4582ec, 0xadb5bd, 0x02b875, 0x17a2b8, 0xf0ad4e, 0xd9534f, 0xffffff, 0x343a40]),
            Theme::Minty => palette([0x78c2ad, 0xf3969a, 0x56cc9d, 0x6cc3d5, 0xffce67, 0xff7851, 0xffffff, 0x5a5a5a]),
            Theme::Lumen => palette([0x158cba, 0x999999, 0x28b62c, 0x75caeb, 0xff851b, 0xff4136, 0xffffff, 0x555555]),
            Theme::Sandstone => palette([0x325d88, 0x8e8c84, 0x93c54b, 0x29abe0, 0xf47c3c, 0xd9534f, 0xffffff, 0x3e3f3a]),
            Theme::Yeti => palette([0x008cba, 0x707070, 0x43ac6a, 0x5bc0de, 0xe99002, 0xf04124, 0xffffff, 0x222222]),
            Theme::Pulse => palette([0x593196, 0xa991d4, 0x13b955, 0x009cdc, 0xefa31d, 0xfc3939, 0xffffff, 0x444444]),
            Theme::United => palette([0xe95420, 0xaea79f, 0x38b44a, 0x17a2b8, 0xefb73e, 0xdf382c, 0xffffff, 0x333333]),
            Theme::Morph => palette([0x378dfc, 0x7b8ab8, 0x43cc29, 0x5b62f4, 0xffc107, 0xe52527, 0xd9e3f1, 0x7b8ab8]),
            Theme::Journal => palette([0xeb6864, 0xaaaaaa, 0x22b24c, 0x336699, 0xf5e625, 0xf57a00, 0xffffff, 0x222222]),
            Theme::Darkly => palette([0x375a7f, 0x666666, 0x00bc8c, 0x3498db, 0xf39c12, 0xe74c3c, 0x222222, 0xffffff]),
            Theme::Superhero => palette([0x4c9be8, 0x7e8c9b, 0x5cb85c, 0x5bc0de, 0xffc107, 0xd9534f, 0x2b3e50, 0xffffff]),
            Theme::Solar => palette([0xbc951a, 0x94a2a4, 0x44aca4, 0x3f98d7, 0xd05e2f, 0xd95092, 0x002b36, 0xffffff]),
            Theme::Cyborg => palette([0x2a9fd6, 0x888888, 0x77b300, 0x9933cc, 0xff8800, 0xcc0000, 0x060606, 0xffffff]),
            Theme::Vapor => palette([0x6f42c1, 0xea39b8, 0x3cf281, 0x1ba2f6, 0xffc107, 0xe44c55, 0x190831, 0x32fbe2]),
        }
    }

    /// Build egui visuals for a theme.
    pub fn visuals(theme: Theme) -> Visuals {
        let palette = for_theme(theme);
        let mut visuals = if theme.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };
        visuals.panel_fill = palette.background;
        visuals.window_fill = palette.background;
        visuals.override_text_color = Some(palette.text);
        visuals.hyperlink_color = palette.primary;
        visuals.selection.bg_fill = palette.primary;
        visuals.selection.stroke = Stroke::new(1.0, palette.text);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.primary);
        visuals
    }

    /// Accent color of a button style.
    pub fn button(palette: &Palette, style: ButtonStyle) -> Color32 {
        match style {
            ButtonStyle::Warning => palette.warning,
            ButtonStyle::Info => palette.info,
            ButtonStyle::Danger => palette.danger,
            ButtonStyle::Secondary => palette.secondary,
        }
    }
}
