//! CJK font fallback.
//!
//! egui's bundled fonts have no CJK glyphs, so the Chinese labels need a
//! system font.

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CJK_FONT_NAME: &str = "cjk-fallback";

/// Well-known CJK font locations, tried in order.
const CJK_FONT_CANDIDATES: &[&str] = &[
    // Windows
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
    // macOS
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

/// Register the first CJK font found as a fallback for every family.
///
/// Returns whether a font was installed.
pub fn install_cjk_fallback(ctx: &egui::Context) -> bool {
    let Some((path, bytes)) = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        tracing::warn!("No CJK font found, Chinese labels may not render");
        return false;
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);

    tracing::info!(path, "Installed CJK font fallback");
    true
}
