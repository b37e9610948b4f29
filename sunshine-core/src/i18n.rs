//! Translation table for user-facing labels.
//!
//! Every label is bound to a [`TextKey`]; switching language re-reads the
//! table by key.

use crate::config::Language;

/// Stable identifier for a translatable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Main widget
    Title,
    Unpin,
    Pin,
    Close,
    Settings,
    ImageUnavailable,

    // Settings dialog
    WindowTitle,
    ThemeSection,
    ImageSection,
    BrowseButton,
    WindowSizeSection,
    WidthLabel,
    HeightLabel,
    RefreshSection,
    IntervalLabel,
    FontSection,
    SizeLabel,
    LanguageSection,
    LanguageLabel,
    SaveButton,
    CancelButton,
    ImageFileType,
    AllFiles,
}

impl TextKey {
    /// Every key, for table completeness checks.
    pub fn all() -> &'static [TextKey] {
        use TextKey::*;
        &[
            Title,
            Unpin,
            Pin,
            Close,
            Settings,
            ImageUnavailable,
            WindowTitle,
            ThemeSection,
            ImageSection,
            BrowseButton,
            WindowSizeSection,
            WidthLabel,
            HeightLabel,
            RefreshSection,
            IntervalLabel,
            FontSection,
            SizeLabel,
            LanguageSection,
            LanguageLabel,
            SaveButton,
            CancelButton,
            ImageFileType,
            AllFiles,
        ]
    }
}

/// Look up the label for `key` in `language`.
pub fn text(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::ZhCn => zh_cn(key),
        Language::EnUs => en_us(key),
    }
}

impl Language {
    /// Shorthand for [`text`].
    pub fn text(self, key: TextKey) -> &'static str {
        text(self, key)
    }
}

const IMAGE_UNAVAILABLE: &str = "小太阳图片无法加载! \nUnable to load the \nimage of Sunshine!";

fn zh_cn(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Sunshine小太阳",
        TextKey::Unpin => "取消置顶",
        TextKey::Pin => "置顶",
        TextKey::Close => "关闭",
        TextKey::Settings => "设置",
        TextKey::ImageUnavailable => IMAGE_UNAVAILABLE,
        TextKey::WindowTitle => "小太阳 Sunshine 配置",
        TextKey::ThemeSection => "主题选择 (实时预览)",
        TextKey::ImageSection => "图片设置",
        TextKey::BrowseButton => "浏览",
        TextKey::WindowSizeSection => "窗口大小",
        TextKey::WidthLabel => "宽度 (建议>=250):",
        TextKey::HeightLabel => "高度 (建议>=310):",
        TextKey::RefreshSection => "文字刷新间隔 (最小支持1秒，否则无法保存)",
        TextKey::IntervalLabel => "间隔(秒):",
        TextKey::FontSection => "字体大小 (最小为5)",
        TextKey::SizeLabel => "大小:",
        TextKey::LanguageSection => "语言设置 Language Settings",
        TextKey::LanguageLabel => "语言 Language:",
        TextKey::SaveButton => "保存 Save",
        TextKey::CancelButton => "取消 Cancel",
        TextKey::ImageFileType => "图片文件类型",
        TextKey::AllFiles => "所有文件",
    }
}

fn en_us(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "Sunshine",
        TextKey::Unpin => "Unpin",
        TextKey::Pin => "Pin",
        TextKey::Close => "Close",
        TextKey::Settings => "Settings",
        TextKey::ImageUnavailable => IMAGE_UNAVAILABLE,
        TextKey::WindowTitle => "小太阳 Sunshine Settings",
        TextKey::ThemeSection => "Theme Selection (Live Preview)",
        TextKey::ImageSection => "Image Settings",
        TextKey::BrowseButton => "Browse",
        TextKey::WindowSizeSection => "Window Size",
        TextKey::WidthLabel => "Width (Suggested: w>=310):",
        TextKey::HeightLabel => "Height (Suggested: h>=310):",
        TextKey::RefreshSection => "Text Refresh Interval (Minimum 1 second)",
        TextKey::IntervalLabel => "Interval(s):",
        TextKey::FontSection => "Font Size (Minimum 5)",
        TextKey::SizeLabel => "Size:",
        TextKey::LanguageSection => "语言设置 Language Settings",
        TextKey::LanguageLabel => "语言 Language:",
        TextKey::SaveButton => "Save",
        TextKey::CancelButton => "Cancel",
        TextKey::ImageFileType => "Image File Type",
        TextKey::AllFiles => "All Files",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_translated() {
        for lang in Language::all() {
            for key in TextKey::all() {
                assert!(!text(*lang, *key).is_empty(), "{lang} missing {key:?}");
            }
        }
    }

    #[test]
    fn test_pin_labels_differ_by_language() {
        assert_eq!(Language::EnUs.text(TextKey::Pin), "Pin");
        assert_eq!(Language::EnUs.text(TextKey::Unpin), "Unpin");
        assert_eq!(Language::ZhCn.text(TextKey::Pin), "置顶");
        assert_eq!(Language::ZhCn.text(TextKey::Unpin), "取消置顶");
    }

    #[test]
    fn test_placeholder_is_bilingual() {
        assert_eq!(
            Language::ZhCn.text(TextKey::ImageUnavailable),
            Language::EnUs.text(TextKey::ImageUnavailable)
        );
    }
}
