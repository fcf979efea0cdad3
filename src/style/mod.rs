//! ANSI style table
//!
//! Maps every supported style tag to its escape-sequence prefix.
//! All styled spans share the single `RESET` terminator.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Shared terminator for every styled span
pub const RESET: &str = "\x1b[0m";

/// Terminal text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    BoldItalic,
    BoldUnderline,
    ItalicUnderline,
    BoldItalicUnderline,
    ItalicBoldUnderline,
    DoubleUnderline,
    Inverse,
    Hidden,
    Fraktur,
    Normal,
    Blink,
    Reverse,
}

impl Style {
    /// Every style, in table order
    pub const ALL: [Style; 16] = [
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Strikethrough,
        Style::BoldItalic,
        Style::BoldUnderline,
        Style::ItalicUnderline,
        Style::BoldItalicUnderline,
        Style::ItalicBoldUnderline,
        Style::DoubleUnderline,
        Style::Inverse,
        Style::Hidden,
        Style::Fraktur,
        Style::Normal,
        Style::Blink,
        Style::Reverse,
    ];

    /// Escape sequence that opens a span in this style
    pub fn prefix(self) -> &'static str {
        match self {
            Style::Bold => "\x1b[1m",
            Style::Italic => "\x1b[3m",
            Style::Underline => "\x1b[4m",
            Style::Strikethrough => "\x1b[9m",
            Style::BoldItalic => "\x1b[1m\x1b[3m",
            Style::BoldUnderline => "\x1b[1m\x1b[4m",
            Style::ItalicUnderline => "\x1b[3m\x1b[4m",
            Style::BoldItalicUnderline => "\x1b[1m\x1b[3m\x1b[4m",
            Style::ItalicBoldUnderline => "\x1b[3m\x1b[1m\x1b[4m",
            Style::DoubleUnderline => "\x1b[21m",
            Style::Inverse | Style::Reverse => "\x1b[7m",
            Style::Hidden => "\x1b[8m",
            Style::Fraktur => "\x1b[20m",
            Style::Normal => "\x1b[22m",
            Style::Blink => "\x1b[5m",
        }
    }

    /// Tag name as written in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Strikethrough => "strikethrough",
            Style::BoldItalic => "bold_italic",
            Style::BoldUnderline => "bold_underline",
            Style::ItalicUnderline => "italic_underline",
            Style::BoldItalicUnderline => "bold_italic_underline",
            Style::ItalicBoldUnderline => "italic_bold_underline",
            Style::DoubleUnderline => "double_underline",
            Style::Inverse => "inverse",
            Style::Hidden => "hidden",
            Style::Fraktur => "fraktur",
            Style::Normal => "normal",
            Style::Blink => "blink",
            Style::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| format!("unknown style '{}'", s))
    }
}

impl TryFrom<String> for Style {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Wrap `text` in `style`, terminated by the shared reset sequence
pub fn apply_style(text: &str, style: Style) -> String {
    format!("{}{}{}", style.prefix(), text, RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_prefixes_are_exact() {
        assert_eq!(Style::Bold.prefix(), "\x1b[1m");
        assert_eq!(Style::Italic.prefix(), "\x1b[3m");
        assert_eq!(Style::Underline.prefix(), "\x1b[4m");
        assert_eq!(Style::Strikethrough.prefix(), "\x1b[9m");
        assert_eq!(Style::DoubleUnderline.prefix(), "\x1b[21m");
        assert_eq!(Style::Hidden.prefix(), "\x1b[8m");
        assert_eq!(Style::Fraktur.prefix(), "\x1b[20m");
        assert_eq!(Style::Normal.prefix(), "\x1b[22m");
        assert_eq!(Style::Blink.prefix(), "\x1b[5m");
        assert_eq!(RESET, "\x1b[0m");
    }

    #[test]
    fn test_inverse_and_reverse_share_prefix() {
        assert_eq!(Style::Inverse.prefix(), "\x1b[7m");
        assert_eq!(Style::Reverse.prefix(), Style::Inverse.prefix());
    }

    #[test]
    fn test_compound_prefixes_concatenate() {
        assert_eq!(
            Style::BoldItalic.prefix(),
            format!("{}{}", Style::Bold.prefix(), Style::Italic.prefix())
        );
        assert_eq!(
            Style::BoldItalicUnderline.prefix(),
            "\x1b[1m\x1b[3m\x1b[4m"
        );
        assert_eq!(
            Style::ItalicBoldUnderline.prefix(),
            "\x1b[3m\x1b[1m\x1b[4m"
        );
    }

    #[test]
    fn test_apply_style() {
        assert_eq!(apply_style("hi", Style::Bold), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn test_apply_style_does_not_nest() {
        let inner = apply_style("x", Style::Italic);
        let outer = apply_style(&inner, Style::Bold);
        assert_eq!(outer, "\x1b[1m\x1b[3mx\x1b[0m\x1b[0m");
    }

    #[test]
    fn test_name_roundtrip() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "sparkle".parse::<Style>().unwrap_err();
        assert!(err.contains("sparkle"));
    }
}
