use serde::Deserialize;

use crate::style::Style;

/// Default prefix for remote raw-content links
pub const GITHUB_RAW_PREFIX: &str = "https://raw.githubusercontent.com";

/// Default syntect theme for code blocks
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

/// mdview configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where content comes from
    pub source: SourceConfig,

    /// Styles applied by each markup rule
    pub styles: Styles,

    /// Code block highlighting
    pub highlight: HighlightConfig,

    /// HTML conversion extensions
    pub html: HtmlConfig,
}

/// Content source settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Identifiers starting with one of these are fetched over HTTP
    pub remote_prefixes: Vec<String>,

    /// Request timeout in seconds (none by default)
    pub timeout_secs: Option<u64>,
}

/// Style used by each markup rule
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub heading: Style,
    pub bold: Style,
    pub italic: Style,
    pub underline: Style,
    pub strikethrough: Style,
    pub quote: Style,
}

/// Highlighting settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a bundled syntect theme
    pub theme: String,
}

/// Markdown-to-HTML extension toggles
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub strikethrough: bool,
    pub table: bool,
    pub autolink: bool,
    pub tasklist: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            remote_prefixes: vec![GITHUB_RAW_PREFIX.to_string()],
            timeout_secs: None,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            heading: Style::Bold,
            bold: Style::Bold,
            italic: Style::Italic,
            underline: Style::Underline,
            strikethrough: Style::Strikethrough,
            quote: Style::Italic,
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            strikethrough: true,
            table: true,
            autolink: true,
            tasklist: false,
        }
    }
}
