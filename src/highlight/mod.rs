//! Code block highlighting
//!
//! Wraps syntect to turn a fenced code body into 24-bit ANSI colored text.
//! Highlighting fails open: any error yields the code unchanged.
//!
//! # Example
//! ```ignore
//! let colored = highlight::highlight_code("fn main() {}", "rust", "base16-ocean.dark");
//! ```

use log::{debug, warn};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};
use thiserror::Error;

use crate::config::DEFAULT_THEME;
use crate::style::RESET;

/// Language assumed for fences without a tag
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// Why a code body could not be highlighted
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("no syntax found for language '{0}'")]
    UnknownLanguage(String),

    #[error("theme '{0}' is not bundled")]
    MissingTheme(String),

    #[error("syntect error: {0}")]
    Syntax(#[from] syntect::Error),
}

/// A resolved language
enum Resolved<'a> {
    Plain,
    Syntax(&'a SyntaxReference),
}

/// Syntax highlighter holding the bundled syntect sets
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        debug!("Loading syntect syntax and theme sets");
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        debug!(
            "Loaded {} syntaxes and {} themes",
            syntax_set.syntaxes().len(),
            theme_set.themes.len()
        );
        Self {
            syntax_set,
            theme_set,
        }
    }

    /// Get a theme by name, falling back to the default theme.
    fn theme(&self, name: &str) -> Option<&Theme> {
        self.theme_set.themes.get(name).or_else(|| {
            warn!("Unknown theme '{}', using {}", name, DEFAULT_THEME);
            self.theme_set.themes.get(DEFAULT_THEME)
        })
    }

    /// Render `code` as `language` with ANSI colors.
    pub fn try_highlight(
        &self,
        code: &str,
        language: &str,
        theme_name: &str,
    ) -> Result<String, HighlightError> {
        let syntax = match self.resolve(language)? {
            Resolved::Plain => return Ok(code.to_string()),
            Resolved::Syntax(syntax) => syntax,
        };
        let theme = self
            .theme(theme_name)
            .ok_or_else(|| HighlightError::MissingTheme(theme_name.to_string()))?;

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let ranges = highlighter.highlight_line(line, &self.syntax_set)?;
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(RESET);

        Ok(output)
    }

    /// Find the syntax for a fence language tag.
    ///
    /// Tries, in order:
    /// 1. Plain-text identifiers, which resolve without a syntax
    /// 2. Common aliases mapped to an extension (e.g. "python" -> "py")
    /// 3. The tag as an extension or name token
    /// 4. A case-insensitive match on the syntax name
    fn resolve(&self, language: &str) -> Result<Resolved<'_>, HighlightError> {
        let lang_lower = language.to_lowercase();

        let extension = match lang_lower.as_str() {
            "plaintext" | "plain" | "text" | "txt" => return Ok(Resolved::Plain),
            "rust" | "rs" => "rs",
            "python" | "py" | "python3" => "py",
            "javascript" | "js" => "js",
            "c" => "c",
            "cpp" | "c++" | "cxx" => "cpp",
            "csharp" | "cs" => "cs",
            "java" => "java",
            "go" | "golang" => "go",
            "ruby" | "rb" => "rb",
            "php" => "php",
            "scala" => "scala",
            "html" | "htm" => "html",
            "css" => "css",
            "json" => "json",
            "yaml" | "yml" => "yaml",
            "xml" => "xml",
            "markdown" | "md" => "md",
            "sql" => "sql",
            "shell" | "sh" | "bash" | "zsh" => "sh",
            "makefile" | "make" => "Makefile",
            "lua" => "lua",
            "perl" | "pl" => "pl",
            "r" => "r",
            "haskell" | "hs" => "hs",
            "erlang" | "erl" => "erl",
            "clojure" | "clj" => "clj",
            "diff" | "patch" => "diff",
            other => other,
        };

        if let Some(syntax) = self.syntax_set.find_syntax_by_extension(extension) {
            return Ok(Resolved::Syntax(syntax));
        }

        if let Some(syntax) = self.syntax_set.find_syntax_by_token(language) {
            return Ok(Resolved::Syntax(syntax));
        }

        self.syntax_set
            .syntaxes()
            .iter()
            .find(|syntax| syntax.name.to_lowercase() == lang_lower)
            .map(Resolved::Syntax)
            .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))
    }
}

static HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();

/// Get or create the global syntax highlighter.
pub fn get_highlighter() -> &'static SyntaxHighlighter {
    HIGHLIGHTER.get_or_init(SyntaxHighlighter::new)
}

/// Highlight `code`, returning it unchanged on any failure.
pub fn highlight_code(code: &str, language: &str, theme_name: &str) -> String {
    match get_highlighter().try_highlight(code, language, theme_name) {
        Ok(highlighted) => highlighted,
        Err(e) => {
            debug!("Leaving code block unhighlighted: {}", e);
            code.to_string()
        }
    }
}
