//! Trailing argument grammar
//!
//! After the source argument mdview accepts either a bare word limit or
//! `--html` followed by an optional word limit:
//!
//! ```text
//! mdview README.md 50
//! mdview README.md --html 50
//! ```
//!
//! `--html` is only recognized when at least one argument follows it, and
//! arguments that fit neither form are ignored.

/// What to do with the rendered text before printing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Keep only this many words (zero disables truncation)
    pub word_limit: Option<usize>,

    /// Convert to HTML before truncation
    pub html: bool,
}

impl OutputOptions {
    /// Interpret the arguments that follow the source
    pub fn from_trailing(args: &[String]) -> Self {
        let mut options = Self::default();

        match args {
            [limit] => options.word_limit = parse_word_limit(limit),
            [flag, rest @ ..] if flag == "--html" && !rest.is_empty() => {
                options.html = true;
                if let [limit] = rest {
                    options.word_limit = parse_word_limit(limit);
                }
            }
            _ => {}
        }

        options
    }
}

/// A purely numeric, non-zero argument
fn parse_word_limit(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok().filter(|&limit| limit > 0)
}
