//! Markdown-to-ANSI renderer
//!
//! Rewrites common Markdown markers into ANSI styled spans with an ordered
//! list of substitution stages. Later stages see the output of earlier ones,
//! so the order below is part of the behavior:
//!
//! 1. headings, 2. bold, 3. italic (`_`), 4. underline (`__`),
//! 5. strikethrough, 6. block quotes, 7. unordered lists,
//! 8. ordered lists, 9. fenced code blocks.
//!
//! Italic runs before underline, so a plain `__text__` is consumed by the
//! italic stage as two empty italic spans around `text`. Fenced code is
//! handled last, after the inline stages have already rewritten its body.

use log::{debug, trace};
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::config::Config;
use crate::highlight::{self, DEFAULT_LANGUAGE};
use crate::style::{apply_style, Style};

/// A single substitution pass
type Stage = fn(&str, &Config) -> String;

/// Stages in application order
const STAGES: [(&str, Stage); 9] = [
    ("heading", headings),
    ("bold", bold),
    ("italic", italic),
    ("underline", underline),
    ("strikethrough", strikethrough),
    ("quote", quotes),
    ("unordered_list", unordered_lists),
    ("ordered_list", ordered_lists),
    ("code_fence", code_fences),
];

static HEADING: OnceLock<Regex> = OnceLock::new();
static BOLD: OnceLock<Regex> = OnceLock::new();
static ITALIC: OnceLock<Regex> = OnceLock::new();
static UNDERLINE: OnceLock<Regex> = OnceLock::new();
static STRIKETHROUGH: OnceLock<Regex> = OnceLock::new();
static QUOTE: OnceLock<Regex> = OnceLock::new();
static UNORDERED: OnceLock<Regex> = OnceLock::new();
static ORDERED: OnceLock<Regex> = OnceLock::new();
static FENCE: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("markup patterns are valid"))
}

/// Markdown renderer for terminal output
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Apply every stage, in order, to `text`
    pub fn render_markdown(&self, text: &str) -> String {
        STAGES
            .iter()
            .fold(text.to_string(), |current, (name, stage)| {
                trace!("Applying {} stage", name);
                stage(&current, self.config)
            })
    }
}

/// Replace every match of `re` in `text` with the capture group `group`
/// wrapped in `style`.
fn style_group(re: &Regex, text: &str, group: usize, style: Style) -> String {
    re.replace_all(text, |caps: &Captures| apply_style(&caps[group], style))
        .into_owned()
}

fn headings(text: &str, config: &Config) -> String {
    let re = regex(&HEADING, r"(?m)^(#{1,6})\s*(.*)");
    style_group(re, text, 2, config.styles.heading)
}

fn bold(text: &str, config: &Config) -> String {
    let re = regex(&BOLD, r"\*\*(.*?)\*\*");
    style_group(re, text, 1, config.styles.bold)
}

fn italic(text: &str, config: &Config) -> String {
    let re = regex(&ITALIC, r"_(.*?)_");
    style_group(re, text, 1, config.styles.italic)
}

fn underline(text: &str, config: &Config) -> String {
    let re = regex(&UNDERLINE, r"__(.*?)__");
    style_group(re, text, 1, config.styles.underline)
}

fn strikethrough(text: &str, config: &Config) -> String {
    let re = regex(&STRIKETHROUGH, r"~~(.*?)~~");
    style_group(re, text, 1, config.styles.strikethrough)
}

fn quotes(text: &str, config: &Config) -> String {
    let re = regex(&QUOTE, r"(?m)^> (.*)");
    style_group(re, text, 1, config.styles.quote)
}

fn unordered_lists(text: &str, _config: &Config) -> String {
    regex(&UNORDERED, r"(?m)^[*+-]\s+(.*)")
        .replace_all(text, "- ${1}")
        .into_owned()
}

/// Item numbers are not kept: every item becomes `1.`
fn ordered_lists(text: &str, _config: &Config) -> String {
    regex(&ORDERED, r"(?m)^\d+\.\s+(.*)")
        .replace_all(text, "1. ${1}")
        .into_owned()
}

/// Replace each fenced block with its highlighted body.
///
/// Replacement is by exact text, so identical blocks anywhere in the
/// document are all replaced the same way.
fn code_fences(text: &str, config: &Config) -> String {
    let blocks: Vec<(String, String, String)> = regex(&FENCE, r"(?s)```(\w+)?\n(.*?)```")
        .captures_iter(text)
        .map(|caps| {
            let lang = caps.get(1).map_or("", |m| m.as_str());
            (caps[0].to_string(), lang.to_string(), caps[2].to_string())
        })
        .collect();

    let mut output = text.to_string();
    for (fence, lang, code) in blocks {
        let lang = if lang.is_empty() {
            DEFAULT_LANGUAGE
        } else {
            lang.as_str()
        };
        debug!("Highlighting {} byte code block as {}", code.len(), lang);
        let highlighted = highlight::highlight_code(&code, lang, &config.highlight.theme);
        output = output.replace(&fence, &highlighted);
    }

    output
}
