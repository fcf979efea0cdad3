//! Markdown to HTML conversion using comrak

use comrak::{markdown_to_html, Options};

use crate::config::HtmlConfig;

/// Convert `markdown` to an HTML fragment.
pub fn to_html(markdown: &str, config: &HtmlConfig) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = config.strikethrough;
    options.extension.table = config.table;
    options.extension.autolink = config.autolink;
    options.extension.tasklist = config.tasklist;

    // Pass raw HTML in the document through
    options.render.unsafe_ = true;

    markdown_to_html(markdown, &options)
}
