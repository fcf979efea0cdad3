//! Output module
//!
//! Optional HTML conversion and word truncation, then terminal output with
//! automatic TTY detection.

mod formatter;
mod html;
mod terminal;
mod truncate;

pub use formatter::print_markdown;
pub use html::to_html;
pub use truncate::truncate_words;
