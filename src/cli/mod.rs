//! Command-line interface module
//!
//! - args: positional word limit and `--html` grammar
//! - view: the fetch → render → output pipeline
pub mod args;
pub mod view;
