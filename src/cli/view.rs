use log::debug;
use std::path::PathBuf;

use crate::cli::args::OutputOptions;
use crate::config::{self, Config};
use crate::display;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::source;

/// View a document in the terminal
pub fn run(source: &str, config_path: Option<PathBuf>, options: OutputOptions) -> Result<()> {
    let config = config::load_or_default(config_path.as_deref())?;

    let content = source::get_content(source, &config.source)?;
    let output = render(&content, &config, options);

    display::print_markdown(&output);

    Ok(())
}

/// Transform, optionally convert to HTML, then optionally truncate
pub fn render(content: &str, config: &Config, options: OutputOptions) -> String {
    let renderer = Renderer::new(config);
    let mut output = renderer.render_markdown(content);

    if options.html {
        debug!("Converting to HTML");
        output = display::to_html(&output, &config.html);
    }

    if let Some(limit) = options.word_limit {
        debug!("Truncating to {} words", limit);
        output = display::truncate_words(&output, limit);
    }

    output
}
