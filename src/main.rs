mod cli;
mod config;
mod display;
mod error;
mod highlight;
mod renderer;
mod source;
mod style;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use crate::cli::args::OutputOptions;
use crate::error::MdviewError;

#[derive(Parser)]
#[command(name = "mdview", version)]
#[command(about = "View Markdown files or GitHub raw links in the terminal", long_about = None)]
struct Cli {
    /// Markdown file path or GitHub raw link
    source: String,

    /// Optional word limit, or --html followed by an optional word limit
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            debug!("Argument parsing failed: {}", e);
            exit_with(MdviewError::Usage)
        }
    };

    let options = OutputOptions::from_trailing(&cli.rest);
    if let Err(e) = cli::view::run(&cli.source, cli.config, options) {
        exit_with(e);
    }
}

fn exit_with(error: MdviewError) -> ! {
    match error {
        MdviewError::Usage => eprintln!("{}", error),
        _ => eprintln!("Error: {}", error),
    }
    std::process::exit(1);
}
