//! Content sources
//!
//! Reads a document either from a local path or, when the identifier starts
//! with a configured remote prefix, over HTTP. Failures are fatal to the run.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use crate::config::SourceConfig;
use crate::error::{MdviewError, Result};

/// Where a document comes from
#[derive(Debug, PartialEq, Eq)]
pub enum Source<'a> {
    Remote(&'a str),
    File(&'a str),
}

impl<'a> Source<'a> {
    /// Classify `identifier` using the configured remote prefixes
    pub fn classify(identifier: &'a str, config: &SourceConfig) -> Self {
        if config
            .remote_prefixes
            .iter()
            .any(|prefix| identifier.starts_with(prefix.as_str()))
        {
            Source::Remote(identifier)
        } else {
            Source::File(identifier)
        }
    }
}

/// Fetch the raw document named by `identifier`
pub fn get_content(identifier: &str, config: &SourceConfig) -> Result<String> {
    match Source::classify(identifier, config) {
        Source::Remote(url) => fetch_remote(url, config),
        Source::File(path) => read_file(path),
    }
}

fn fetch_remote(url: &str, config: &SourceConfig) -> Result<String> {
    debug!("Fetching {}", url);
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout_secs.map(Duration::from_secs))
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}

fn read_file(path: &str) -> Result<String> {
    debug!("Reading {}", path);
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MdviewError::NotFound(path.to_string()),
        _ => MdviewError::Io(e),
    })
}
