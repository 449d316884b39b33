//! Console and file output for a finished batch.

use crate::prelude::{eprintln, println, *};
use chrono::Local;
use colored::Colorize;
use pokeretriever_core::records::Record;
use pokeretriever_core::report::{format_block, format_header, SKIP_NOTICE};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::orchestrator::ItemOutcome;
use crate::request::Request;

/// Output destination, chosen once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Console { json: bool },
    File { path: PathBuf, json: bool },
}

impl Sink {
    pub fn for_request(request: &Request) -> Self {
        match &request.output {
            Some(path) => Sink::File {
                path: path.clone(),
                json: request.json,
            },
            None => Sink::Console { json: request.json },
        }
    }

    /// Emit every outcome in batch order
    pub fn write_all(&self, outcomes: &[ItemOutcome]) -> Result<()> {
        match self {
            Sink::Console { json } => {
                for outcome in outcomes {
                    print_outcome(outcome, *json)?;
                }
            }
            Sink::File { path, json } => {
                for outcome in outcomes {
                    let body = match outcome {
                        Ok(record) => render(record, *json)?,
                        Err(_) => SKIP_NOTICE.to_string(),
                    };
                    append_item(path, outcomes.len(), &body)?;
                }
            }
        }

        Ok(())
    }
}

fn render(record: &Record, json: bool) -> Result<String> {
    if json {
        record
            .to_json()
            .map_err(|e| eyre!("JSON serialization failed: {}", e))
    } else {
        Ok(record.to_string())
    }
}

/// Console text for one slot; failures show the raw error detail
fn render_outcome(outcome: &ItemOutcome, json: bool) -> Result<String> {
    match (outcome, json) {
        (Ok(record), _) => render(record, json),
        (Err(e), true) => Ok(serde_json::to_string_pretty(
            &serde_json::json!({ "error": e.to_string() }),
        )?),
        (Err(e), false) => Ok(e.to_string().red().to_string()),
    }
}

fn print_outcome(outcome: &ItemOutcome, json: bool) -> Result<()> {
    println!("{}
", render_outcome(outcome, json)?);
    Ok(())
}

/// Append one rendered item, writing the header first when the file is new
fn append_item(path: &Path, request_count: usize, body: &str) -> Result<()> {
    append_item_with(path, request_count, body, ensure_header)
}

/// A failure from `header` is reported and the item is still appended.
fn append_item_with(
    path: &Path,
    request_count: usize,
    body: &str,
    header: impl FnOnce(&Path, usize) -> io::Result<()>,
) -> Result<()> {
    if let Err(e) = header(path, request_count) {
        eprintln!(
            "{} {}: {}",
            "Failed to write header to".yellow(),
            path.display(),
            e
        );
    }

    append(path, &format_block(body))
        .with_context(|| format!("Failed to append to {}", path.display()))
}

fn ensure_header(path: &Path, request_count: usize) -> io::Result<()> {
    let needs_header = match fs::metadata(path) {
        Ok(metadata) => metadata.len() == 0,
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => return Err(e),
    };

    if needs_header {
        append(path, &format_header(&Local::now().naive_local(), request_count))?;
    }

    Ok(())
}

fn append(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}
