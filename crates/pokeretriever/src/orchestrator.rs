use crate::prelude::*;
use futures::future::join_all;
use pokeretriever_core::modes::Endpoints;
use pokeretriever_core::records::Record;
use std::fs;

use crate::factory::build_record;
use crate::fetch::fetch_json;
use crate::request::{BatchSource, Request};

/// Result for one slot of a batch
pub type ItemOutcome = Result<Record, Error>;

/// Collect the identifiers of a batch
///
/// File lines are kept verbatim, blank ones included. A trailing newline does
/// not add an extra entry.
pub fn read_identifiers(source: &BatchSource) -> Result<Vec<String>, Error> {
    match source {
        BatchSource::Single(value) => Ok(vec![value.clone()]),
        BatchSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Io(format!("Failed to read input file {}: {}", path.display(), e))
            })?;
            Ok(content.lines().map(String::from).collect())
        }
    }
}

/// Fetch every identifier concurrently
///
/// Returns one outcome per identifier, in input order. A failed item never
/// cancels its siblings.
pub async fn run_batch(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    request: &Request,
    identifiers: &[String],
) -> Vec<ItemOutcome> {
    let item_futures = identifiers.iter().map(|identifier| {
        let url = endpoints.target_url(request.mode, identifier);
        fetch_item(client, request, url)
    });

    join_all(item_futures).await
}

async fn fetch_item(client: &reqwest::Client, request: &Request, url: String) -> ItemOutcome {
    let body = fetch_json(client, &url).await?;
    let outcome = build_record(client, request, body).await;

    if let Err(e) = &outcome {
        log::debug!("Failed to build record from {url}: {e}");
    }

    outcome
}
