use crate::prelude::*;

/// GET a URL and decode the body as JSON
///
/// Non-2xx responses are reported as [`Error::Status`] without reading the body.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<serde_json::Value, Error> {
    log::debug!("GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Network(format!("Failed to fetch {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| Error::Network(format!("Failed to parse body of {url}: {e}")))?;

    log::debug!("GET {url} -> {status}");

    Ok(body)
}
