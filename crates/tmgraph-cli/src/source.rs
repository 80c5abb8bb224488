//! Grammar source acquisition.
//!
//! A source is either an `http`/`https` URL, fetched with a blocking GET,
//! or a local file path. Every failure is reported as
//! [`TmGraphError::SourceUnavailable`].

use std::fs;

use log::{debug, info};
use reqwest::Url;

use tmgraph::TmGraphError;

/// Load the raw bytes of the grammar at `location`.
///
/// # Errors
///
/// Returns [`TmGraphError::SourceUnavailable`] if the file cannot be read,
/// the request fails, or the server answers with a non-success status.
pub fn load_source(location: &str) -> Result<Vec<u8>, TmGraphError> {
    let bytes = match remote_url(location) {
        Some(url) => fetch(url),
        None => {
            info!(path = location; "Reading grammar file");
            fs::read(location).map_err(|err| TmGraphError::source_unavailable(location, err))
        }
    }?;

    debug!(bytes_len = bytes.len(); "Source loaded");
    Ok(bytes)
}

/// `location` as a URL, if it is a valid `http` or `https` one.
fn remote_url(location: &str) -> Option<Url> {
    Url::parse(location)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn fetch(url: Url) -> Result<Vec<u8>, TmGraphError> {
    info!(url = url.as_str(); "Fetching grammar");
    let location = url.to_string();

    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|err| TmGraphError::source_unavailable(&location, err))?;

    let bytes = response
        .bytes()
        .map_err(|err| TmGraphError::source_unavailable(&location, err))?;

    Ok(bytes.to_vec())
}
