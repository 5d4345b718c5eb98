use crate::bridge::process_response;
use crate::codec::{decode, DecodeError};
use crate::domain::LocationRecord;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

const RESPONSE: &str = "response";

/// Fetches a location payload from `url` and decodes it.
///
/// `Ok(None)` means the endpoint answered with a blank payload.
#[instrument(skip(client))]
pub async fn fetch_location(client: &Client, url: &str) -> Result<Option<LocationRecord>, RemoteError> {
    info!("Retrieving location...");

    let response = client.get(url).send().await?.error_for_status()?;
    let mut shaped = process_response(response).await;
    let body = shaped.remove(RESPONSE).ok_or(RemoteError::MissingBody)?;

    let record = decode(body)?;
    info!("Retrieving location... OK, {}", if record.is_some() { "found" } else { "blank" });

    Ok(record)
}

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response has no JSON object body")]
    MissingBody,
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl RemoteError {
    /// Short code for the error object passed to scripting callbacks.
    pub fn code(&self) -> &'static str {
        match self {
            RemoteError::Request(_) => "request_failed",
            RemoteError::MissingBody => "missing_body",
            RemoteError::Decode(_) => "invalid_location",
        }
    }
}
