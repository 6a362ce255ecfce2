//! Outbound HTTP GET against third-party APIs.
//!
//! One request per call: no timeout, retry or redirect policy beyond what
//! `reqwest` does by default. Failures come back as [`Error::Fetch`] so the
//! caller can answer its own client instead of the process giving up.

use bytes::Bytes;
use http::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// A downstream response, read to the end.
#[derive(Debug)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Issues GET requests on behalf of handlers.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// GETs `url` and returns its status and full body.
    pub async fn get(&self, url: Url) -> Result<Fetched, Error> {
        debug!(%url, "fetching upstream");

        let res = self.client.get(url).send().await?;
        let status = res.status();
        let body = res.bytes().await?;

        debug!(%status, len = body.len(), "upstream answered");
        Ok(Fetched { status, body })
    }
}
