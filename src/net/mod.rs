// SPDX-License-Identifier: MPL-2.0
//! Remote content fetching.
//!
//! All downloads go through one bounded client: limited redirects, explicit
//! user agent, and a hard in-memory size cap enforced while streaming.

pub mod unsafe_image;

use crate::error::{Error, Result};
use futures_util::StreamExt;
use std::time::Duration;

const USER_AGENT: &str = concat!("TokenLens/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hard cap on fetched content size.
pub const MAX_RESPONSE_BYTES: u64 = 32 * 1024 * 1024;

fn client() -> Result<reqwest::Client> {
    // Build client with explicit redirect policy and user agent
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(Error::from)
}

/// Downloads `url` into memory.
///
/// Fails on non-success statuses and on responses that exceed
/// [`MAX_RESPONSE_BYTES`], whether announced up front or discovered
/// mid-stream.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let client = client()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BYTES {
            return Err(Error::Fetch(format!("response too large ({length} bytes)")));
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (bytes.len() + chunk.len()) as u64 > MAX_RESPONSE_BYTES {
            return Err(Error::Fetch("response exceeded size cap".to_string()));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// Resolves a content-addressed source through `gateway`, then downloads it.
///
/// Owned arguments so the future is `'static` and can ride a task.
pub async fn load_content_addressed(source: String, gateway: String) -> Result<Vec<u8>> {
    let url = crate::token::ipfs::gateway_url(&source, &gateway)?;
    fetch_bytes(&url).await
}
