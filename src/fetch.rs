use anyhow::{ensure, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::config::Config;

/// Twitch Helix endpoint listing live streams.
pub const STREAMS_URL: &str = "https://api.twitch.tv/helix/streams";

/// Remote source of the displayed counter. Implementations do a single
/// attempt per call; retry policy belongs to the caller.
pub trait CounterSource {
    fn fetch(&self) -> Result<u64>;
}

#[derive(Debug, Deserialize)]
struct StreamsResponse {
    #[serde(default)]
    data: Vec<StreamEntry>,
}

#[derive(Debug, Deserialize)]
struct StreamEntry {
    viewer_count: u64,
}

/// Extract the viewer count from a Helix streams payload. An offline channel
/// returns an empty `data` array, which counts as zero viewers.
pub fn decode_viewer_count(body: &str) -> Result<u64> {
    let parsed: StreamsResponse =
        serde_json::from_str(body).context("decode streams payload")?;
    Ok(parsed
        .data
        .first()
        .map(|entry| entry.viewer_count)
        .unwrap_or(0))
}

/// Viewer counts for one channel via the Helix streams endpoint.
///
/// Requests deliberately carry no timeout so a stalled attempt blocks only
/// its own fetch; the scheduler skips ticks while one is in flight.
pub struct HelixSource {
    client: Client,
    channel: String,
}

impl HelixSource {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let client_id = HeaderValue::from_str(&config.client_id)
            .context("client id is not a valid header value")?;
        headers.insert("Client-ID", client_id);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent("viewer-overlay")
            .build()
            .context("build http client")?;

        Ok(Self {
            client,
            channel: config.channel.clone(),
        })
    }
}

impl CounterSource for HelixSource {
    fn fetch(&self) -> Result<u64> {
        let response = self
            .client
            .get(STREAMS_URL)
            .query(&[("user_login", self.channel.as_str())])
            .send()
            .context("request streams")?;
        ensure!(
            response.status().is_success(),
            "helix returned {}",
            response.status()
        );
        let body = response.text().context("read streams body")?;
        decode_viewer_count(&body)
    }
}
