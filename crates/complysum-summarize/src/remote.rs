//! Remote summarizer — hosted summarization model over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::backend::SummaryBackend;

/// Hard ceiling on the round trip; on timeout the pipeline proceeds to the
/// local fallback immediately, without retrying.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// The endpoint only accepts short inputs; anything longer is cut here.
const MAX_INPUT_CHARS: usize = 1000;
const MAX_SUMMARY_LENGTH: u32 = 300;
const MIN_SUMMARY_LENGTH: u32 = 80;

/// Client for a hosted summarization endpoint (BART-style inference API).
pub struct RemoteSummarizer {
    client: Client,
    url: String,
    api_key: String,
}

impl RemoteSummarizer {
    /// Errors if the HTTP client cannot be built; the timeout is part of the
    /// client, so a degraded client without it is never handed out.
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SummaryBackend for RemoteSummarizer {
    async fn summarize(&self, text: &str) -> Option<String> {
        let input = clip(text, MAX_INPUT_CHARS);
        let body = json!({
            "inputs": input,
            "parameters": {
                "max_length": MAX_SUMMARY_LENGTH,
                "min_length": MIN_SUMMARY_LENGTH,
                "do_sample": false,
            },
        });

        let response = match self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Remote summarization unavailable: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Remote summarization returned status {}",
                response.status()
            );
            return None;
        }

        let value: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!("Remote summarization payload unreadable: {}", e);
                return None;
            }
        };

        // Expected shape: [{ "summary_text": "..." }]
        match value.get(0).and_then(|v| v.get("summary_text")).and_then(|v| v.as_str()) {
            Some(summary) => {
                debug!("Remote summary received ({} chars)", summary.len());
                Some(summary.to_string())
            }
            None => {
                warn!("Remote summarization response missing summary_text");
                None
            }
        }
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
