use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Serialize;

use crate::{
    core::InverterSnapshot,
    insight::{InsightProvider, prompt},
    prelude::*,
};

/// Text service behind a plain HTTP endpoint.
///
/// The request body carries the prompt and the raw snapshot; the response body is taken verbatim.
pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

#[derive(Serialize)]
struct Request<'a> {
    prompt: String,
    snapshot: &'a InverterSnapshot,
}

impl Client {
    #[instrument(skip_all, fields(url = %url))]
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner, url })
    }
}

#[async_trait]
impl InsightProvider for Client {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn describe(&self, snapshot: &InverterSnapshot) -> Result<String> {
        let request = Request { prompt: prompt::build(snapshot), snapshot };
        let text = self
            .inner
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
            .with_context(|| format!("failed to request insights from `{}`", self.url))?
            .error_for_status()?
            .text()
            .await
            .with_context(|| format!("failed to read the response from `{}`", self.url))?;
        let text = text.trim();
        ensure!(!text.is_empty(), "`{}` returned an empty response", self.url);
        debug!(n_chars = text.len(), "received");
        Ok(text.to_owned())
    }
}
