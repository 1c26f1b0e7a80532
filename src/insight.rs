pub mod http;
pub mod prompt;
pub mod rules;

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::{core::InverterSnapshot, prelude::*};

/// Source of free-text commentary about a snapshot.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn describe(&self, snapshot: &InverterSnapshot) -> Result<String>;
}

/// Fail-soft insight source: any failure of the underlying provider turns into the fallback text.
pub struct Insights {
    provider: Option<Box<dyn InsightProvider>>,
    timeout: Duration,
}

impl Insights {
    pub const FALLBACK: &'static str = "Unable to generate insights at this time.";

    pub fn new(provider: Option<Box<dyn InsightProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Never fails and never waits longer than the timeout.
    pub async fn describe(&self, snapshot: &InverterSnapshot) -> String {
        let Some(provider) = &self.provider else {
            return Self::FALLBACK.to_owned();
        };
        match timeout(self.timeout, provider.describe(snapshot)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => {
                warn!("the insight provider returned nothing");
                Self::FALLBACK.to_owned()
            }
            Ok(Err(error)) => {
                warn!("failed to fetch insights: {error:#}");
                Self::FALLBACK.to_owned()
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "insights timed out");
                Self::FALLBACK.to_owned()
            }
        }
    }
}
