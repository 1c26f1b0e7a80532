use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::{
    insight::{InsightProvider, Insights, http, rules::Rules},
    prelude::*,
};

#[derive(Parser)]
pub struct InsightArgs {
    /// Text service endpoint, the local rules are used when not set.
    #[clap(long = "insight-url", env = "INSIGHT_URL")]
    pub url: Option<Url>,

    #[clap(long = "insight-timeout", env = "INSIGHT_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,

    /// Do not ask for insights at all and show the fallback text.
    #[clap(long)]
    pub no_insights: bool,
}

impl InsightArgs {
    pub fn insights(&self) -> Result<Insights> {
        let timeout: Duration = *self.timeout;
        let provider: Option<Box<dyn InsightProvider>> = if self.no_insights {
            None
        } else if let Some(url) = &self.url {
            Some(Box::new(http::Client::new(url.clone(), timeout)?))
        } else {
            Some(Box::new(Rules))
        };
        Ok(Insights::new(provider, timeout))
    }
}
