//! Remote database reachability probe
//!
//! Only drives a connectivity indicator. Any HTTP answer from the service
//! counts as reachable, including errors such as an unknown table, because
//! those still prove the request got through.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::Result;

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Project URL of the remote database service
    pub url: Option<String>,
    /// Anonymous API key sent with the probe
    pub api_key: Option<String>,
    /// Table queried by the probe; it need not exist
    pub probe_table: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            probe_table: "random_table_check".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
    /// No service URL configured
    Unconfigured,
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::Online => write!(f, "online"),
            Connectivity::Offline => write!(f, "offline"),
            Connectivity::Unconfigured => write!(f, "not configured"),
        }
    }
}

pub struct StatusProbe {
    client: reqwest::Client,
    config: StatusConfig,
}

impl StatusProbe {
    pub fn new(config: StatusConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Issue one lightweight query and classify the outcome
    #[instrument(skip(self))]
    pub async fn check(&self) -> Connectivity {
        let Some(base) = self.config.url.as_deref() else {
            return Connectivity::Unconfigured;
        };

        let url = format!(
            "{}/rest/v1/{}",
            base.trim_end_matches('/'),
            self.config.probe_table
        );

        let mut request = self
            .client
            .get(&url)
            .query(&[("select", "*"), ("limit", "1")]);
        if let Some(key) = &self.config.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        match request.send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Remote database answered");
                Connectivity::Online
            }
            Err(e) => {
                warn!(error = %e, "Remote database unreachable");
                Connectivity::Offline
            }
        }
    }
}
