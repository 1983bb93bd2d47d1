use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which Pi-hole HTTP API the client speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PiholeApi {
    /// FTL REST API of Pi-hole v6 (`/api/auth`, `/api/stats/summary`)
    #[default]
    V6,
    /// `admin/api.php` of Pi-hole v5 and earlier
    Legacy,
}

impl PiholeApi {
    pub fn as_str(&self) -> &'static str {
        match self {
            PiholeApi::V6 => "v6",
            PiholeApi::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PiholeApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiholeApi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v6" | "ftl" => Ok(PiholeApi::V6),
            "legacy" | "v5" => Ok(PiholeApi::Legacy),
            other => Err(format!("Unknown Pi-hole API '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PiholeConfig {
    #[serde(default)]
    pub api: PiholeApi,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pi-hole v6 serves HTTPS with a self-signed certificate by default
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for PiholeConfig {
    fn default() -> Self {
        Self {
            api: PiholeApi::default(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept_invalid_certs: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("NetScene/{}", env!("CARGO_PKG_VERSION"))
}
