use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics reported by a Pi-hole instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiholeStats {
    pub domains_being_blocked: u64,
    pub dns_queries_today: u64,
    pub ads_blocked_today: u64,
    pub ads_percentage_today: f64,
    pub status: String,
}

impl PiholeStats {
    /// Check the ranges the counters cannot express in their types.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.status.trim().is_empty() {
            return Err(DomainError::Decode("status field is empty".to_string()));
        }

        if !(0.0..=100.0).contains(&self.ads_percentage_today) {
            return Err(DomainError::Decode(format!(
                "ads_percentage_today out of range: {}",
                self.ads_percentage_today
            )));
        }

        Ok(())
    }
}

/// Input of a stats fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRequest {
    pub host: String,
    pub password: Option<String>,
}

impl StatsRequest {
    /// An empty password is the same as no password.
    pub fn new(host: impl Into<String>, password: Option<String>) -> Self {
        Self {
            host: host.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.host.trim().is_empty() {
            return Err(DomainError::Validation("Host cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Base address of a Pi-hole web interface, scheme included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiholeHost {
    base_url: String,
}

impl PiholeHost {
    /// Accepts `host`, `host:port` or a full `http(s)://` URL.
    pub fn parse(host: &str) -> Result<Self, DomainError> {
        let trimmed = host.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation("Host cannot be empty".to_string()));
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "Host contains whitespace: '{}'",
                trimmed
            )));
        }

        let base_url = match trimmed.split_once("://") {
            Some((scheme, rest)) => {
                let scheme = scheme.to_ascii_lowercase();
                if scheme != "http" && scheme != "https" {
                    return Err(DomainError::Validation(format!(
                        "Unsupported scheme '{}'",
                        scheme
                    )));
                }
                if rest.is_empty() {
                    return Err(DomainError::Validation(format!(
                        "Missing host in '{}'",
                        trimmed
                    )));
                }
                format!("{}://{}", scheme, rest)
            }
            None => format!("http://{}", trimmed),
        };

        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Display for PiholeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_url)
    }
}

/// Credential produced by the authentication step and consumed by the
/// stats request of the same fetch.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(***)")
    }
}
