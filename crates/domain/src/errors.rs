use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("ARP command execution failed: {0}")]
    Execution(String),

    #[error("ARP output could not be parsed: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network request to {host} failed: {message}")]
    Network {
        host: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Unexpected Pi-hole response: {0}")]
    Decode(String),
}

impl DomainError {
    pub fn network(host: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            host: host.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Non-success HTTP status returned by `host`.
    pub fn http_status(host: impl Into<String>, status: u16, reason: Option<&str>) -> Self {
        Self::Network {
            host: host.into(),
            status: Some(status),
            message: format!("HTTP {} {}", status, reason.unwrap_or("Unknown")),
        }
    }

    /// Short machine-readable category, stable across message changes.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::Execution(_) => "execution",
            DomainError::Parse(_) => "parse",
            DomainError::Validation(_) => "validation",
            DomainError::Auth(_) => "auth",
            DomainError::Network { .. } => "network",
            DomainError::Decode(_) => "decode",
        }
    }
}
