use serde::{Deserialize, Serialize};

/// How the ARP table is obtained
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerConfig {
    /// Binary that dumps the ARP table
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

fn default_command() -> String {
    "arp".to_string()
}

// `arp -a` is understood by net-tools, BSD/macOS and Windows alike.
fn default_args() -> Vec<String> {
    vec!["-a".to_string()]
}
