use super::arp_parser::parse_arp_output;
use async_trait::async_trait;
use netscene_application::ports::{ArpReader, ArpTable};
use netscene_domain::config::ScannerConfig;
use netscene_domain::DomainError;
use tokio::process::Command;
use tracing::{debug, warn};

/// ARP table reader backed by the system `arp` utility (or any command
/// printing a compatible table, e.g. `cat /proc/net/arp`).
pub struct CommandArpReader {
    command: String,
    args: Vec<String>,
}

impl CommandArpReader {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

impl Default for CommandArpReader {
    fn default() -> Self {
        Self::from_config(&ScannerConfig::default())
    }
}

#[async_trait]
impl ArpReader for CommandArpReader {
    async fn read_arp_table(&self) -> Result<ArpTable, DomainError> {
        debug!(command = %self.command, args = ?self.args, "Running ARP table query");

        let output = Command::new(&self.command)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                warn!(command = %self.command, error = %e, "Failed to spawn ARP command");
                DomainError::Execution(format!("failed to run '{}': {}", self.command, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                command = %self.command,
                status = %output.status,
                "ARP command exited with failure"
            );
            return Err(DomainError::Execution(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| DomainError::Parse("command output was not valid UTF-8".to_string()))?;

        Ok(parse_arp_output(&stdout))
    }
}
