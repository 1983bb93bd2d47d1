//! Name-based entry point for the presentation layer.
//!
//! Arguments arrive as a JSON value and results leave as one; every failure
//! is flattened to its display string.

use crate::{dto::StatsArgs, errors::CommandError, handlers, state::CommandState};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub const SCAN_NETWORK: &str = "scan_network";
pub const GET_PIHOLE_STATS: &str = "get_pihole_stats";

pub const COMMANDS: &[&str] = &[SCAN_NETWORK, GET_PIHOLE_STATS];

#[derive(Clone)]
pub struct CommandDispatcher {
    state: CommandState,
}

impl CommandDispatcher {
    pub fn new(state: CommandState) -> Self {
        Self { state }
    }

    pub async fn dispatch(&self, command: &str, args: Value) -> Result<Value, String> {
        debug!(command, "Dispatching command");
        self.route(command, args).await.map_err(String::from)
    }

    async fn route(&self, command: &str, args: Value) -> Result<Value, CommandError> {
        match command {
            SCAN_NETWORK => {
                expect_no_args(command, &args)?;
                to_value(handlers::scan_network(&self.state).await?)
            }
            GET_PIHOLE_STATS => {
                if !args.is_object() {
                    return Err(CommandError::InvalidArguments {
                        command: command.to_string(),
                        message: "expected an object with a 'host' field".to_string(),
                    });
                }
                let args: StatsArgs =
                    serde_json::from_value(args).map_err(|e| CommandError::InvalidArguments {
                        command: command.to_string(),
                        message: e.to_string(),
                    })?;
                to_value(handlers::get_pihole_stats(&self.state, args.host, args.password).await?)
            }
            other => {
                warn!(command = other, "Unknown command requested");
                Err(CommandError::UnknownCommand(other.to_string()))
            }
        }
    }
}

/// `scan_network` takes `null` or an object; object keys are ignored.
fn expect_no_args(command: &str, args: &Value) -> Result<(), CommandError> {
    match args {
        Value::Null | Value::Object(_) => Ok(()),
        _ => Err(CommandError::InvalidArguments {
            command: command.to_string(),
            message: "expected no arguments".to_string(),
        }),
    }
}

fn to_value<T: Serialize>(result: T) -> Result<Value, CommandError> {
    serde_json::to_value(result).map_err(|e| CommandError::Serialization(e.to_string()))
}
