use netscene_domain::DomainError;
use thiserror::Error;

/// Failure of a command as seen by the caller of the dispatcher.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments for {command}: {message}")]
    InvalidArguments { command: String, message: String },

    #[error("Failed to serialize result: {0}")]
    Serialization(String),
}

impl CommandError {
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::Domain(e) => e.kind(),
            CommandError::UnknownCommand(_) => "unknown_command",
            CommandError::InvalidArguments { .. } => "invalid_arguments",
            CommandError::Serialization(_) => "serialization",
        }
    }
}

impl From<CommandError> for String {
    fn from(err: CommandError) -> Self {
        err.to_string()
    }
}
