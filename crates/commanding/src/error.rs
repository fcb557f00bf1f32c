use thiserror::Error;

pub type CommandServiceResult<T> = Result<T, CommandError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No command service has been wired; a configuration error, not retryable.
    #[error("{service} does not implement `{operation}`")]
    NotImplemented {
        service: &'static str,
        operation: &'static str,
    },

    /// The service refused the command.
    #[error("command rejected: {0}")]
    Rejected(String),
}

impl CommandError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
