use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Outcome of a command's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    None,
    Success,
    NoChange,
    Failed,
}

/// When an execute call should return.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandReturnType {
    /// As soon as the command has been executed.
    #[default]
    CommandExecuted,
    /// Once the events it produced have been handled.
    EventHandled,
}

/// Result reported for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    status: CommandStatus,
    command_id: String,
    aggregate_root_id: String,
    result: Option<String>,
    result_type: Option<String>,
}

impl CommandResult {
    pub fn new(
        status: CommandStatus,
        command_id: impl Into<String>,
        aggregate_root_id: impl Into<String>,
        result: Option<String>,
        result_type: Option<String>,
    ) -> Self {
        Self {
            status,
            command_id: command_id.into(),
            aggregate_root_id: aggregate_root_id.into(),
            result,
            result_type,
        }
    }

    pub fn success(command: &dyn Command) -> Self {
        Self::new(
            CommandStatus::Success,
            command.id(),
            command.aggregate_root_id(),
            None,
            None,
        )
    }

    pub fn failed(command: &dyn Command, reason: impl Into<String>) -> Self {
        Self::new(
            CommandStatus::Failed,
            command.id(),
            command.aggregate_root_id(),
            Some(reason.into()),
            Some("string".to_string()),
        )
    }

    pub fn status(&self) -> CommandStatus {
        self.status
    }

    pub fn command_id(&self) -> &str {
        &self.command_id
    }

    pub fn aggregate_root_id(&self) -> &str {
        &self.aggregate_root_id
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn result_type(&self) -> Option<&str> {
        self.result_type.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}
