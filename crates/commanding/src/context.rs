//! Command execution context and the processing handler seam.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::command::Command;
use crate::error::CommandServiceResult;
use crate::result::CommandResult;

/// Environment a command executor runs a command in.
#[async_trait]
pub trait CommandExecuteContext: Send + Sync {
    /// Notify that the command has been executed.
    async fn on_command_executed(&self, result: CommandResult) -> CommandServiceResult<()>;

    /// Attach a handler-produced result payload.
    fn set_result(&self, result: String);

    fn result(&self) -> Option<String>;
}

/// A command in flight, bundled with its execution context.
#[derive(Clone)]
pub struct ProcessingCommand {
    command: Arc<dyn Command>,
    context: Arc<dyn CommandExecuteContext>,
    items: HashMap<String, String>,
}

impl ProcessingCommand {
    pub fn new(command: Arc<dyn Command>, context: Arc<dyn CommandExecuteContext>) -> Self {
        Self {
            command,
            context,
            items: HashMap::new(),
        }
    }

    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }

    pub fn context(&self) -> &dyn CommandExecuteContext {
        self.context.as_ref()
    }

    pub fn items(&self) -> &HashMap<String, String> {
        &self.items
    }

    /// Report the outcome to the context.
    pub async fn complete(&self, result: CommandResult) -> CommandServiceResult<()> {
        tracing::debug!(
            command_id = self.command.id(),
            command_type = self.command.command_type(),
            status = ?result.status(),
            "command completed"
        );
        self.context.on_command_executed(result).await
    }
}

impl core::fmt::Debug for ProcessingCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProcessingCommand")
            .field("command", &self.command)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Handles one processing command end to end.
#[async_trait]
pub trait ProcessingCommandHandler: Send + Sync {
    async fn handle(&self, processing: ProcessingCommand) -> CommandServiceResult<()>;
}
