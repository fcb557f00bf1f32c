//! Command service seam and its unconfigured placeholder.

use std::sync::Arc;

use async_trait::async_trait;

use crate::command::Command;
use crate::error::{CommandError, CommandServiceResult};
use crate::result::{CommandResult, CommandReturnType};

/// Entry point for sending commands to the messaging toolkit.
#[async_trait]
pub trait CommandService: Send + Sync {
    /// Fire-and-forget send.
    fn send(&self, command: Arc<dyn Command>) -> CommandServiceResult<()>;

    /// Send and wait until the command has been accepted.
    async fn send_async(&self, command: Arc<dyn Command>) -> CommandServiceResult<()>;

    /// Execute and wait for the command to be executed.
    async fn execute(&self, command: Arc<dyn Command>) -> CommandServiceResult<CommandResult> {
        self.execute_with(command, CommandReturnType::CommandExecuted)
            .await
    }

    /// Execute and wait until the point selected by `return_type`.
    async fn execute_with(
        &self,
        command: Arc<dyn Command>,
        return_type: CommandReturnType,
    ) -> CommandServiceResult<CommandResult>;
}

/// Placeholder registered until a real command service is wired in.
///
/// Every call fails with [`CommandError::NotImplemented`]. Reaching it means
/// the composing application is misconfigured.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnconfiguredCommandService;

impl UnconfiguredCommandService {
    fn not_implemented(operation: &'static str, command: &dyn Command) -> CommandError {
        tracing::error!(
            operation,
            command_type = command.command_type(),
            "no command service configured"
        );
        CommandError::NotImplemented {
            service: core::any::type_name::<Self>(),
            operation,
        }
    }
}

#[async_trait]
impl CommandService for UnconfiguredCommandService {
    fn send(&self, command: Arc<dyn Command>) -> CommandServiceResult<()> {
        Err(Self::not_implemented("send", command.as_ref()))
    }

    async fn send_async(&self, command: Arc<dyn Command>) -> CommandServiceResult<()> {
        Err(Self::not_implemented("send_async", command.as_ref()))
    }

    async fn execute(&self, command: Arc<dyn Command>) -> CommandServiceResult<CommandResult> {
        Err(Self::not_implemented("execute", command.as_ref()))
    }

    async fn execute_with(
        &self,
        command: Arc<dyn Command>,
        _return_type: CommandReturnType,
    ) -> CommandServiceResult<CommandResult> {
        Err(Self::not_implemented("execute_with", command.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::command::Message;

    #[derive(Debug, Default)]
    struct Blank {
        id: String,
        target: String,
    }

    impl Message for Blank {
        fn id(&self) -> &str {
            &self.id
        }

        fn timestamp(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    impl Command for Blank {
        fn aggregate_root_id(&self) -> &str {
            &self.target
        }
    }

    fn operation(err: CommandError) -> &'static str {
        match err {
            CommandError::NotImplemented { operation, .. } => operation,
            other => panic!("expected NotImplemented, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unconfigured_service_rejects_every_operation() {
        let service = UnconfiguredCommandService;
        let commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(Blank::default()),
            Arc::new(Blank {
                id: "c-1".to_string(),
                target: "p-1".to_string(),
            }),
        ];

        for command in commands {
            assert_eq!(operation(service.send(command.clone()).unwrap_err()), "send");
            assert_eq!(
                operation(service.send_async(command.clone()).await.unwrap_err()),
                "send_async"
            );
            assert_eq!(
                operation(service.execute(command.clone()).await.unwrap_err()),
                "execute"
            );
            for return_type in [CommandReturnType::CommandExecuted, CommandReturnType::EventHandled] {
                assert_eq!(
                    operation(service.execute_with(command.clone(), return_type).await.unwrap_err()),
                    "execute_with"
                );
            }
        }
    }

    #[tokio::test]
    async fn error_names_the_service() {
        let err = UnconfiguredCommandService
            .send_async(Arc::new(Blank::default()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("UnconfiguredCommandService"));
    }
}
