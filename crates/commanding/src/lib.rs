//! Command contracts shared with the messaging toolkit.
//!
//! Declares what a command looks like, how its outcome is reported, and the
//! service/handler/context seams the toolkit plugs into. No dispatch happens
//! here.

pub mod command;
pub mod context;
pub mod error;
pub mod result;
pub mod service;

pub use command::{Command, Message};
pub use context::{CommandExecuteContext, ProcessingCommand, ProcessingCommandHandler};
pub use error::{CommandError, CommandServiceResult};
pub use result::{CommandResult, CommandReturnType, CommandStatus};
pub use service::{CommandService, UnconfiguredCommandService};
