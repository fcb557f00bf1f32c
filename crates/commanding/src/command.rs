use chrono::{DateTime, Utc};

/// Anything that travels through the messaging toolkit.
pub trait Message: core::fmt::Debug + Send + Sync {
    /// Unique message id.
    fn id(&self) -> &str;

    fn timestamp(&self) -> DateTime<Utc>;
}

/// A command targets a specific aggregate root (command abstraction).
///
/// Commands represent **intent**: a request to perform an action on one
/// aggregate. They are transient; the events they produce are what gets
/// persisted.
///
/// The trait is object-safe so services can carry `Arc<dyn Command>` without
/// knowing the concrete command type.
pub trait Command: Message {
    /// String id of the aggregate root the command is routed to.
    fn aggregate_root_id(&self) -> &str;

    /// Stable command name used in logs.
    fn command_type(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
