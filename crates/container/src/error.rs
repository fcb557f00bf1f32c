use thiserror::Error;

use crate::registration::ServiceKey;

pub type ContainerResult<T> = Result<T, ContainerError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// No container implementation has been installed in the facade.
    #[error("object container is not initialized")]
    Uninitialized,

    /// Resolution attempted before `build()`.
    #[error("object container has not been built")]
    NotBuilt,

    /// Registration or a second `build()` attempted after `build()`.
    #[error("object container has already been built")]
    AlreadyBuilt,

    #[error("service not registered: {0}")]
    NotRegistered(ServiceKey),

    /// The registered instance does not provide the requested type.
    #[error("{service} resolved to `{implementation}`, which does not provide `{requested}`")]
    TypeMismatch {
        service: ServiceKey,
        implementation: &'static str,
        requested: &'static str,
    },

    /// A factory (transitively) resolved the service it is building.
    #[error("circular dependency while resolving {0}")]
    Circular(ServiceKey),

    /// Internal lock poisoning.
    #[error("object container lock poisoned")]
    Poisoned,
}
