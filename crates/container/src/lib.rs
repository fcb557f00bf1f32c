//! `baseshop-container` — dependency-injection registry and service locator.
//!
//! - `Container`: the generic registration/resolution table (object-safe)
//! - `ContainerExt`: typed and runtime-typed operations forwarding to that table
//! - `InMemoryContainer`: the bundled implementation
//! - `ObjectContainer`: the install-once, resolve-many facade handed to callers
//! - `Module`: a unit of registration glue

pub mod container;
pub mod error;
pub mod in_memory;
pub mod module;
pub mod object_container;
pub mod registration;

pub use container::{Container, ContainerExt};
pub use error::{ContainerError, ContainerResult};
pub use in_memory::InMemoryContainer;
pub use module::Module;
pub use object_container::ObjectContainer;
pub use registration::{Component, Implements, Instance, LifeStyle, Registration, ServiceKey};

/// Declare that an implementation type provides one or more trait-object
/// services, so it can be registered under them.
///
/// ```ignore
/// trait Clock: Send + Sync {}
/// #[derive(Default)]
/// struct SystemClock;
/// impl Clock for SystemClock {}
///
/// baseshop_container::implements!(SystemClock => dyn Clock);
/// ```
#[macro_export]
macro_rules! implements {
    ($implementation:ty => $($service:ty),+ $(,)?) => {
        $(
            impl $crate::Implements<$service> for $implementation {
                fn into_service(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$service> {
                    self
                }
            }
        )+
    };
}
