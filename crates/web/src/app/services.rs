//! Object container composition for the web process.

use baseshop_container::{Container, ContainerResult, InMemoryContainer, ObjectContainer};
use baseshop_core::DefaultCoreModule;

/// Default container: in-memory implementation with [`DefaultCoreModule`]
/// loaded, built and ready for resolution.
pub fn build_container() -> ContainerResult<ObjectContainer> {
    build_container_with(|_| Ok(()))
}

/// Same as [`build_container`], with `overrides` applied after the default
/// module and before `build()`. Later registrations replace earlier ones.
pub fn build_container_with(
    overrides: impl FnOnce(&ObjectContainer) -> ContainerResult<()>,
) -> ContainerResult<ObjectContainer> {
    let container = ObjectContainer::with_implementation(InMemoryContainer::new())?;
    container.register_module(&DefaultCoreModule)?;
    overrides(&container)?;
    container.build()?;

    tracing::info!("object container ready");
    Ok(container)
}
