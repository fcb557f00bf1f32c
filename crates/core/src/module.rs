//! Default container wiring for the shop core.

use std::sync::Arc;

use baseshop_commanding::{CommandService, UnconfiguredCommandService};
use baseshop_container::{Container, ContainerExt, ContainerResult, LifeStyle, Module};
use baseshop_kernel::{
    BinarySerializer, JsonSerializer, UnconfiguredBinarySerializer, UnconfiguredJsonSerializer,
};

use crate::service::ProjectService;

/// Registers the core services.
///
/// Messaging collaborators (command service, serializers) start out as their
/// unconfigured variants; the composing application overrides them by
/// registering real implementations after this module is loaded.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultCoreModule;

impl Module for DefaultCoreModule {
    fn load(&self, container: &dyn Container) -> ContainerResult<()> {
        container.register_factory::<dyn CommandService, UnconfiguredCommandService, _>(
            None,
            LifeStyle::Singleton,
            |_| {
                let service: Arc<dyn CommandService> = Arc::new(UnconfiguredCommandService);
                Ok(service)
            },
        )?;
        container.register_factory::<dyn JsonSerializer, UnconfiguredJsonSerializer, _>(
            None,
            LifeStyle::Singleton,
            |_| {
                let serializer: Arc<dyn JsonSerializer> = Arc::new(UnconfiguredJsonSerializer);
                Ok(serializer)
            },
        )?;
        container.register_factory::<dyn BinarySerializer, UnconfiguredBinarySerializer, _>(
            None,
            LifeStyle::Singleton,
            |_| {
                let serializer: Arc<dyn BinarySerializer> = Arc::new(UnconfiguredBinarySerializer);
                Ok(serializer)
            },
        )?;

        container.register_factory::<ProjectService, ProjectService, _>(
            None,
            LifeStyle::Transient,
            |c| Ok(Arc::new(ProjectService::new(c.resolve::<dyn CommandService>()?))),
        )
    }
}
