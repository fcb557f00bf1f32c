//! The container contract and the typed surface layered over it.

use std::sync::Arc;

use baseshop_kernel::TypeKey;

use crate::error::{ContainerError, ContainerResult};
use crate::registration::{Component, Implements, Instance, LifeStyle, Registration, ServiceKey};

/// Registration/resolution table keyed by [`ServiceKey`].
///
/// Implementations have two phases: registrations are accepted until
/// [`Container::build`], resolutions only after it.
pub trait Container: Send + Sync {
    /// Freeze registrations so resolution becomes possible.
    fn build(&self) -> ContainerResult<()>;

    /// Add one registration. A later registration for the same key replaces
    /// the earlier one.
    fn add_registration(&self, registration: Registration) -> ContainerResult<()>;

    /// Resolve `key`, or `Ok(None)` when nothing is registered under it.
    fn try_resolve_instance(&self, key: &ServiceKey) -> ContainerResult<Option<Instance>>;

    fn resolve_instance(&self, key: &ServiceKey) -> ContainerResult<Instance> {
        self.try_resolve_instance(key)?
            .ok_or_else(|| ContainerError::NotRegistered(key.clone()))
    }
}

/// Registration and resolution operations, all forwarding to the generic
/// table of [`Container`].
///
/// `name` is an optional secondary key; `None` addresses the unnamed
/// registration of a service type.
pub trait ContainerExt: Container {
    /// Register a concrete type as its own service.
    fn register_type(
        &self,
        implementation: Component,
        name: Option<&str>,
        life: LifeStyle,
    ) -> ContainerResult<()> {
        let service = implementation.implementation();
        self.register_type_as(service, implementation, name, life)
    }

    /// Register `implementation` as the provider of the runtime type `service`.
    ///
    /// The stored value is the component's own `Arc<I>`: resolve it with the
    /// runtime-typed operations and downcast to the implementation type.
    fn register_type_as(
        &self,
        service: TypeKey,
        implementation: Component,
        name: Option<&str>,
        life: LifeStyle,
    ) -> ContainerResult<()> {
        let key = ServiceKey::new(service, name);
        if service != implementation.implementation() {
            tracing::debug!(
                service = %key,
                implementation = implementation.implementation().name(),
                "runtime-typed registration resolves to the component itself; typed resolution as the service reports a type mismatch"
            );
        }
        self.add_registration(Registration::from_component(key, implementation, life))
    }

    /// Register `I` (built with `Default`) as the provider of `S`.
    fn register<S, I>(&self, name: Option<&str>, life: LifeStyle) -> ContainerResult<()>
    where
        S: ?Sized + Send + Sync + 'static,
        I: Implements<S> + Default,
    {
        let key = ServiceKey::new(TypeKey::of::<S>(), name);
        self.add_registration(Registration::from_factory::<S, _>(
            key,
            TypeKey::of::<I>(),
            life,
            |_| Ok(<I as Implements<S>>::into_service(Arc::new(I::default()))),
        ))
    }

    /// Register a factory for `S` that builds an `I`. The factory receives the
    /// container so it can resolve its own dependencies.
    ///
    /// `I` is reported by [`Instance::implementation`] on every instance the
    /// factory produces.
    fn register_factory<S, I, F>(&self, name: Option<&str>, life: LifeStyle, factory: F) -> ContainerResult<()>
    where
        S: ?Sized + Send + Sync + 'static,
        I: ?Sized + 'static,
        F: Fn(&dyn Container) -> ContainerResult<Arc<S>> + Send + Sync + 'static,
    {
        let key = ServiceKey::new(TypeKey::of::<S>(), name);
        self.add_registration(Registration::from_factory(key, TypeKey::of::<I>(), life, factory))
    }

    /// Register a pre-built instance of `I` as the singleton provider of `S`.
    fn register_instance<S, I>(&self, instance: I, name: Option<&str>) -> ContainerResult<()>
    where
        S: ?Sized + Send + Sync + 'static,
        I: Implements<S>,
    {
        let key = ServiceKey::new(TypeKey::of::<S>(), name);
        let service = <I as Implements<S>>::into_service(Arc::new(instance));
        self.add_registration(Registration::from_instance(
            key,
            Instance::new(TypeKey::of::<I>(), service),
        ))
    }

    fn resolve<S: ?Sized + Send + Sync + 'static>(&self) -> ContainerResult<Arc<S>> {
        let key = ServiceKey::of::<S>();
        let instance = self.resolve_instance(&key)?;
        downcast_service(&key, &instance)
    }

    fn resolve_type(&self, service: TypeKey) -> ContainerResult<Instance> {
        self.resolve_instance(&ServiceKey::new(service, None))
    }

    fn try_resolve<S: ?Sized + Send + Sync + 'static>(&self) -> ContainerResult<Option<Arc<S>>> {
        let key = ServiceKey::of::<S>();
        self.try_resolve_instance(&key)?
            .map(|instance| downcast_service(&key, &instance))
            .transpose()
    }

    fn try_resolve_type(&self, service: TypeKey) -> ContainerResult<Option<Instance>> {
        self.try_resolve_instance(&ServiceKey::new(service, None))
    }

    fn resolve_named<S: ?Sized + Send + Sync + 'static>(&self, name: &str) -> ContainerResult<Arc<S>> {
        let key = ServiceKey::named::<S>(name);
        let instance = self.resolve_instance(&key)?;
        downcast_service(&key, &instance)
    }

    fn resolve_named_type(&self, name: &str, service: TypeKey) -> ContainerResult<Instance> {
        self.resolve_instance(&ServiceKey::new(service, Some(name)))
    }

    fn try_resolve_named<S: ?Sized + Send + Sync + 'static>(
        &self,
        name: &str,
    ) -> ContainerResult<Option<Arc<S>>> {
        let key = ServiceKey::named::<S>(name);
        self.try_resolve_instance(&key)?
            .map(|instance| downcast_service(&key, &instance))
            .transpose()
    }

    fn try_resolve_named_type(&self, name: &str, service: TypeKey) -> ContainerResult<Option<Instance>> {
        self.try_resolve_instance(&ServiceKey::new(service, Some(name)))
    }
}

impl<C: Container + ?Sized> ContainerExt for C {}

fn downcast_service<S: ?Sized + Send + Sync + 'static>(
    key: &ServiceKey,
    instance: &Instance,
) -> ContainerResult<Arc<S>> {
    instance
        .downcast::<S>()
        .ok_or_else(|| ContainerError::TypeMismatch {
            service: key.clone(),
            implementation: instance.implementation().name(),
            requested: core::any::type_name::<S>(),
        })
}
