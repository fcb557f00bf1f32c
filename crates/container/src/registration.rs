//! Registration records: service keys, lifestyles, activators and the
//! type-erased instances they produce.

use std::any::Any;
use std::sync::{Arc, Mutex, OnceLock};

use baseshop_kernel::TypeKey;

use crate::container::Container;
use crate::error::{ContainerError, ContainerResult};

/// Lifecycle policy of a registration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LifeStyle {
    /// A new instance per resolution.
    Transient,
    /// One instance shared for the container's lifetime.
    #[default]
    Singleton,
}

/// Lookup key: service type plus optional name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceKey {
    service: TypeKey,
    name: Option<String>,
}

impl ServiceKey {
    pub fn new(service: TypeKey, name: Option<&str>) -> Self {
        Self {
            service,
            name: name.map(str::to_owned),
        }
    }

    pub fn of<S: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<S>(), None)
    }

    pub fn named<S: ?Sized + 'static>(name: &str) -> Self {
        Self::new(TypeKey::of::<S>(), Some(name))
    }

    pub fn service(&self) -> TypeKey {
        self.service
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl core::fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "`{}` named `{}`", self.service, name),
            None => write!(f, "`{}`", self.service),
        }
    }
}

/// A resolved service, type-erased.
///
/// Holds an `Arc<S>` for the service type `S` it was registered under; get it
/// back with [`Instance::downcast`]. Clones share the same service value.
#[derive(Clone)]
pub struct Instance {
    implementation: TypeKey,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new<S: ?Sized + Send + Sync + 'static>(implementation: TypeKey, service: Arc<S>) -> Self {
        Self {
            implementation,
            value: Arc::new(service),
        }
    }

    /// Concrete type that produced this instance.
    pub fn implementation(&self) -> TypeKey {
        self.implementation
    }

    pub fn downcast<S: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<S>> {
        self.value.downcast_ref::<Arc<S>>().cloned()
    }

    /// Whether both handles point at the same activated instance.
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl core::fmt::Debug for Instance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instance")
            .field("implementation", &self.implementation)
            .finish_non_exhaustive()
    }
}

/// Coercion from an implementation to a service it provides.
///
/// Every type provides itself. Trait-object services are declared with the
/// [`implements!`](crate::implements) macro.
pub trait Implements<S: ?Sized>: Send + Sync + 'static {
    fn into_service(self: Arc<Self>) -> Arc<S>;
}

impl<T: Send + Sync + 'static> Implements<T> for T {
    fn into_service(self: Arc<Self>) -> Arc<T> {
        self
    }
}

pub(crate) type Factory = Arc<dyn Fn(&dyn Container) -> ContainerResult<Instance> + Send + Sync>;

/// Runtime descriptor of a constructible implementation type.
#[derive(Clone)]
pub struct Component {
    implementation: TypeKey,
    factory: Factory,
}

impl Component {
    /// Component built with `I::default()`.
    pub fn of<I: Default + Send + Sync + 'static>() -> Self {
        Self::from_factory(|_| Ok(I::default()))
    }

    /// Component built by `factory`, which may resolve its own dependencies.
    pub fn from_factory<I, F>(factory: F) -> Self
    where
        I: Send + Sync + 'static,
        F: Fn(&dyn Container) -> ContainerResult<I> + Send + Sync + 'static,
    {
        let implementation = TypeKey::of::<I>();
        Self {
            implementation,
            factory: Arc::new(move |container: &dyn Container| {
                factory(container).map(|value| Instance::new(implementation, Arc::new(value)))
            }),
        }
    }

    pub fn implementation(&self) -> TypeKey {
        self.implementation
    }
}

impl core::fmt::Debug for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Component")
            .field("implementation", &self.implementation)
            .finish_non_exhaustive()
    }
}

enum Activator {
    Factory(Factory),
    Instance(Instance),
}

/// One entry of the container table.
pub struct Registration {
    key: ServiceKey,
    implementation: TypeKey,
    lifestyle: LifeStyle,
    activator: Activator,
    singleton: OnceLock<Instance>,
    /// Held while the singleton factory runs.
    activation: Mutex<()>,
}

impl Registration {
    pub fn from_component(key: ServiceKey, component: Component, lifestyle: LifeStyle) -> Self {
        Self {
            key,
            implementation: component.implementation,
            lifestyle,
            activator: Activator::Factory(component.factory),
            singleton: OnceLock::new(),
            activation: Mutex::new(()),
        }
    }

    /// Typed factory producing the service `Arc<S>` directly.
    pub fn from_factory<S, F>(key: ServiceKey, implementation: TypeKey, lifestyle: LifeStyle, factory: F) -> Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn Container) -> ContainerResult<Arc<S>> + Send + Sync + 'static,
    {
        let factory: Factory = Arc::new(move |container: &dyn Container| {
            factory(container).map(|service| Instance::new(implementation, service))
        });
        Self {
            key,
            implementation,
            lifestyle,
            activator: Activator::Factory(factory),
            singleton: OnceLock::new(),
            activation: Mutex::new(()),
        }
    }

    /// Pre-built instance; always a singleton.
    pub fn from_instance(key: ServiceKey, instance: Instance) -> Self {
        Self {
            key,
            implementation: instance.implementation(),
            lifestyle: LifeStyle::Singleton,
            activator: Activator::Instance(instance),
            singleton: OnceLock::new(),
            activation: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &ServiceKey {
        &self.key
    }

    pub fn implementation(&self) -> TypeKey {
        self.implementation
    }

    pub fn lifestyle(&self) -> LifeStyle {
        self.lifestyle
    }

    /// Produce the instance for one resolution request.
    ///
    /// Singletons are created on first use and cached. Concurrent first
    /// resolutions wait for the thread running the factory, so a successful
    /// factory runs once. A failed factory caches nothing and the next
    /// resolution runs it again.
    pub fn activate(&self, container: &dyn Container) -> ContainerResult<Instance> {
        let factory = match &self.activator {
            Activator::Instance(instance) => return Ok(instance.clone()),
            Activator::Factory(factory) => factory,
        };

        match self.lifestyle {
            LifeStyle::Transient => factory(container),
            LifeStyle::Singleton => {
                if let Some(instance) = self.singleton.get() {
                    return Ok(instance.clone());
                }

                let _activating = self.activation.lock().map_err(|_| ContainerError::Poisoned)?;
                if let Some(instance) = self.singleton.get() {
                    return Ok(instance.clone());
                }
                let created = factory(container)?;
                Ok(self.singleton.get_or_init(|| created).clone())
            }
        }
    }
}

impl core::fmt::Debug for Registration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("implementation", &self.implementation)
            .field("lifestyle", &self.lifestyle)
            .finish_non_exhaustive()
    }
}
