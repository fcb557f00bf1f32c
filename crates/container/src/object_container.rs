//! Service-locator facade.

use std::sync::{Arc, RwLock};

use crate::container::Container;
use crate::error::{ContainerError, ContainerResult};
use crate::module::Module;
use crate::registration::{Instance, Registration, ServiceKey};

/// Install-once, resolve-many handle over a swappable [`Container`].
///
/// Constructed explicitly and passed to whoever needs it (clones share the
/// same slot). Install the implementation during startup, before request
/// processing begins. Every operation fails with
/// [`ContainerError::Uninitialized`] until then.
///
/// The facade is itself a [`Container`], so the whole
/// [`ContainerExt`](crate::ContainerExt) surface is available on it.
#[derive(Clone, Default)]
pub struct ObjectContainer {
    current: Arc<RwLock<Option<Arc<dyn Container>>>>,
}

impl ObjectContainer {
    /// Handle with no implementation installed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_implementation<C: Container + 'static>(implementation: C) -> ContainerResult<Self> {
        let container = Self::new();
        container.set_implementation(implementation)?;
        Ok(container)
    }

    /// Install the active container.
    ///
    /// Replacing an installed container is allowed but makes its registrations
    /// unreachable through this handle.
    pub fn set_implementation<C: Container + 'static>(&self, implementation: C) -> ContainerResult<()> {
        self.set_shared_implementation(Arc::new(implementation))
    }

    pub fn set_shared_implementation(&self, implementation: Arc<dyn Container>) -> ContainerResult<()> {
        let mut current = self.current.write().map_err(|_| ContainerError::Poisoned)?;
        if current.replace(implementation).is_some() {
            tracing::warn!("object container implementation replaced; previous registrations are no longer reachable");
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> ContainerResult<bool> {
        self.current
            .read()
            .map(|current| current.is_some())
            .map_err(|_| ContainerError::Poisoned)
    }

    /// Run `module`'s registrations against the installed container.
    pub fn register_module(&self, module: &dyn Module) -> ContainerResult<()> {
        let current = self.current()?;
        tracing::debug!(module = module.name(), "loading container module");
        module.load(current.as_ref())
    }

    fn current(&self) -> ContainerResult<Arc<dyn Container>> {
        self.current
            .read()
            .map_err(|_| ContainerError::Poisoned)?
            .clone()
            .ok_or(ContainerError::Uninitialized)
    }
}

impl Container for ObjectContainer {
    fn build(&self) -> ContainerResult<()> {
        self.current()?.build()
    }

    fn add_registration(&self, registration: Registration) -> ContainerResult<()> {
        self.current()?.add_registration(registration)
    }

    fn try_resolve_instance(&self, key: &ServiceKey) -> ContainerResult<Option<Instance>> {
        self.current()?.try_resolve_instance(key)
    }

    fn resolve_instance(&self, key: &ServiceKey) -> ContainerResult<Instance> {
        self.current()?.resolve_instance(key)
    }
}

impl core::fmt::Debug for ObjectContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObjectContainer")
            .field("initialized", &self.is_initialized().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use baseshop_kernel::TypeKey;

    use super::*;
    use crate::container::ContainerExt;
    use crate::in_memory::InMemoryContainer;
    use crate::registration::{Component, LifeStyle};

    trait Foo: Send + Sync {
        fn name(&self) -> &'static str;
    }

    #[derive(Debug, Default)]
    struct FooImpl;

    impl Foo for FooImpl {
        fn name(&self) -> &'static str {
            "foo"
        }
    }

    crate::implements!(FooImpl => dyn Foo);

    struct FooModule;

    impl Module for FooModule {
        fn load(&self, container: &dyn Container) -> ContainerResult<()> {
            container.register::<dyn Foo, FooImpl>(None, LifeStyle::Singleton)
        }
    }

    fn installed() -> ObjectContainer {
        ObjectContainer::with_implementation(InMemoryContainer::new()).unwrap()
    }

    #[test]
    fn every_operation_fails_before_installation() {
        let locator = ObjectContainer::new();
        let uninitialized = Some(ContainerError::Uninitialized);
        let foo = TypeKey::of::<dyn Foo>();

        assert_eq!(locator.is_initialized(), Ok(false));
        assert_eq!(locator.build().err(), uninitialized);
        assert_eq!(
            locator
                .register_type(Component::of::<FooImpl>(), None, LifeStyle::Singleton)
                .err(),
            uninitialized
        );
        assert_eq!(
            locator
                .register_type_as(foo, Component::of::<FooImpl>(), Some("a"), LifeStyle::Transient)
                .err(),
            uninitialized
        );
        assert_eq!(
            locator.register::<dyn Foo, FooImpl>(None, LifeStyle::Singleton).err(),
            uninitialized
        );
        assert_eq!(
            locator.register_instance::<dyn Foo, FooImpl>(FooImpl, None).err(),
            uninitialized
        );
        assert_eq!(
            locator
                .register_factory::<FooImpl, FooImpl, _>(None, LifeStyle::Transient, |_| Ok(Arc::new(FooImpl)))
                .err(),
            uninitialized
        );
        assert_eq!(locator.resolve::<dyn Foo>().err(), uninitialized);
        assert_eq!(locator.resolve_type(foo).err(), uninitialized);
        assert_eq!(locator.try_resolve::<dyn Foo>().err(), uninitialized);
        assert_eq!(locator.try_resolve_type(foo).err(), uninitialized);
        assert_eq!(locator.resolve_named::<dyn Foo>("a").err(), uninitialized);
        assert_eq!(locator.resolve_named_type("a", foo).err(), uninitialized);
        assert_eq!(locator.try_resolve_named::<dyn Foo>("a").err(), uninitialized);
        assert_eq!(locator.try_resolve_named_type("a", foo).err(), uninitialized);
        assert_eq!(locator.register_module(&FooModule).err(), uninitialized);
    }

    #[test]
    fn install_register_build_resolve_singleton() {
        let locator = installed();
        locator
            .register::<dyn Foo, FooImpl>(None, LifeStyle::Singleton)
            .unwrap();
        locator.build().unwrap();

        let a = locator.resolve::<dyn Foo>().unwrap();
        let b = locator.resolve::<dyn Foo>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "foo");
    }

    #[test]
    fn named_transient_yields_distinct_instances() {
        let locator = installed();
        locator
            .register::<dyn Foo, FooImpl>(Some("alt"), LifeStyle::Transient)
            .unwrap();
        locator.build().unwrap();

        let a = locator.resolve_named_type("alt", TypeKey::of::<dyn Foo>()).unwrap();
        let b = locator.resolve_named_type("alt", TypeKey::of::<dyn Foo>()).unwrap();
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.implementation(), TypeKey::of::<FooImpl>());
    }

    #[test]
    fn clones_share_the_installed_container() {
        let locator = ObjectContainer::new();
        let handle = locator.clone();

        locator.set_implementation(InMemoryContainer::new()).unwrap();
        locator.register_module(&FooModule).unwrap();
        locator.build().unwrap();

        assert_eq!(handle.is_initialized(), Ok(true));
        assert_eq!(handle.resolve::<dyn Foo>().unwrap().name(), "foo");
    }

    #[test]
    fn replacing_the_implementation_drops_previous_registrations() {
        let locator = installed();
        locator.register_module(&FooModule).unwrap();

        locator.set_implementation(InMemoryContainer::new()).unwrap();
        locator.build().unwrap();

        assert!(locator.try_resolve::<dyn Foo>().unwrap().is_none());
    }

    #[test]
    fn module_reports_its_type_name() {
        assert!(FooModule.name().ends_with("FooModule"));
    }
}
