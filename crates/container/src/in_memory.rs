//! In-memory container for the app and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::container::Container;
use crate::error::{ContainerError, ContainerResult};
use crate::registration::{Instance, Registration, ServiceKey};

thread_local! {
    /// Keys being activated on this thread, tagged with their container.
    static RESOLVING: RefCell<Vec<(usize, ServiceKey)>> = const { RefCell::new(Vec::new()) };
}

/// `HashMap`-backed container.
///
/// - No IO
/// - Safe for concurrent resolution after `build()`
/// - Locks are released before an activator runs, so factories may resolve
///   other services from the same container
#[derive(Debug, Default)]
pub struct InMemoryContainer {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    built: bool,
    registrations: HashMap<ServiceKey, Arc<Registration>>,
}

impl InMemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_built(&self) -> ContainerResult<bool> {
        Ok(self.read_state()?.built)
    }

    /// Number of registrations (one per key).
    pub fn len(&self) -> ContainerResult<usize> {
        Ok(self.read_state()?.registrations.len())
    }

    pub fn is_empty(&self) -> ContainerResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read_state(&self) -> ContainerResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| ContainerError::Poisoned)
    }

    fn tag(&self) -> usize {
        self as *const Self as usize
    }
}

impl Container for InMemoryContainer {
    fn build(&self) -> ContainerResult<()> {
        let mut state = self.state.write().map_err(|_| ContainerError::Poisoned)?;
        if state.built {
            return Err(ContainerError::AlreadyBuilt);
        }
        state.built = true;

        tracing::debug!(
            registrations = state.registrations.len(),
            "object container built"
        );
        Ok(())
    }

    fn add_registration(&self, registration: Registration) -> ContainerResult<()> {
        let mut state = self.state.write().map_err(|_| ContainerError::Poisoned)?;
        if state.built {
            return Err(ContainerError::AlreadyBuilt);
        }

        let key = registration.key().clone();
        let implementation = registration.implementation();
        let lifestyle = registration.lifestyle();
        if let Some(previous) = state.registrations.insert(key.clone(), Arc::new(registration)) {
            tracing::debug!(
                service = %key,
                previous = previous.implementation().name(),
                "registration replaced"
            );
        }

        tracing::trace!(service = %key, implementation = implementation.name(), ?lifestyle, "service registered");
        Ok(())
    }

    fn try_resolve_instance(&self, key: &ServiceKey) -> ContainerResult<Option<Instance>> {
        let registration = {
            let state = self.read_state()?;
            if !state.built {
                return Err(ContainerError::NotBuilt);
            }
            match state.registrations.get(key) {
                Some(registration) => Arc::clone(registration),
                None => return Ok(None),
            }
        };

        let _guard = ResolutionGuard::enter(self.tag(), key)?;
        registration.activate(self).map(Some)
    }
}

/// Marks `key` as in activation on this thread until dropped.
struct ResolutionGuard;

impl ResolutionGuard {
    fn enter(tag: usize, key: &ServiceKey) -> ContainerResult<Self> {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.iter().any(|(t, k)| *t == tag && k == key) {
                return Err(ContainerError::Circular(key.clone()));
            }
            stack.push((tag, key.clone()));
            Ok(ResolutionGuard)
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLVING.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
