//! Entity base: identity + continuity across state changes, plus the pending
//! domain-event buffer.

use core::hash::Hash;

use crate::type_key::TypeKey;

/// State every entity embeds: an optional identity and the domain events
/// raised since the last successful publication.
///
/// Entities keep this in a private field. Only the entity's own methods can
/// reach `set_id` and `register_domain_event`; outside code sees the read-only
/// accessors of [`Entity`].
#[derive(Debug, Clone)]
pub struct EntityBase<K, E> {
    id: Option<K>,
    domain_events: Vec<E>,
}

impl<K, E> EntityBase<K, E> {
    /// Base with an unset identity.
    pub fn new() -> Self {
        Self {
            id: None,
            domain_events: Vec::new(),
        }
    }

    pub fn with_id(id: K) -> Self {
        Self {
            id: Some(id),
            domain_events: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&K> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: K) {
        self.id = Some(id);
    }

    /// Append a domain event to the pending buffer.
    pub fn register_domain_event(&mut self, event: E) {
        self.domain_events.push(event);
    }

    /// Pending events, in registration order.
    pub fn domain_events(&self) -> &[E] {
        &self.domain_events
    }

    pub fn pending_domain_events(&mut self) -> PendingDomainEvents<'_, E> {
        PendingDomainEvents {
            events: &mut self.domain_events,
        }
    }
}

impl<K, E> Default for EntityBase<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive handle on an entity's pending events.
///
/// Readable by anyone holding it; only the kernel's publication path
/// ([`crate::event::publish_domain_events`]) may drain it.
#[derive(Debug)]
pub struct PendingDomainEvents<'a, E> {
    events: &'a mut Vec<E>,
}

impl<E> PendingDomainEvents<'_, E> {
    pub fn as_slice(&self) -> &[E] {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn clear(self) {
        self.events.clear();
    }
}

/// Entity marker + minimal interface.
pub trait Entity: 'static {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Hash + core::fmt::Debug;

    /// Domain event type this entity raises.
    type Event;

    fn base(&self) -> &EntityBase<Self::Id, Self::Event>;

    fn domain_events_mut(&mut self) -> PendingDomainEvents<'_, Self::Event>;

    /// Returns the entity identifier, if one has been assigned.
    fn id(&self) -> Option<&Self::Id> {
        self.base().id()
    }

    fn domain_events(&self) -> &[Self::Event] {
        self.base().domain_events()
    }

    /// (concrete type, id) pair; `None` while the identity is unset.
    fn identity(&self) -> Option<EntityIdentity<Self::Id>> {
        self.id()
            .map(|id| EntityIdentity::new(TypeKey::of::<Self>(), id.clone()))
    }
}

/// Identity of an entity across types: two identities are equal iff both the
/// concrete entity type and the id match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityIdentity<K> {
    entity_type: TypeKey,
    id: K,
}

impl<K> EntityIdentity<K> {
    pub fn new(entity_type: TypeKey, id: K) -> Self {
        Self { entity_type, id }
    }

    pub fn entity_type(&self) -> TypeKey {
        self.entity_type
    }

    pub fn id(&self) -> &K {
        &self.id
    }
}

/// Identity equality between two entities.
///
/// Equal iff the concrete types match and both ids are set and equal. An
/// entity with an unset id is only equal to itself.
pub fn same_entity<A, B>(a: &A, b: &B) -> bool
where
    A: Entity,
    B: Entity<Id = A::Id>,
{
    if TypeKey::of::<A>() != TypeKey::of::<B>() {
        return false;
    }

    match (a.identity(), b.identity()) {
        (Some(left), Some(right)) => left == right,
        _ => core::ptr::eq(a as *const A as *const (), b as *const B as *const ()),
    }
}
