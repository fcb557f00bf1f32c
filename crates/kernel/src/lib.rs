//! `baseshop-kernel` — shared kernel building blocks.
//!
//! Pure primitives shared by every BaseShop crate: runtime type tokens, the
//! domain error model, the identity-bearing entity base with its domain-event
//! buffer, and the serializer contracts.

pub mod entity;
pub mod error;
pub mod event;
pub mod serialization;
pub mod type_key;

pub use entity::{Entity, EntityBase, EntityIdentity, PendingDomainEvents, same_entity};
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, DomainEventPublisher, TracingEventPublisher, publish_domain_events};
pub use serialization::{
    BinarySerializer, BinarySerializerExt, JsonSerializer, JsonSerializerExt, SerializerError,
    SerializerResult, UnconfiguredBinarySerializer, UnconfiguredJsonSerializer,
};
pub use type_key::TypeKey;
