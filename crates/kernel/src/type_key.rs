//! Runtime type tokens.

use core::any::TypeId;
use core::hash::{Hash, Hasher};

/// Runtime identifier of a Rust type.
///
/// Carries the [`TypeId`] used for lookups plus the type name for error
/// messages and logs. Equality and hashing only look at the `TypeId`.
#[derive(Debug, Copy, Clone)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Marker {}

    #[test]
    fn keys_of_the_same_type_are_equal() {
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<u32>());
    }

    #[test]
    fn trait_objects_have_their_own_key() {
        let key = TypeKey::of::<dyn Marker>();
        assert!(key.is::<dyn Marker>());
        assert!(key.name().contains("Marker"));
    }
}
