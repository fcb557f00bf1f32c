//! Serializer contracts and their unconfigured placeholders.
//!
//! The shop composes real serializers from outside; until it does, the
//! unconfigured variants are registered and every call through them fails
//! with [`SerializerError::NotSupported`].

use core::any::Any;

use thiserror::Error;

use crate::type_key::TypeKey;

pub type SerializerResult<T> = Result<T, SerializerError>;

/// Type-erased value crossing a serializer boundary.
pub type AnyValue = dyn Any + Send + Sync;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SerializerOperation {
    Serializing,
    Deserializing,
}

impl core::fmt::Display for SerializerOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SerializerOperation::Serializing => f.write_str("serializing"),
            SerializerOperation::Deserializing => f.write_str("deserializing"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializerError {
    /// No serializer has been wired; a configuration error, not retryable.
    #[error("{serializer} does not support {operation} object.")]
    NotSupported {
        serializer: &'static str,
        operation: SerializerOperation,
    },

    /// The serializer produced a value of a different type than requested.
    #[error("deserialized value is not a `{expected}`")]
    TypeMismatch { expected: &'static str },
}

impl SerializerError {
    fn not_supported<S: ?Sized>(operation: SerializerOperation) -> Self {
        Self::NotSupported {
            serializer: core::any::type_name::<S>(),
            operation,
        }
    }
}

/// Text (JSON) serializer.
pub trait JsonSerializer: Send + Sync {
    fn serialize(&self, value: &AnyValue) -> SerializerResult<String>;

    /// Decode `value` into an instance of the runtime type `target`.
    fn deserialize(&self, value: &str, target: TypeKey) -> SerializerResult<Box<AnyValue>>;
}

/// Typed helpers over any [`JsonSerializer`].
pub trait JsonSerializerExt: JsonSerializer {
    fn deserialize_as<T: Any + Send + Sync>(&self, value: &str) -> SerializerResult<T> {
        let decoded = self.deserialize(value, TypeKey::of::<T>())?;
        downcast_value(decoded)
    }
}

impl<S: JsonSerializer + ?Sized> JsonSerializerExt for S {}

/// Binary serializer.
pub trait BinarySerializer: Send + Sync {
    fn serialize(&self, value: &AnyValue) -> SerializerResult<Vec<u8>>;

    fn deserialize(&self, data: &[u8], target: TypeKey) -> SerializerResult<Box<AnyValue>>;
}

pub trait BinarySerializerExt: BinarySerializer {
    fn deserialize_as<T: Any + Send + Sync>(&self, data: &[u8]) -> SerializerResult<T> {
        let decoded = self.deserialize(data, TypeKey::of::<T>())?;
        downcast_value(decoded)
    }
}

impl<S: BinarySerializer + ?Sized> BinarySerializerExt for S {}

fn downcast_value<T: Any + Send + Sync>(value: Box<AnyValue>) -> SerializerResult<T> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| SerializerError::TypeMismatch {
            expected: core::any::type_name::<T>(),
        })
}

/// JSON serializer placeholder: every operation fails.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnconfiguredJsonSerializer;

impl JsonSerializer for UnconfiguredJsonSerializer {
    fn serialize(&self, _value: &AnyValue) -> SerializerResult<String> {
        Err(SerializerError::not_supported::<Self>(
            SerializerOperation::Serializing,
        ))
    }

    fn deserialize(&self, _value: &str, _target: TypeKey) -> SerializerResult<Box<AnyValue>> {
        Err(SerializerError::not_supported::<Self>(
            SerializerOperation::Deserializing,
        ))
    }
}

/// Binary serializer placeholder: every operation fails.
#[derive(Debug, Default, Copy, Clone)]
pub struct UnconfiguredBinarySerializer;

impl BinarySerializer for UnconfiguredBinarySerializer {
    fn serialize(&self, _value: &AnyValue) -> SerializerResult<Vec<u8>> {
        Err(SerializerError::not_supported::<Self>(
            SerializerOperation::Serializing,
        ))
    }

    fn deserialize(&self, _data: &[u8], _target: TypeKey) -> SerializerResult<Box<AnyValue>> {
        Err(SerializerError::not_supported::<Self>(
            SerializerOperation::Deserializing,
        ))
    }
}
