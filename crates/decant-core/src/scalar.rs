use super::{Type, Value};
use crate::{Error, Result};

use uuid::Uuid;

/// A Rust type that round-trips through a single [`Value`] slot.
///
/// Implemented for the primitive types the engine can move between members,
/// plus `Option<T>` for nullable slots. Derived `Reflect` implementations
/// use this trait to type and access struct fields.
pub trait Scalar: Sized {
    const TYPE: Type;
    const NULLABLE: bool = false;

    fn load(value: Value) -> Result<Self>;

    fn store(self) -> Value;
}

impl Scalar for bool {
    const TYPE: Type = Type::Bool;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::invalid_type_conversion(&value, &Self::TYPE)),
        }
    }

    fn store(self) -> Value {
        Value::Bool(self)
    }
}

impl Scalar for i32 {
    const TYPE: Type = Type::I32;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            _ => Err(Error::invalid_type_conversion(&value, &Self::TYPE)),
        }
    }

    fn store(self) -> Value {
        Value::I32(self)
    }
}

impl Scalar for i64 {
    const TYPE: Type = Type::I64;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            _ => Err(Error::invalid_type_conversion(&value, &Self::TYPE)),
        }
    }

    fn store(self) -> Value {
        Value::I64(self)
    }
}

impl Scalar for String {
    const TYPE: Type = Type::String;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::invalid_type_conversion(&value, &Self::TYPE)),
        }
    }

    fn store(self) -> Value {
        Value::String(self)
    }
}

impl Scalar for Uuid {
    const TYPE: Type = Type::Uuid;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            _ => Err(Error::invalid_type_conversion(&value, &Self::TYPE)),
        }
    }

    fn store(self) -> Value {
        Value::Uuid(self)
    }
}

impl<T: Scalar> Scalar for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::load(value)?)),
        }
    }

    fn store(self) -> Value {
        match self {
            Some(value) => value.store(),
            None => Value::Null,
        }
    }
}
