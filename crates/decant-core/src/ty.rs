use std::fmt;

/// A member value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// The type of a null value whose underlying type is not known.
    ///
    /// Record fields resolved from a null value carry this type. A `Null`
    /// source is assignable to any target.
    Null,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if a value of type `src` can be assigned to a slot of
    /// this type without conversion.
    pub fn is_assignable_from(&self, src: &Type) -> bool {
        src.is_null() || self == src
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::String => "string",
            Self::Uuid => "uuid",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignable_same_type() {
        assert!(Type::I64.is_assignable_from(&Type::I64));
        assert!(!Type::I64.is_assignable_from(&Type::I32));
        assert!(!Type::String.is_assignable_from(&Type::Bool));
    }

    #[test]
    fn test_null_assigns_to_anything() {
        assert!(Type::I64.is_assignable_from(&Type::Null));
        assert!(Type::String.is_assignable_from(&Type::Null));
        assert!(Type::Null.is_assignable_from(&Type::Null));
    }
}
