mod configuration;
mod usage;

use configuration::ConfigurationError;
use usage::UsageError;

use crate::{Member, Type, Value};

use std::sync::Arc;

/// An error that can occur in Decant.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    /// The member-matching rules for a mapping shape are violated. Raised
    /// once per shape, at resolve/compile time.
    Configuration(ConfigurationError),

    /// An invalid call into the public surface. Never mutates cache state.
    Usage(UsageError),

    /// A value did not fit the slot it was loaded into.
    TypeConversion { value: Type, target: Type },

    /// Adhoc error, typically surfaced from a user conversion closure.
    Anyhow(anyhow::Error),
}

impl Error {
    fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Arc::new(kind),
        }
    }

    /// A writable target member has no matching source member under
    /// `AllTargetMembers` mode.
    pub fn unmatched_target_member(target: &Member) -> Self {
        Self::new(ErrorKind::Configuration(
            ConfigurationError::unmatched_target_member(target),
        ))
    }

    /// Two members paired by name (or by an explicit bind) have
    /// assignment-incompatible value types.
    pub fn incompatible_members(source: &Member, target: &Member) -> Self {
        Self::new(ErrorKind::Configuration(
            ConfigurationError::incompatible_members(source, target),
        ))
    }

    /// A constant override's value is not assignable to its target member.
    pub fn invalid_constant(target: &Member, value: &Value) -> Self {
        Self::new(ErrorKind::Configuration(
            ConfigurationError::invalid_constant(target, value),
        ))
    }

    /// A mapping names a target member that cannot be written.
    pub fn member_not_writable(member: &Member) -> Self {
        Self::new(ErrorKind::Configuration(
            ConfigurationError::member_not_writable(member),
        ))
    }

    /// A mapping names a source member that cannot be read.
    pub fn member_not_readable(member: &Member) -> Self {
        Self::new(ErrorKind::Configuration(
            ConfigurationError::member_not_readable(member),
        ))
    }

    /// A configuration call named a member that does not exist.
    pub fn unknown_member(name: &str) -> Self {
        Self::new(ErrorKind::Usage(UsageError::unknown_member(name)))
    }

    /// A member access used an ordinal outside the owning shape.
    pub fn unknown_ordinal(ordinal: usize) -> Self {
        Self::new(ErrorKind::Usage(UsageError::unknown_ordinal(ordinal)))
    }

    /// A row was constructed with the wrong number of values for its schema.
    pub fn invalid_row_width(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::Usage(UsageError::invalid_row_width(
            expected, actual,
        )))
    }

    pub fn invalid_type_conversion(value: &Value, target: &Type) -> Self {
        Self::new(ErrorKind::TypeConversion {
            value: value.ty(),
            target: target.clone(),
        })
    }

    /// Returns `true` if this is a mapping configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(&*self.inner, ErrorKind::Configuration(_))
    }

    /// Returns `true` if this is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(&*self.inner, ErrorKind::Usage(_))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(&*self.inner, ErrorKind::TypeConversion { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.inner {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &*self.inner {
            ErrorKind::Configuration(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Usage(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::TypeConversion { value, target } => {
                write!(f, "cannot convert value of type {value} to {target}")
            }
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.inner).finish()
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self::new(ErrorKind::Anyhow(value))
    }
}
