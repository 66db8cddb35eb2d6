/// Error raised for an invalid call into the public surface.
#[derive(Debug)]
pub(super) struct UsageError {
    kind: UsageErrorKind,
}

#[derive(Debug)]
enum UsageErrorKind {
    /// A configuration call named a member that does not exist.
    UnknownMember { name: String },

    /// A member access used an ordinal outside the owning shape.
    UnknownOrdinal { ordinal: usize },

    /// Row construction with the wrong number of values for the schema.
    InvalidRowWidth { expected: usize, actual: usize },
}

impl UsageError {
    pub(super) fn unknown_member(name: &str) -> Self {
        Self {
            kind: UsageErrorKind::UnknownMember {
                name: name.to_string(),
            },
        }
    }

    pub(super) fn unknown_ordinal(ordinal: usize) -> Self {
        Self {
            kind: UsageErrorKind::UnknownOrdinal { ordinal },
        }
    }

    pub(super) fn invalid_row_width(expected: usize, actual: usize) -> Self {
        Self {
            kind: UsageErrorKind::InvalidRowWidth { expected, actual },
        }
    }
}

impl std::error::Error for UsageError {}

impl core::fmt::Display for UsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            UsageErrorKind::UnknownMember { name } => {
                write!(f, "unknown member `{name}`")
            }
            UsageErrorKind::UnknownOrdinal { ordinal } => {
                write!(f, "no member at ordinal {ordinal}")
            }
            UsageErrorKind::InvalidRowWidth { expected, actual } => {
                write!(
                    f,
                    "row has {actual} values but the schema has {expected} columns"
                )
            }
        }
    }
}
