use super::Type;

use std::fmt;

/// The kind of owning shape a member was resolved from.
///
/// A closed set: the engine maps between plain object properties, schema
/// columns, and ad-hoc record fields, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberOrigin {
    /// A field of a plain struct, resolved through [`Reflect`](crate::Reflect).
    Property,

    /// A column of a [`Schema`](crate::schema::Schema).
    Column,

    /// A field of a single [`Record`](crate::schema::Record) instance.
    RecordField,
}

/// A named, typed, readable/writable slot on some owning shape.
///
/// Pure value object: a member carries no reference back to its owner.
/// Reads and writes go through [`MemberRead`](crate::MemberRead) and
/// [`MemberWrite`](crate::MemberWrite) using the member's `ordinal`, which
/// is why the ordinal participates in equality: two members that differ
/// only by ordinal name different slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    /// The kind of owner this member belongs to.
    pub origin: MemberOrigin,

    /// The matching key.
    pub name: String,

    /// The type of the slot's value.
    pub ty: Type,

    /// Positional access path into the owning shape.
    pub ordinal: usize,

    pub can_read: bool,

    pub can_write: bool,
}

impl Member {
    pub fn property(name: impl Into<String>, ordinal: usize, ty: Type) -> Self {
        Self {
            origin: MemberOrigin::Property,
            name: name.into(),
            ty,
            ordinal,
            can_read: true,
            can_write: true,
        }
    }

    pub fn column(name: impl Into<String>, ordinal: usize, ty: Type) -> Self {
        Self {
            origin: MemberOrigin::Column,
            name: name.into(),
            ty,
            ordinal,
            can_read: true,
            can_write: false,
        }
    }

    pub fn record_field(name: impl Into<String>, ordinal: usize, ty: Type) -> Self {
        Self {
            origin: MemberOrigin::RecordField,
            name: name.into(),
            ty,
            ordinal,
            can_read: true,
            can_write: false,
        }
    }

    /// Marks the member read-only.
    pub fn read_only(mut self) -> Self {
        self.can_write = false;
        self
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
