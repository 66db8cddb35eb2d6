use super::{Member, Value};
use crate::Result;

/// Read access to a shape's members by ordinal.
///
/// Implemented by reflectable structs (via `#[derive(Reflect)]`), by
/// [`Row`](crate::schema::Row) and by [`Record`](crate::schema::Record).
pub trait MemberRead {
    /// Reads the value of the member at `ordinal`.
    ///
    /// Fails with a usage error if the ordinal does not name a member, or
    /// if the member is not readable.
    fn read_member(&self, ordinal: usize) -> Result<Value>;
}

/// Write access to a shape's members by ordinal.
pub trait MemberWrite {
    /// Writes `value` into the member at `ordinal`.
    ///
    /// Fails with a usage error if the ordinal does not name a member, and
    /// with a type-conversion error if the value does not fit the slot.
    fn write_member(&mut self, ordinal: usize, value: Value) -> Result<()>;
}

/// A plain object whose members can be enumerated and accessed.
///
/// `members()` is the object member resolver: it returns one `Property`
/// member per field, in declaration order, typed via
/// [`Scalar`](crate::Scalar). The default derive marks every field readable
/// and writable.
///
/// Resolution order must be stable across calls for the same type; the
/// compiled-mapping cache keys on it.
pub trait Reflect: MemberRead + MemberWrite {
    fn members() -> Vec<Member>;
}
