mod error;
pub use error::Error;

mod member;
pub use member::{Member, MemberOrigin};

mod reflect;
pub use reflect::{MemberRead, MemberWrite, Reflect};

mod scalar;
pub use scalar::Scalar;

pub mod schema;
pub use schema::Schema;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

/// A Result type alias that uses Decant's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
