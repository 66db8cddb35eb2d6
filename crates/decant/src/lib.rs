//! Decant copies values between shapes — plain structs, schema-bound rows,
//! and ad-hoc records — through mappings that are resolved once, compiled
//! to an ordinal program, and cached process-wide.

mod compile;
pub use compile::{CachedMappingCompiler, CompiledMapping, MappingCompiler};

mod config;
pub use config::{MapperConfig, MappingMode, NameComparer};

mod mapper;
pub use mapper::{Mapper, RecordMapper, RowMapper};

mod mapping;
pub use mapping::{Convert, MappingSource, MemberMapping, MemberMappingCollection};

pub use decant_core::{
    schema, Error, Member, MemberOrigin, MemberRead, MemberWrite, Reflect, Result, Scalar, Type,
    Value,
};

pub use decant_macros::Reflect;

#[doc(hidden)]
pub mod codegen_support {
    pub use decant_core::{
        Error, Member, MemberRead, MemberWrite, Reflect, Result, Scalar, Value,
    };
}
