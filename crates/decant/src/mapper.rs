mod record;
pub use record::RecordMapper;

mod row;
pub use row::RowMapper;

use crate::compile::{self, CompiledMapping};
use crate::config::MapperConfig;
use crate::mapping::MemberMappingCollection;

use decant_core::{Reflect, Result};

use std::marker::PhantomData;

/// The object-to-object mapping facade.
///
/// Construction resolves the member match and compiles it through the
/// process-wide cache, so configuration errors surface to the first caller
/// building the shape. The built mapper is immutable and cheap to use from
/// any number of threads.
///
/// ```
/// use decant::{Mapper, Reflect};
///
/// #[derive(Debug, Default, Reflect)]
/// struct UserDto {
///     id: i64,
///     name: String,
/// }
///
/// #[derive(Debug, Default, Reflect)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// # fn main() -> decant::Result<()> {
/// let mapper = Mapper::<UserDto, User>::new()?;
/// let user = mapper.map(&UserDto { id: 1, name: "amber".into() })?;
/// assert_eq!(user.id, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Mapper<S: Reflect, T: Reflect> {
    mappings: MemberMappingCollection,
    compiled: CompiledMapping,
    _types: PhantomData<fn(&S) -> T>,
}

impl<S: Reflect, T: Reflect> Mapper<S, T> {
    /// Builds a mapper with the object defaults: `Relaxed` mode, ordinal
    /// name comparison.
    pub fn new() -> Result<Self> {
        Self::configure(|_| {})
    }

    /// Builds a mapper after letting `configure` adjust the configuration
    /// (ignore members, change comparer or mode, add overrides).
    ///
    /// Adjustments only take effect here, before the shape's first compile.
    pub fn configure(configure: impl FnOnce(&mut MapperConfig)) -> Result<Self> {
        let mut config = MapperConfig::new(S::members(), T::members());
        configure(&mut config);

        let mappings = config.resolve()?;
        let compiled = compile::shared().compile(&mappings)?;

        Ok(Self {
            mappings,
            compiled,
            _types: PhantomData,
        })
    }

    /// Maps `source` into a freshly default-constructed target.
    pub fn map(&self, source: &S) -> Result<T>
    where
        T: Default,
    {
        self.map_into(source, T::default())
    }

    /// Maps `source` into an existing target instance and returns it.
    pub fn map_into(&self, source: &S, mut target: T) -> Result<T> {
        self.compiled.apply(source, &mut target)?;
        Ok(target)
    }

    /// The resolved mapping sequence this mapper compiles to.
    pub fn mappings(&self) -> &MemberMappingCollection {
        &self.mappings
    }
}
