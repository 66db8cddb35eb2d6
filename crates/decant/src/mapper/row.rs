use crate::compile::{self, CompiledMapping};
use crate::config::MapperConfig;
use crate::mapping::MemberMappingCollection;

use decant_core::schema::{Row, Schema};
use decant_core::{Reflect, Result};

use std::marker::PhantomData;

/// Maps schema-bound rows into objects.
///
/// Tabular defaults apply: every writable target member must be matched
/// (`AllTargetMembers`) and column names match case-insensitively, so a
/// column `"id"` pairs with a property `Id` or `id`.
#[derive(Debug)]
pub struct RowMapper<T: Reflect> {
    mappings: MemberMappingCollection,
    compiled: CompiledMapping,
    _target: PhantomData<fn() -> T>,
}

impl<T: Reflect> RowMapper<T> {
    /// Builds a mapper for rows of the given schema.
    pub fn new(schema: &Schema) -> Result<Self> {
        Self::configure(schema, |_| {})
    }

    /// Builds a mapper after letting `configure` adjust the tabular
    /// defaults.
    pub fn configure(schema: &Schema, configure: impl FnOnce(&mut MapperConfig)) -> Result<Self> {
        let mut config = MapperConfig::tabular(schema.members(), T::members());
        configure(&mut config);

        let mappings = config.resolve()?;
        let compiled = compile::shared().compile(&mappings)?;

        Ok(Self {
            mappings,
            compiled,
            _target: PhantomData,
        })
    }

    /// Maps one row into a freshly default-constructed target.
    pub fn map(&self, row: &Row) -> Result<T>
    where
        T: Default,
    {
        self.map_into(row, T::default())
    }

    /// Maps one row into an existing target instance and returns it.
    pub fn map_into(&self, row: &Row, mut target: T) -> Result<T> {
        self.compiled.apply(row, &mut target)?;
        Ok(target)
    }

    /// Maps a result set, one target per row.
    pub fn map_all(&self, rows: &[Row]) -> Result<Vec<T>>
    where
        T: Default,
    {
        rows.iter().map(|row| self.map(row)).collect()
    }

    pub fn mappings(&self) -> &MemberMappingCollection {
        &self.mappings
    }
}
