use crate::compile;
use crate::config::MapperConfig;

use decant_core::schema::Record;
use decant_core::{Reflect, Result};

use std::marker::PhantomData;
use std::sync::Arc;

/// Maps schema-less records into objects.
///
/// With no schema known ahead of time, members are resolved from each
/// record instance; the shared compile cache amortizes the work per
/// distinct record shape, so streams of same-shaped records compile once.
/// The configure callback is stored and reapplied per shape, which keeps
/// resolution deterministic across records.
pub struct RecordMapper<T: Reflect> {
    configure: Option<Arc<dyn Fn(&mut MapperConfig) + Send + Sync>>,
    _target: PhantomData<fn() -> T>,
}

impl<T: Reflect> RecordMapper<T> {
    pub fn new() -> Self {
        Self {
            configure: None,
            _target: PhantomData,
        }
    }

    /// A mapper that applies `configure` to every record shape before
    /// resolution.
    pub fn configure(configure: impl Fn(&mut MapperConfig) + Send + Sync + 'static) -> Self {
        Self {
            configure: Some(Arc::new(configure)),
            _target: PhantomData,
        }
    }

    /// Maps one record into a freshly default-constructed target.
    pub fn map(&self, record: &Record) -> Result<T>
    where
        T: Default,
    {
        self.map_into(record, T::default())
    }

    /// Maps one record into an existing target instance and returns it.
    pub fn map_into(&self, record: &Record, mut target: T) -> Result<T> {
        let mut config = MapperConfig::tabular(record.members(), T::members());
        if let Some(configure) = &self.configure {
            configure(&mut config);
        }

        let mappings = config.resolve()?;
        let compiled = compile::shared().compile(&mappings)?;

        compiled.apply(record, &mut target)?;
        Ok(target)
    }
}

impl<T: Reflect> Default for RecordMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reflect> Clone for RecordMapper<T> {
    fn clone(&self) -> Self {
        Self {
            configure: self.configure.clone(),
            _target: PhantomData,
        }
    }
}
