use super::{CompiledMapping, MappingCompiler};
use crate::mapping::MemberMappingCollection;

use decant_core::Result;

use dashmap::DashMap;
use std::sync::OnceLock;
use tracing::trace;

/// Decorates [`MappingCompiler`] with a concurrent, race-tolerant cache
/// keyed by [`MemberMappingCollection`] structural equality.
///
/// Lookups never block on compilation: a miss compiles outside any lock,
/// then publishes with an insert-if-absent. Losing the insert race discards
/// the local program and returns the published one, so at most one program
/// per key is ever reused. Failed compilations are never cached; a broken
/// shape re-compiles, and re-fails, on every call. The map is append-only
/// for the lifetime of the process.
#[derive(Debug, Default)]
pub struct CachedMappingCompiler {
    compiler: MappingCompiler,
    cache: DashMap<MemberMappingCollection, CompiledMapping>,
}

impl CachedMappingCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(&self, mappings: &MemberMappingCollection) -> Result<CompiledMapping> {
        if let Some(compiled) = self.cache.get(mappings) {
            trace!("mapping cache hit");
            return Ok(compiled.clone());
        }

        let compiled = self.compiler.compile(mappings)?;

        Ok(self
            .cache
            .entry(mappings.clone())
            .or_insert(compiled)
            .clone())
    }

    /// The number of published programs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// The process-wide compile cache backing the mapper facades.
pub(crate) fn shared() -> &'static CachedMappingCompiler {
    static SHARED: OnceLock<CachedMappingCompiler> = OnceLock::new();
    SHARED.get_or_init(CachedMappingCompiler::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MemberMapping;
    use decant_core::{Member, Type};

    fn collection() -> MemberMappingCollection {
        MemberMappingCollection::new(vec![MemberMapping::copy(
            Member::column("id", 0, Type::I64),
            Member::property("id", 0, Type::I64),
        )])
    }

    #[test]
    fn test_hit_returns_cached_program() {
        let cache = CachedMappingCompiler::new();
        assert!(cache.is_empty());

        cache.compile(&collection()).unwrap();
        assert_eq!(cache.len(), 1);

        // Structurally equal key, no new entry.
        cache.compile(&collection()).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let cache = CachedMappingCompiler::new();
        let broken = MemberMappingCollection::new(vec![MemberMapping::copy(
            Member::column("id", 0, Type::String),
            Member::property("id", 0, Type::I64),
        )]);

        assert!(cache.compile(&broken).is_err());
        assert!(cache.is_empty());

        // And it fails again rather than surfacing a stale entry.
        assert!(cache.compile(&broken).is_err());
    }
}
