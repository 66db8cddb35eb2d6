use super::MemberMapping;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable, order-preserving sequence of [`MemberMapping`]s.
///
/// This is the compiled-mapping cache key. The element hash is folded once
/// at construction with a fixed-key hasher, so repeated resolutions of the
/// same configuration produce collections that compare and hash equal.
/// Equality short-circuits on allocation identity, then on the precomputed
/// hash, before falling back to element-wise comparison.
#[derive(Clone)]
pub struct MemberMappingCollection {
    mappings: Arc<Vec<MemberMapping>>,
    hash: u64,
}

impl MemberMappingCollection {
    pub fn new(mappings: Vec<MemberMapping>) -> Self {
        // DefaultHasher::new() uses fixed keys; the fold is deterministic
        // for the process lifetime of the cache.
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        mappings.hash(&mut hasher);
        let hash = hasher.finish();

        Self {
            mappings: Arc::new(mappings),
            hash,
        }
    }

    pub fn mappings(&self) -> &[MemberMapping] {
        &self.mappings
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberMapping> {
        self.mappings.iter()
    }
}

impl PartialEq for MemberMappingCollection {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.mappings, &other.mappings)
            || (self.hash == other.hash && self.mappings == other.mappings)
    }
}

impl Eq for MemberMappingCollection {}

impl Hash for MemberMappingCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<'a> IntoIterator for &'a MemberMappingCollection {
    type Item = &'a MemberMapping;
    type IntoIter = std::slice::Iter<'a, MemberMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for MemberMappingCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.mappings.iter()).finish()
    }
}
