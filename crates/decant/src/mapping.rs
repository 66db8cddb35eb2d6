mod collection;
pub use collection::MemberMappingCollection;

use decant_core::{Member, Result, Value};

use by_address::ByAddress;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// The value side of a [`MemberMapping`]: either a readable source member
/// or a literal embedded at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MappingSource {
    Member(Member),
    Constant(Value),
}

/// One resolved pairing: a source (member or constant), a writable target
/// member, and an optional value-conversion step.
///
/// Immutable. Equality is member-wise; the conversion step compares by
/// identity (see [`Convert`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberMapping {
    source: MappingSource,
    target: Member,
    convert: Option<Convert>,
}

impl MemberMapping {
    /// A direct source-to-target copy.
    pub fn copy(source: Member, target: Member) -> Self {
        Self {
            source: MappingSource::Member(source),
            target,
            convert: None,
        }
    }

    /// A fixed value assigned to the target on every call.
    pub fn constant(value: Value, target: Member) -> Self {
        Self {
            source: MappingSource::Constant(value),
            target,
            convert: None,
        }
    }

    /// A source-to-target copy through a conversion step.
    pub fn converted(source: Member, target: Member, convert: Convert) -> Self {
        Self {
            source: MappingSource::Member(source),
            target,
            convert: Some(convert),
        }
    }

    pub fn source(&self) -> &MappingSource {
        &self.source
    }

    pub fn target(&self) -> &Member {
        &self.target
    }

    pub fn convert(&self) -> Option<&Convert> {
        self.convert.as_ref()
    }
}

/// A shared value-conversion step.
///
/// Closures have no structural equality, so a `Convert` compares and hashes
/// by allocation identity: two mappings are equal only when they share the
/// same conversion instance. Cloning a `Convert` preserves identity.
#[derive(Clone)]
pub struct Convert {
    func: ByAddress<Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>>,
}

impl Convert {
    pub fn new(func: impl Fn(Value) -> Result<Value> + Send + Sync + 'static) -> Self {
        Self {
            func: ByAddress(Arc::new(func)),
        }
    }

    pub fn apply(&self, value: Value) -> Result<Value> {
        (self.func.0)(value)
    }
}

impl PartialEq for Convert {
    fn eq(&self, other: &Self) -> bool {
        self.func == other.func
    }
}

impl Eq for Convert {}

impl Hash for Convert {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.func.hash(state);
    }
}

impl fmt::Debug for Convert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Convert({:p})", Arc::as_ptr(&self.func.0))
    }
}
