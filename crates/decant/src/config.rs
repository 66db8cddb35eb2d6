use crate::mapping::{Convert, MemberMapping, MemberMappingCollection};

use decant_core::{Error, Member, Result, Value};

use indexmap::IndexMap;
use std::collections::HashMap;

/// Policy governing how much of the target must be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MappingMode {
    /// Unmatched target members are silently skipped.
    #[default]
    Relaxed,

    /// Every writable target member must be matched, bound, constant, or
    /// explicitly ignored, or resolution fails.
    AllTargetMembers,
}

/// Policy for comparing member names during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameComparer {
    /// Exact, case-sensitive comparison. Default for object-to-object
    /// mappings.
    #[default]
    Ordinal,

    /// ASCII case-insensitive comparison. Default for tabular mappings,
    /// where column casing need not match property casing.
    CaseInsensitive,
}

impl NameComparer {
    pub fn eq(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Ordinal => a == b,
            Self::CaseInsensitive => a.eq_ignore_ascii_case(b),
        }
    }

    fn fold(&self, name: &str) -> String {
        match self {
            Self::Ordinal => name.to_string(),
            Self::CaseInsensitive => name.to_ascii_lowercase(),
        }
    }
}

/// An explicit per-target-member override, taking precedence over name
/// matching.
#[derive(Debug, Clone)]
enum Override {
    /// Pair the target with a differently-named source member.
    Bind { source: String },

    /// Assign a fixed value to the target.
    Constant { value: Value },

    /// Pair with a source member through a conversion step.
    Convert { source: String, convert: Convert },
}

/// Mutable mapping configuration, consumed by [`resolve`](Self::resolve)
/// to produce an immutable [`MemberMappingCollection`].
///
/// Not thread-safe; configure before the first resolve and do not mutate
/// concurrently. A `MapperConfig` holds the already-resolved source and
/// target member lists, so resolution is a pure function of this value.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    source_members: Vec<Member>,
    target_members: Vec<Member>,
    mode: MappingMode,
    comparer: NameComparer,
    ignored: Vec<String>,
    overrides: IndexMap<String, Override>,
}

impl MapperConfig {
    /// A configuration with object-to-object defaults: `Relaxed` mode,
    /// `Ordinal` comparer.
    pub fn new(source_members: Vec<Member>, target_members: Vec<Member>) -> Self {
        Self {
            source_members,
            target_members,
            mode: MappingMode::default(),
            comparer: NameComparer::default(),
            ignored: Vec::new(),
            overrides: IndexMap::new(),
        }
    }

    /// A configuration with tabular defaults: `AllTargetMembers` mode,
    /// case-insensitive comparer.
    pub fn tabular(source_members: Vec<Member>, target_members: Vec<Member>) -> Self {
        let mut config = Self::new(source_members, target_members);
        config.mode = MappingMode::AllTargetMembers;
        config.comparer = NameComparer::CaseInsensitive;
        config
    }

    pub fn source_members(&self) -> &[Member] {
        &self.source_members
    }

    pub fn target_members(&self) -> &[Member] {
        &self.target_members
    }

    pub fn mode(&mut self, mode: MappingMode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn comparer(&mut self, comparer: NameComparer) -> &mut Self {
        self.comparer = comparer;
        self
    }

    /// Excludes a source member from matching: any target member it would
    /// have paired with is left untouched by the compiled function.
    ///
    /// Fails with a usage error if no source member has that name.
    pub fn ignore(&mut self, name: &str) -> Result<&mut Self> {
        let member = self.source_member(name)?;
        let name = member.name.clone();
        if !self.ignored.iter().any(|n| self.comparer.eq(n, &name)) {
            self.ignored.push(name);
        }
        Ok(self)
    }

    /// Undoes a prior [`ignore`](Self::ignore).
    ///
    /// Fails with a usage error if no source member has that name.
    pub fn reset(&mut self, name: &str) -> Result<&mut Self> {
        self.source_member(name)?;
        let comparer = self.comparer;
        self.ignored.retain(|n| !comparer.eq(n, name));
        Ok(self)
    }

    /// Explicitly pairs `source_name` with `target_name`, overriding the
    /// name match for that target.
    ///
    /// Both members must exist; type compatibility is checked at resolve
    /// time.
    pub fn bind(&mut self, source_name: &str, target_name: &str) -> Result<&mut Self> {
        let source = self.source_member(source_name)?.name.clone();
        let target = self.target_member(target_name)?.name.clone();
        self.overrides.insert(target, Override::Bind { source });
        Ok(self)
    }

    /// Assigns a fixed value to `target_name` on every mapping call.
    ///
    /// The value must be assignable to the target member's type; that is
    /// checked at resolve time.
    pub fn constant(&mut self, target_name: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let target = self.target_member(target_name)?.name.clone();
        self.overrides.insert(
            target,
            Override::Constant {
                value: value.into(),
            },
        );
        Ok(self)
    }

    /// Pairs `source_name` with `target_name` through a conversion step.
    ///
    /// The conversion bridges the member types, so no compatibility check
    /// applies; the converted value is checked when written.
    pub fn convert(
        &mut self,
        source_name: &str,
        target_name: &str,
        convert: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Result<&mut Self> {
        self.convert_with(source_name, target_name, Convert::new(convert))
    }

    /// Like [`convert`](Self::convert), but takes a shared [`Convert`]
    /// handle.
    ///
    /// Conversion steps compare by identity, so a configuration that is
    /// reapplied per shape (a `RecordMapper` callback, for instance) should
    /// clone one `Convert` into each application to keep the resolved
    /// collections cache-equal.
    pub fn convert_with(
        &mut self,
        source_name: &str,
        target_name: &str,
        convert: Convert,
    ) -> Result<&mut Self> {
        let source = self.source_member(source_name)?.name.clone();
        let target = self.target_member(target_name)?.name.clone();
        self.overrides
            .insert(target, Override::Convert { source, convert });
        Ok(self)
    }

    /// Resolves the final mapping sequence, in target-member order.
    ///
    /// Deterministic: the same configuration always produces a collection
    /// that compares and hashes equal to prior results. When a case-folding
    /// comparer maps two source names to the same key, the first member in
    /// resolution order wins.
    pub fn resolve(&self) -> Result<MemberMappingCollection> {
        let mut by_name = HashMap::new();
        for (index, member) in self.source_members.iter().enumerate() {
            by_name.entry(self.comparer.fold(&member.name)).or_insert(index);
        }

        let mut mappings = Vec::new();

        for target in &self.target_members {
            if !target.can_write {
                continue;
            }

            if let Some(override_) = self.override_for(&target.name) {
                mappings.push(self.resolve_override(override_, target)?);
                continue;
            }

            let source = by_name
                .get(&self.comparer.fold(&target.name))
                .map(|&index| &self.source_members[index]);

            let Some(source) = source else {
                if self.mode == MappingMode::AllTargetMembers {
                    return Err(Error::unmatched_target_member(target));
                }
                continue;
            };

            if self.is_ignored(&source.name) {
                continue;
            }

            if !source.can_read {
                if self.mode == MappingMode::AllTargetMembers {
                    return Err(Error::unmatched_target_member(target));
                }
                continue;
            }

            if !target.ty.is_assignable_from(&source.ty) {
                return Err(Error::incompatible_members(source, target));
            }

            mappings.push(MemberMapping::copy(source.clone(), target.clone()));
        }

        Ok(MemberMappingCollection::new(mappings))
    }

    fn resolve_override(&self, override_: &Override, target: &Member) -> Result<MemberMapping> {
        match override_ {
            Override::Bind { source } => {
                let source = self.source_member(source)?;
                if !target.ty.is_assignable_from(&source.ty) {
                    return Err(Error::incompatible_members(source, target));
                }
                Ok(MemberMapping::copy(source.clone(), target.clone()))
            }
            Override::Constant { value } => {
                if !value.is_a(&target.ty) {
                    return Err(Error::invalid_constant(target, value));
                }
                Ok(MemberMapping::constant(value.clone(), target.clone()))
            }
            Override::Convert { source, convert } => {
                let source = self.source_member(source)?;
                Ok(MemberMapping::converted(
                    source.clone(),
                    target.clone(),
                    convert.clone(),
                ))
            }
        }
    }

    fn override_for(&self, target_name: &str) -> Option<&Override> {
        self.overrides
            .iter()
            .find(|(name, _)| self.comparer.eq(name, target_name))
            .map(|(_, override_)| override_)
    }

    fn is_ignored(&self, source_name: &str) -> bool {
        self.ignored
            .iter()
            .any(|name| self.comparer.eq(name, source_name))
    }

    fn source_member(&self, name: &str) -> Result<&Member> {
        self.source_members
            .iter()
            .find(|member| self.comparer.eq(&member.name, name))
            .ok_or_else(|| Error::unknown_member(name))
    }

    fn target_member(&self, name: &str) -> Result<&Member> {
        self.target_members
            .iter()
            .find(|member| self.comparer.eq(&member.name, name))
            .ok_or_else(|| Error::unknown_member(name))
    }
}
