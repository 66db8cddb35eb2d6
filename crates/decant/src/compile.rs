mod cache;
pub use cache::CachedMappingCompiler;
pub(crate) use cache::shared;

use crate::mapping::{Convert, MappingSource, MemberMappingCollection};

use decant_core::{Error, MemberRead, MemberWrite, Result, Value};

use std::sync::Arc;
use tracing::debug;

/// Lowers a [`MemberMappingCollection`] into an executable
/// [`CompiledMapping`].
///
/// Stateless and side-effect free: compiling the same collection twice
/// yields interchangeable programs, which is what lets the cache discard
/// the loser of an insert race.
#[derive(Debug, Default)]
pub struct MappingCompiler;

impl MappingCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Lowers each mapping, in order, to one assignment step.
    ///
    /// All member resolution happens here; the resulting program holds only
    /// ordinals, constants, and conversion steps.
    pub fn compile(&self, mappings: &MemberMappingCollection) -> Result<CompiledMapping> {
        let mut steps = Vec::with_capacity(mappings.len());

        for mapping in mappings {
            let target = mapping.target();
            if !target.can_write {
                return Err(Error::member_not_writable(target));
            }

            match mapping.source() {
                MappingSource::Member(source) => {
                    if !source.can_read {
                        return Err(Error::member_not_readable(source));
                    }
                    match mapping.convert() {
                        Some(convert) => steps.push(Step::Convert {
                            source: source.ordinal,
                            target: target.ordinal,
                            convert: convert.clone(),
                        }),
                        None => {
                            if !target.ty.is_assignable_from(&source.ty) {
                                return Err(Error::incompatible_members(source, target));
                            }
                            steps.push(Step::Copy {
                                source: source.ordinal,
                                target: target.ordinal,
                            });
                        }
                    }
                }
                MappingSource::Constant(value) => {
                    // A conversion over a constant folds at compile time.
                    let value = match mapping.convert() {
                        Some(convert) => convert.apply(value.clone())?,
                        None => value.clone(),
                    };
                    if !value.is_a(&target.ty) {
                        return Err(Error::invalid_constant(target, &value));
                    }
                    steps.push(Step::Const {
                        value,
                        target: target.ordinal,
                    });
                }
            }
        }

        debug!(assignments = steps.len(), "compiled mapping");

        Ok(CompiledMapping {
            steps: steps.into(),
        })
    }
}

/// One assignment of the compiled routine.
#[derive(Debug, Clone)]
enum Step {
    /// `target[t] := source[s]`
    Copy { source: usize, target: usize },

    /// `target[t] := convert(source[s])`
    Convert {
        source: usize,
        target: usize,
        convert: Convert,
    },

    /// `target[t] := value`
    Const { value: Value, target: usize },
}

/// The cached, reusable transformation routine: an ordered array of
/// assignment steps executed on each call.
///
/// No name lookup or member resolution happens at call time; the per-call
/// cost is proportional to the number of mapped members. Cloning shares
/// the step array.
#[derive(Debug, Clone)]
pub struct CompiledMapping {
    steps: Arc<[Step]>,
}

impl CompiledMapping {
    /// Copies values from `source` into `target`, one step per mapped
    /// member, in mapping order.
    pub fn apply<S, T>(&self, source: &S, target: &mut T) -> Result<()>
    where
        S: MemberRead + ?Sized,
        T: MemberWrite + ?Sized,
    {
        for step in self.steps.iter() {
            match step {
                Step::Copy {
                    source: from,
                    target: to,
                } => {
                    let value = source.read_member(*from)?;
                    target.write_member(*to, value)?;
                }
                Step::Convert {
                    source: from,
                    target: to,
                    convert,
                } => {
                    let value = convert.apply(source.read_member(*from)?)?;
                    target.write_member(*to, value)?;
                }
                Step::Const { value, target: to } => {
                    target.write_member(*to, value.clone())?;
                }
            }
        }
        Ok(())
    }

    /// The number of assignments the routine performs per call.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MemberMapping;
    use decant_core::{schema::Record, Member, Type};

    fn collection() -> MemberMappingCollection {
        MemberMappingCollection::new(vec![MemberMapping::copy(
            Member::record_field("id", 0, Type::I64),
            Member::property("id", 0, Type::I64),
        )])
    }

    struct Sink {
        id: Option<Value>,
    }

    impl MemberWrite for Sink {
        fn write_member(&mut self, ordinal: usize, value: Value) -> Result<()> {
            match ordinal {
                0 => {
                    self.id = Some(value);
                    Ok(())
                }
                _ => Err(Error::unknown_ordinal(ordinal)),
            }
        }
    }

    #[test]
    fn test_compile_and_apply() {
        let compiled = MappingCompiler::new().compile(&collection()).unwrap();
        assert_eq!(compiled.len(), 1);

        let record = Record::from_iter([("id", 9i64)]);
        let mut sink = Sink { id: None };
        compiled.apply(&record, &mut sink).unwrap();
        assert_eq!(sink.id, Some(Value::I64(9)));
    }

    #[test]
    fn test_incompatible_pair_fails_compilation() {
        let mappings = MemberMappingCollection::new(vec![MemberMapping::copy(
            Member::record_field("id", 0, Type::String),
            Member::property("id", 0, Type::I64),
        )]);

        let err = MappingCompiler::new().compile(&mappings).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_conversion_step() {
        let convert = Convert::new(|value| Ok(Value::I64(value.to_i64()? + 1)));
        let mapping = MemberMapping::converted(
            Member::record_field("id", 0, Type::I64),
            Member::property("id", 0, Type::I64),
            convert,
        );
        let compiled = MappingCompiler::new()
            .compile(&MemberMappingCollection::new(vec![mapping]))
            .unwrap();

        let record = Record::from_iter([("id", 41i64)]);
        let mut sink = Sink { id: None };
        compiled.apply(&record, &mut sink).unwrap();
        assert_eq!(sink.id, Some(Value::I64(42)));
    }

    #[test]
    fn test_unwritable_target_fails_compilation() {
        let mappings = MemberMappingCollection::new(vec![MemberMapping::copy(
            Member::record_field("id", 0, Type::I64),
            Member::property("id", 0, Type::I64).read_only(),
        )]);

        let err = MappingCompiler::new().compile(&mappings).unwrap_err();
        assert!(err.is_configuration());
    }
}
