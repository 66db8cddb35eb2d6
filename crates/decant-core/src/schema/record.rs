use crate::{Error, Member, MemberRead, Result, Value};

use indexmap::IndexMap;

/// A standalone ordered name→value map, for tabular sources with no
/// ahead-of-time schema.
///
/// Field order is insertion order, and member resolution follows it, so two
/// records built the same way resolve the same member sequence. Field types
/// are derived from the runtime values; a null field is typed
/// [`Type::Null`](crate::Type::Null) and matches any target type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, appending it if absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record-field member resolver: one readable `RecordField` member
    /// per field, in insertion order, typed from the runtime value.
    pub fn members(&self) -> Vec<Member> {
        self.fields
            .iter()
            .enumerate()
            .map(|(ordinal, (name, value))| Member::record_field(name, ordinal, value.ty()))
            .collect()
    }
}

impl MemberRead for Record {
    fn read_member(&self, ordinal: usize) -> Result<Value> {
        self.fields
            .get_index(ordinal)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| Error::unknown_ordinal(ordinal))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}
