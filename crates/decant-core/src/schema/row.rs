use super::Schema;
use crate::{Error, MemberRead, Result, Value};

use std::sync::Arc;

/// One result row bound to its [`Schema`].
///
/// Values are stored in column order; access is by ordinal or by
/// (case-insensitive) column name. Nulls are represented as
/// [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    schema: Arc<Schema>,
    values: Vec<Value>,
}

impl Row {
    /// Builds a row from one value per schema column.
    ///
    /// Fails with a usage error if the value count does not match the
    /// schema width.
    pub fn new(schema: Arc<Schema>, values: Vec<Value>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(Error::invalid_row_width(schema.len(), values.len()));
        }
        Ok(Self { schema, values })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn value(&self, ordinal: usize) -> Option<&Value> {
        self.values.get(ordinal)
    }

    pub fn value_by_name(&self, name: &str) -> Option<&Value> {
        self.schema
            .ordinal(name)
            .and_then(|ordinal| self.values.get(ordinal))
    }

    /// The null indicator for the value at `ordinal`.
    ///
    /// Out-of-range ordinals report null.
    pub fn is_null(&self, ordinal: usize) -> bool {
        self.value(ordinal).map_or(true, Value::is_null)
    }
}

impl MemberRead for Row {
    fn read_member(&self, ordinal: usize) -> Result<Value> {
        self.value(ordinal)
            .cloned()
            .ok_or_else(|| Error::unknown_ordinal(ordinal))
    }
}
