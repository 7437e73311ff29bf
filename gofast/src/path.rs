//! Dotted path lookup of record fields.
//!
//! Paths are one level deep: `Record` or `Record.field`. Segments past the
//! second are ignored.

use crate::error::{GenerateError, GenerateResult};
use crate::schema::{FieldDef, SchemaDocument};
use std::borrow::Cow;

/// Type reported when a path names a whole record instead of a field.
pub const ANY_TYPE: &str = "interface{}";

impl SchemaDocument {
    /// Look up a field definition by dotted path.
    ///
    /// A single segment naming a known record yields a synthetic field of
    /// type [`ANY_TYPE`]. Every other miss is [`GenerateError::NotFound`].
    pub fn field_by_path(&self, path: &str) -> GenerateResult<Cow<'_, FieldDef>> {
        let segments: Vec<&str> = path.split('.').collect();
        tracing::trace!(path, segments = segments.len(), "looking up field");

        match segments.as_slice() {
            [record] => {
                if self.has_record(record) {
                    Ok(Cow::Owned(FieldDef::new(ANY_TYPE)))
                } else {
                    Err(GenerateError::not_found(path))
                }
            }
            [record, field, ..] => self
                .records
                .get(*record)
                .and_then(|r| r.fields.get(*field))
                .map(Cow::Borrowed)
                .ok_or_else(|| GenerateError::not_found(path)),
            [] => Err(GenerateError::not_found(path)),
        }
    }
}
