//! Schema document model.
//!
//! The document is deserialized once from JSON and is read-only afterwards.
//! All maps are [`BTreeMap`]s so every walk over records, fields, methods
//! and arguments happens in lexicographic key order.
//!
//! # Schema Shape
//!
//! ```json
//! {
//!   "structs": {
//!     "User": {
//!       "fields": {
//!         "userName": { "type": "string", "json": true, "tags": { "db": ["user_name"] } }
//!       }
//!     }
//!   },
//!   "methods": {
//!     "Rename": {
//!       "ref": { "name": "User", "mutable": true },
//!       "args": { "name": { "type": "typeof:User.userName" } },
//!       "returns": ["error"]
//!     }
//!   }
//! }
//! ```
//!
//! Missing keys and explicit `null`s take their zero value, unknown keys are
//! ignored.

use crate::error::GenerateResult;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

/// Extension of the generated source file.
pub const OUTPUT_EXTENSION: &str = "go";

/// Record name to record definition.
pub type Records = BTreeMap<String, RecordDef>;

/// Method name to method definition.
pub type Methods = BTreeMap<String, MethodDef>;

/// Root of a parsed schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaDocument {
    /// Identifier of the schema source (usually its file path).
    #[serde(skip)]
    source_name: String,

    /// Record declarations, keyed by record name.
    #[serde(default, rename = "structs", deserialize_with = "null_as_default")]
    pub records: Records,

    /// Method stubs, keyed by method name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Methods,
}

/// A record (struct) declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecordDef {
    /// Field name to field definition.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: BTreeMap<String, FieldDef>,
}

/// A single record field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldDef {
    /// Declared type, emitted verbatim.
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub type_expr: String,

    /// Whether the field gets a `json` serialization tag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub json: bool,

    /// Extra struct tags; values are joined with `;`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeMap<String, Vec<String>>,
}

/// A method stub declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MethodDef {
    /// Record the method is declared on.
    #[serde(default, rename = "ref", deserialize_with = "null_as_default")]
    pub receiver: Receiver,

    /// Argument name to argument definition.
    #[serde(default, deserialize_with = "null_as_default")]
    pub args: BTreeMap<String, ArgDef>,

    /// Return types, in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub returns: Vec<String>,
}

/// Method receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Receiver {
    /// Name of the receiving record type.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Mutable receivers are pointers, immutable ones are values.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mutable: bool,
}

/// A method argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArgDef {
    /// Argument type; may be a symbolic expression.
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub type_expr: String,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl SchemaDocument {
    /// Create an empty document for the given source identifier.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    /// Parse a schema from raw JSON bytes.
    pub fn from_slice(source_name: impl Into<String>, bytes: &[u8]) -> GenerateResult<Self> {
        let mut doc: SchemaDocument = serde_json::from_slice(bytes)?;
        doc.source_name = source_name.into();
        tracing::debug!(
            source = %doc.source_name,
            records = doc.records.len(),
            methods = doc.methods.len(),
            "parsed schema"
        );
        Ok(doc)
    }

    /// Parse a schema from a JSON string.
    pub fn from_str(source_name: impl Into<String>, json: &str) -> GenerateResult<Self> {
        Self::from_slice(source_name, json.as_bytes())
    }

    /// Add a record definition.
    pub fn with_record(mut self, name: impl Into<String>, record: RecordDef) -> Self {
        self.records.insert(name.into(), record);
        self
    }

    /// Add a method definition.
    pub fn with_method(mut self, name: impl Into<String>, method: MethodDef) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    /// Identifier of the schema source.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Name of the generated file: the source name with its extension
    /// replaced by `.go`.
    pub fn output_name(&self) -> String {
        Path::new(self.source_name.trim())
            .with_extension(OUTPUT_EXTENSION)
            .to_string_lossy()
            .into_owned()
    }

    /// Check if a record with the given name exists.
    pub fn has_record(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }
}

impl RecordDef {
    /// Add a field definition.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDef) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

impl FieldDef {
    /// Create a field of the given type with no tags.
    pub fn new(type_expr: impl Into<String>) -> Self {
        Self {
            type_expr: type_expr.into(),
            ..Default::default()
        }
    }

    /// Mark the field for `json` tagging.
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Add an extra struct tag.
    pub fn with_tag<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

impl MethodDef {
    /// Create a method on the given record.
    pub fn new(receiver: impl Into<String>, mutable: bool) -> Self {
        Self {
            receiver: Receiver {
                name: receiver.into(),
                mutable,
            },
            ..Default::default()
        }
    }

    /// Add an argument.
    pub fn with_arg(mut self, name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        self.args.insert(
            name.into(),
            ArgDef {
                type_expr: type_expr.into(),
            },
        );
        self
    }

    /// Append a return type.
    pub fn with_return(mut self, type_expr: impl Into<String>) -> Self {
        self.returns.push(type_expr.into());
        self
    }
}
