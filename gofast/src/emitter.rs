//! Go code emitter.
//!
//! Transforms a [`SchemaDocument`] into Go source text:
//!
//! - `type X struct { ... }` for every record, with struct tags
//! - `func (x *X) Name(...) ... {}` stubs for every method
//!
//! Method argument and return types are resolved through the
//! [`ExpressionResolver`] before any text is produced, so a failing
//! expression never leaves partial output behind.

use crate::error::{GenerateError, GenerateResult};
use crate::expr::ExpressionResolver;
use crate::naming::to_snake_case;
use crate::schema::{FieldDef, MethodDef, RecordDef, SchemaDocument};

/// Comment placed at the top of generated files when headers are enabled.
pub const GENERATED_HEADER: &str = "// Code generated by gofast. DO NOT EDIT.";

/// Options controlling the emitted file preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Prepend [`GENERATED_HEADER`].
    pub header: bool,

    /// Emit a `package` clause with this name.
    pub package: Option<String>,
}

impl EmitterConfig {
    /// Enable or disable the generated-code header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set the package clause.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

/// A method with every type expression resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMethod {
    /// Method name.
    pub name: String,

    /// Receiver record type.
    pub receiver: String,

    /// Pointer receiver.
    pub mutable: bool,

    /// `(name, type)` pairs in argument order.
    pub args: Vec<(String, String)>,

    /// Non-empty return types in declaration order.
    pub returns: Vec<String>,
}

impl ResolvedMethod {
    /// Receiver binding: the first character of the record name, lowercased.
    pub fn binding(&self) -> String {
        self.receiver
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }

    /// Receiver type: `*T` when mutable, `T` otherwise.
    pub fn receiver_type(&self) -> String {
        if self.mutable {
            format!("*{}", self.receiver)
        } else {
            self.receiver.clone()
        }
    }
}

/// Go source emitter.
#[derive(Debug, Clone, Default)]
pub struct GoEmitter {
    resolver: ExpressionResolver,
    config: EmitterConfig,
}

impl GoEmitter {
    /// Create an emitter with the standard handlers and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom expression resolver.
    pub fn with_resolver(mut self, resolver: ExpressionResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use custom preamble options.
    pub fn with_config(mut self, config: EmitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Emit the complete source file for a document.
    pub fn emit(&self, doc: &SchemaDocument) -> GenerateResult<String> {
        let methods = self.resolve_methods(doc)?;

        let mut sections = Vec::new();

        if self.config.header {
            sections.push(format!("{}\n", GENERATED_HEADER));
        }

        if let Some(package) = &self.config.package {
            sections.push(format!("package {}\n", package));
        }

        for (name, record) in &doc.records {
            tracing::debug!(record = %name, fields = record.fields.len(), "emitting record");
            sections.push(self.emit_record(name, record));
        }

        if !methods.is_empty() {
            let block: String = methods.iter().map(|m| self.emit_method(m)).collect();
            sections.push(block);
        }

        Ok(sections.join("\n"))
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Emit a `type X struct { ... }` block.
    pub fn emit_record(&self, name: &str, record: &RecordDef) -> String {
        let mut out = format!("type {} struct {{\n", name);

        for (field_name, field) in &record.fields {
            let line = [
                field_name.clone(),
                field.type_expr.clone(),
                self.field_tags(field_name, field).unwrap_or_default(),
            ]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

            out.push('\t');
            out.push_str(&line);
            out.push('\n');
        }

        out.push_str("}\n");
        out
    }

    /// Build the backquoted struct tag for a field, if any entries apply.
    ///
    /// `json` comes first, followed by the extra tags in name order.
    pub fn field_tags(&self, name: &str, field: &FieldDef) -> Option<String> {
        let mut entries = Vec::new();

        if field.json {
            entries.push(format!("json:\"{}\"", to_snake_case(name)));
        }

        for (tag, values) in &field.tags {
            entries.push(format!("{}:\"{}\"", tag, values.join(";")));
        }

        if entries.is_empty() {
            None
        } else {
            Some(format!("`{}`", entries.join(" ")))
        }
    }

    // =========================================================================
    // Methods
    // =========================================================================

    /// Resolve every method of the document, failing on the first error.
    pub fn resolve_methods(&self, doc: &SchemaDocument) -> GenerateResult<Vec<ResolvedMethod>> {
        doc.methods
            .iter()
            .map(|(name, method)| self.resolve_method(name, method, doc))
            .collect()
    }

    /// Resolve argument and return types of a single method.
    pub fn resolve_method(
        &self,
        name: &str,
        method: &MethodDef,
        doc: &SchemaDocument,
    ) -> GenerateResult<ResolvedMethod> {
        if method.receiver.name.is_empty() {
            return Err(GenerateError::EmptyReceiver {
                method: name.to_string(),
            });
        }

        let mut args = Vec::with_capacity(method.args.len());
        for (arg, def) in &method.args {
            args.push((arg.clone(), self.resolver.resolve(&def.type_expr, doc)?));
        }

        let mut returns = Vec::with_capacity(method.returns.len());
        for ret in &method.returns {
            let resolved = self.resolver.resolve(ret, doc)?;
            if !resolved.is_empty() {
                returns.push(resolved);
            }
        }

        Ok(ResolvedMethod {
            name: name.to_string(),
            receiver: method.receiver.name.clone(),
            mutable: method.receiver.mutable,
            args,
            returns,
        })
    }

    /// Emit a method stub line.
    pub fn emit_method(&self, method: &ResolvedMethod) -> String {
        tracing::debug!(method = %method.name, receiver = %method.receiver, "emitting method");

        let args = method
            .args
            .iter()
            .map(|(name, ty)| {
                if ty.is_empty() {
                    name.clone()
                } else {
                    format!("{} {}", name, ty)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let returns = match method.returns.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", single),
            many => format!(" ({})", many.join(", ")),
        };

        format!(
            "func ({} {}) {}({}){} {{}}\n",
            method.binding(),
            method.receiver_type(),
            method.name,
            args,
            returns
        )
    }
}
