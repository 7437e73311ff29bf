//! Single-pass generation: schema bytes in, Go source out.

use crate::emitter::{EmitterConfig, GoEmitter};
use crate::error::GenerateResult;
use crate::expr::{ExpressionResolver, HandlerRegistry};
use crate::schema::SchemaDocument;

/// Result of a successful generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Derived output file name (input name with a `.go` extension).
    pub name: String,

    /// Complete Go source text.
    pub content: String,

    /// Number of record declarations emitted.
    pub records: usize,

    /// Number of method stubs emitted.
    pub methods: usize,
}

/// Runs the load, resolve and emit steps for one schema.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    emitter: GoEmitter,
}

impl Generator {
    /// Create a generator with the standard handlers and the given options.
    pub fn new(config: EmitterConfig) -> Self {
        Self::with_registry(config, HandlerRegistry::standard())
    }

    /// Create a generator with a custom handler registry.
    pub fn with_registry(config: EmitterConfig, registry: HandlerRegistry) -> Self {
        Self {
            emitter: GoEmitter::new()
                .with_resolver(ExpressionResolver::new(registry))
                .with_config(config),
        }
    }

    /// Parse `schema` and generate the Go source for it.
    #[tracing::instrument(skip(self, schema), fields(bytes = schema.len()))]
    pub fn generate(&self, input_name: &str, schema: &[u8]) -> GenerateResult<GeneratedOutput> {
        let doc = SchemaDocument::from_slice(input_name, schema)?;
        self.generate_document(&doc)
    }

    /// Generate the Go source for an already parsed document.
    pub fn generate_document(&self, doc: &SchemaDocument) -> GenerateResult<GeneratedOutput> {
        let content = self.emitter.emit(doc)?;

        let output = GeneratedOutput {
            name: doc.output_name(),
            content,
            records: doc.records.len(),
            methods: doc.methods.len(),
        };

        tracing::debug!(
            output = %output.name,
            records = output.records,
            methods = output.methods,
            bytes = output.content.len(),
            "generated source"
        );

        Ok(output)
    }
}

/// Generate Go source from schema bytes with default options.
pub fn generate(input_name: &str, schema: &[u8]) -> GenerateResult<GeneratedOutput> {
    Generator::default().generate(input_name, schema)
}
