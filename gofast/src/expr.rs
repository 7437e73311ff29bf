//! Symbolic type expressions.
//!
//! A type string of the form `<prefix>:<dotted path>` is resolved against the
//! schema at generation time. Recognized prefixes:
//!
//! | Prefix | Result |
//! |--------|--------|
//! | `typeof:` | declared type of the referenced field, empty if it does not resolve |
//! | `parentof:` | always empty |
//! | `childrenof:` | always empty |
//!
//! Anything else is a literal type and passes through unchanged.

use crate::error::GenerateResult;
use crate::schema::SchemaDocument;

/// A handler receives the full expression and returns its replacement.
pub type HandlerFn = fn(&str, &SchemaDocument) -> GenerateResult<String>;

/// Ordered set of named expression handlers.
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: Vec<(&'static str, HandlerFn)>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl HandlerRegistry {
    /// Registry with the `typeof`, `parentof` and `childrenof` handlers,
    /// matched in that order.
    pub fn standard() -> Self {
        Self {
            handlers: vec![
                ("typeof", type_of as HandlerFn),
                ("parentof", parent_of as HandlerFn),
                ("childrenof", children_of as HandlerFn),
            ],
        }
    }

    /// Registry with no handlers; every expression is literal.
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler under `name`. Handlers are tried in registration
    /// order and the first matching prefix wins.
    pub fn with_handler(mut self, name: &'static str, handler: HandlerFn) -> Self {
        self.handlers.push((name, handler));
        self
    }

    /// Find the first handler whose `<name>:` prefix matches `expr`.
    pub fn find(&self, expr: &str) -> Option<(&'static str, HandlerFn)> {
        self.handlers
            .iter()
            .find(|(name, _)| {
                expr.strip_prefix(*name)
                    .is_some_and(|rest| rest.starts_with(':'))
            })
            .copied()
    }

    /// Registered handler names, in match order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|(name, _)| *name)
    }
}

/// Resolves type expressions against a schema.
#[derive(Debug, Clone, Default)]
pub struct ExpressionResolver {
    registry: HandlerRegistry,
}

impl ExpressionResolver {
    /// Create a resolver using the given handler registry.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a single expression to a concrete type string.
    ///
    /// Literal types are returned unchanged, so resolving an already
    /// resolved value is a no-op.
    pub fn resolve(&self, expr: &str, doc: &SchemaDocument) -> GenerateResult<String> {
        match self.registry.find(expr) {
            Some((name, handler)) => {
                let resolved = handler(expr, doc)?;
                tracing::debug!(expr, handler = name, resolved = %resolved, "resolved expression");
                Ok(resolved)
            }
            None => Ok(expr.to_string()),
        }
    }

    /// The handler registry in use.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}

/// Strip `<name>:` from an expression and trim the remaining path.
fn expression_path<'a>(expr: &'a str, name: &str) -> &'a str {
    expr.strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(expr)
        .trim()
}

/// `typeof:Record.field` -> the field's declared type.
///
/// A path that does not resolve yields an empty type rather than an error.
fn type_of(expr: &str, doc: &SchemaDocument) -> GenerateResult<String> {
    let path = expression_path(expr, "typeof");
    match doc.field_by_path(path) {
        Ok(field) => Ok(field.type_expr.clone()),
        Err(err) => {
            tracing::debug!(path, error = %err, "typeof target not found, resolving to empty");
            Ok(String::new())
        }
    }
}

// TODO: define hierarchy semantics for `parentof` and `childrenof`; both
// resolve to an empty type until then.
fn parent_of(_expr: &str, _doc: &SchemaDocument) -> GenerateResult<String> {
    Ok(String::new())
}

fn children_of(_expr: &str, _doc: &SchemaDocument) -> GenerateResult<String> {
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::path::ANY_TYPE;
    use crate::schema::{FieldDef, RecordDef};

    fn doc() -> SchemaDocument {
        SchemaDocument::new("test.json").with_record(
            "Foo",
            RecordDef::default()
                .with_field("bar", FieldDef::new("string"))
                .with_field("items", FieldDef::new("[]*Item")),
        )
    }

    #[test]
    fn test_typeof_resolves_field_type() {
        let resolver = ExpressionResolver::default();
        assert_eq!(resolver.resolve("typeof:Foo.bar", &doc()).unwrap(), "string");
        assert_eq!(resolver.resolve("typeof:Foo.items", &doc()).unwrap(), "[]*Item");
    }

    #[test]
    fn test_typeof_trims_whitespace() {
        let resolver = ExpressionResolver::default();
        assert_eq!(resolver.resolve("typeof: Foo.bar ", &doc()).unwrap(), "string");
    }

    #[test]
    fn test_typeof_whole_record() {
        let resolver = ExpressionResolver::default();
        assert_eq!(resolver.resolve("typeof:Foo", &doc()).unwrap(), ANY_TYPE);
    }

    #[test]
    fn test_typeof_unknown_is_empty() {
        let resolver = ExpressionResolver::default();
        assert_eq!(resolver.resolve("typeof:Unknown.x", &doc()).unwrap(), "");
        assert_eq!(resolver.resolve("typeof:Foo.missing", &doc()).unwrap(), "");
        assert_eq!(resolver.resolve("typeof:", &doc()).unwrap(), "");
    }

    #[test]
    fn test_parentof_and_childrenof_are_empty() {
        let resolver = ExpressionResolver::default();
        for expr in ["parentof:Foo.bar", "parentof:anything", "childrenof:Foo", "childrenof:"] {
            assert_eq!(resolver.resolve(expr, &doc()).unwrap(), "", "{expr}");
        }
    }

    #[test]
    fn test_literals_pass_through() {
        let resolver = ExpressionResolver::default();
        for expr in ["string", "*User", "map[string]int", "sizeof:Foo.bar", "typeofFoo.bar", ""] {
            assert_eq!(resolver.resolve(expr, &doc()).unwrap(), expr);
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = ExpressionResolver::default();
        let once = resolver.resolve("typeof:Foo.bar", &doc()).unwrap();
        let twice = resolver.resolve(&once, &doc()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = HandlerRegistry::standard().names().collect();
        assert_eq!(names, vec!["typeof", "parentof", "childrenof"]);
    }

    #[test]
    fn test_empty_registry_treats_everything_as_literal() {
        let resolver = ExpressionResolver::new(HandlerRegistry::empty());
        assert_eq!(
            resolver.resolve("typeof:Foo.bar", &doc()).unwrap(),
            "typeof:Foo.bar"
        );
    }

    #[test]
    fn test_handler_errors_propagate() {
        fn failing(expr: &str, _doc: &SchemaDocument) -> GenerateResult<String> {
            Err(GenerateError::resolution(expr, "boom"))
        }

        let resolver =
            ExpressionResolver::new(HandlerRegistry::empty().with_handler("fail", failing));
        let err = resolver.resolve("fail:Foo", &doc()).unwrap_err();
        assert_eq!(err, GenerateError::resolution("fail:Foo", "boom"));
    }

    #[test]
    fn test_first_matching_handler_wins() {
        fn first(_: &str, _: &SchemaDocument) -> GenerateResult<String> {
            Ok("first".to_string())
        }
        fn second(_: &str, _: &SchemaDocument) -> GenerateResult<String> {
            Ok("second".to_string())
        }

        let resolver = ExpressionResolver::new(
            HandlerRegistry::empty()
                .with_handler("dup", first)
                .with_handler("dup", second),
        );
        assert_eq!(resolver.resolve("dup:x", &doc()).unwrap(), "first");
    }
}
