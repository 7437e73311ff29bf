//! # gofast
//!
//! Generate Go struct declarations and method stubs from a JSON schema.
//!
//! ## Quick Start
//!
//! ```rust
//! let schema = br#"{
//!     "structs": { "User": { "fields": { "userName": { "type": "string", "json": true } } } },
//!     "methods": {
//!         "Rename": {
//!             "ref": { "name": "User", "mutable": true },
//!             "args": { "name": { "type": "typeof:User.userName" } },
//!             "returns": ["error"]
//!         }
//!     }
//! }"#;
//!
//! let output = gofast::generate("user.json", schema).unwrap();
//! assert_eq!(output.name, "user.go");
//! assert!(output.content.contains("userName string `json:\"user_name\"`"));
//! assert!(output.content.contains("func (u *User) Rename(name string) error {}"));
//! ```
//!
//! ## Architecture
//!
//! - [`naming`] - snake_case conversion for tag values
//! - [`schema`] - the parsed document model
//! - [`path`] - `Record.field` lookups
//! - [`expr`] - `typeof:` / `parentof:` / `childrenof:` expressions
//! - [`emitter`] - Go text generation
//! - [`generator`] - the end-to-end generation pass
//! - [`error`] - error types

pub mod emitter;
pub mod error;
pub mod expr;
pub mod generator;
pub mod naming;
pub mod path;
pub mod schema;

pub use emitter::{EmitterConfig, GoEmitter, ResolvedMethod};
pub use error::{GenerateError, GenerateResult};
pub use expr::{ExpressionResolver, HandlerFn, HandlerRegistry};
pub use generator::{generate, GeneratedOutput, Generator};
pub use naming::to_snake_case;
pub use path::ANY_TYPE;
pub use schema::{ArgDef, FieldDef, MethodDef, Receiver, RecordDef, SchemaDocument};
