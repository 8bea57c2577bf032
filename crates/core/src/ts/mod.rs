//! TypeScript output layer.
//!
//! - `types`: TypeScript AST (TsExpr, TsStmt, TsFunction)
//! - `emit`: AST to code strings via the `Emit` trait
//! - `format`: field lines and declaration form selection for type bodies
//! - `utils`: quoting, escaping and identifier helpers

pub mod emit;
pub mod format;
pub mod types;
pub mod utils;

pub use emit::Emit;
pub use format::{DeclarationKind, TsField, declaration_kind, format_declaration, object_body};
