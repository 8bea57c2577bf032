//! REST operation descriptor to TypeScript fetch client generator.
//!
//! Each operation descriptor produces three pieces of TypeScript:
//! - a request parameter type (`GetUserParams`)
//! - a discriminated union of per-status results (`GetUserResult`)
//! - an async function performing the call (`getUser`)
//!
//! plus one `RequestOptions` declaration shared by the whole module.
//!
//! # Usage
//!
//! ```
//! use fetchgen_core::{generate, load_operations};
//!
//! let json = r#"[{
//!     "path": "/users/{id}",
//!     "verb": "get",
//!     "server": "https://api.example.com",
//!     "positionalParams": [{ "name": "id", "type": "string", "required": true }],
//!     "responses": [{ "code": "200", "mediaTypes": [{ "mediaType": "application/json", "type": "User" }] }]
//! }]"#;
//!
//! let operations = load_operations(json).unwrap();
//! let ts_code = generate(&operations);
//! assert!(ts_code.contains("export async function getUser("));
//! ```

pub mod codegen;
pub mod descriptor;
pub mod emitter;
pub mod error;
pub mod naming;
pub mod status;
pub mod ts;

#[cfg(test)]
mod test_utils;

pub use descriptor::{
    BodyParam, MediaTypeDef, Operation, Param, ResponseDef, Verb, load_operations,
    load_operations_from_path,
};
pub use emitter::{OperationCode, generate, generate_operation, generate_with};
pub use error::DescriptorError;
pub use naming::OperationNames;
pub use status::{HttpStatusPhrases, StatusPhrases};
