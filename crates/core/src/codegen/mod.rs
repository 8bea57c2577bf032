//! Code generation from operation descriptors to TypeScript source.
//!
//! - `params`: the request parameter type
//! - `response`: the result union and its per-status variants
//! - `request`: the fetch function
//! - `preamble`: supporting declarations shared by every function

pub mod params;
pub mod preamble;
pub mod request;
pub mod response;

pub use params::codegen_params_type;
pub use preamble::codegen_preamble;
pub use request::{ResponseParsing, codegen_request_function};
pub use response::{codegen_result_type, resolve_body_type};

/// Whether a media type is parsed as JSON.
pub fn is_json(media_type: &str) -> bool {
    media_type.contains("application/json")
}

/// Whether a media type is textual.
pub fn is_text(media_type: &str) -> bool {
    media_type.contains("text")
}

/// Type expression, or `any` when the descriptor left it blank.
pub fn type_or_any(ty: &str) -> &str {
    if ty.trim().is_empty() { "any" } else { ty }
}
