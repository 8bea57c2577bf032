//! Supporting declarations emitted once per generated module.

use crate::ts::{TsField, format_declaration, object_body};

/// Name of the options shape taken by every request function.
pub const REQUEST_OPTIONS: &str = "RequestOptions";

/// The `RequestOptions` declaration: an optional cancellation signal.
pub fn codegen_preamble() -> String {
    let signal = TsField::new("signal", "AbortSignal", false).format();
    format_declaration(REQUEST_OPTIONS, &object_body(&[signal]))
}
