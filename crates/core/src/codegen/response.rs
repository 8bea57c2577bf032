//! Result union generation.
//!
//! Every declared status code becomes its own variant interface carrying a
//! literal `status`, the response `headers` and, when a body is declared, a
//! typed `data`. The result type is the union of all variants.

use tracing::warn;

use crate::descriptor::{Operation, ResponseDef};
use crate::naming::OperationNames;
use crate::status::StatusPhrases;
use crate::ts::{TsField, format_declaration, object_body};

use super::{is_json, is_text, type_or_any};

/// Status literal used for the `"default"` response.
pub const DEFAULT_STATUS: &str = "500";

/// Pick the body type of one response.
///
/// JSON wins, then any text media type, then whatever was declared first.
/// Returns `None` when the response declares no body at all.
pub fn resolve_body_type(response: &ResponseDef) -> Option<&str> {
    let media = &response.media_types;
    media
        .iter()
        .find(|m| is_json(&m.media_type))
        .or_else(|| media.iter().find(|m| is_text(&m.media_type)))
        .or_else(|| media.first())
        .map(|m| type_or_any(&m.ty))
}

/// Type of the `status` field: the numeric literal, `500` for `"default"`,
/// or `number` when the code is not numeric.
pub fn status_type(response: &ResponseDef) -> &str {
    if response.is_default() {
        DEFAULT_STATUS
    } else if !response.code.is_empty() && response.code.chars().all(|c| c.is_ascii_digit()) {
        &response.code
    } else {
        "number"
    }
}

/// Generate the result union followed by one declaration per variant.
pub fn codegen_result_type(
    op: &Operation,
    names: &OperationNames,
    phrases: &dyn StatusPhrases,
) -> String {
    if op.responses.is_empty() {
        warn!(path = %op.path, "Operation declares no responses.");
        return format_declaration(&names.result_type, "never");
    }

    let variants: Vec<(String, String)> = op
        .responses
        .iter()
        .map(|response| {
            let name = names.variant_type(response, phrases);
            let body = variant_body(response);
            (name, body)
        })
        .collect();

    let union: String = variants
        .iter()
        .map(|(name, _)| format!("| {name}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut blocks = vec![format_declaration(&names.result_type, &union)];
    blocks.extend(
        variants
            .iter()
            .map(|(name, body)| format_declaration(name, body)),
    );
    blocks.join("\n\n")
}

fn variant_body(response: &ResponseDef) -> String {
    let mut fields = vec![
        TsField::new("status", status_type(response), true).format(),
        TsField::new("headers", "Headers", true).format(),
    ];
    if let Some(ty) = resolve_body_type(response) {
        fields.push(TsField::new("data", ty, true).format());
    }
    object_body(&fields)
}
