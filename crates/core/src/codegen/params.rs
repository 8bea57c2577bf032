//! Request parameter type generation.

use crate::descriptor::{Operation, Param};
use crate::naming::OperationNames;
use crate::ts::utils::{doc_comment, quote, quote_if_needed};
use crate::ts::{TsField, format_declaration, object_body};

use super::type_or_any;

/// Generate the params declaration (`GetUserParams`) for an operation.
///
/// Path parameters sit at the top level and are always required. The body
/// goes under `data`, query parameters under `query` and header parameters
/// under `headers`. Groups with no parameters are left out.
pub fn codegen_params_type(op: &Operation, names: &OperationNames) -> String {
    let mut entries = Vec::new();

    for param in &op.positional_params {
        let field = TsField::new(quote_if_needed(&param.name), type_or_any(&param.ty), true);
        entries.push(documented(param.description.as_deref(), &field));
    }

    if let Some(body) = &op.body_param {
        let field = TsField::new("data", type_or_any(&body.ty), body.required);
        entries.push(documented(body.description.as_deref(), &field));
    }

    if let Some(entry) = group_entry("query", &op.query_params, quote_if_needed) {
        entries.push(entry);
    }

    if let Some(entry) = group_entry("headers", &op.header_params, quote) {
        entries.push(entry);
    }

    format_declaration(&names.params_type, &object_body(&entries))
}

/// A nested-object field for a parameter group, required only if one of its
/// members is.
fn group_entry(name: &str, params: &[Param], key: impl Fn(&str) -> String) -> Option<String> {
    if params.is_empty() {
        return None;
    }

    let fields: Vec<String> = params
        .iter()
        .map(|param| {
            let field = TsField::new(key(&param.name), type_or_any(&param.ty), param.required);
            documented(param.description.as_deref(), &field)
        })
        .collect();
    let required = params.iter().any(|p| p.required);

    Some(TsField::new(name, object_body(&fields), required).format())
}

fn documented(description: Option<&str>, field: &TsField) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(text) => format!("{}\n{}", doc_comment(text), field.format()),
        None => field.format(),
    }
}
