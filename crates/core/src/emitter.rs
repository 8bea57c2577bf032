//! TypeScript module emitter for operation descriptors.
//!
//! The pipeline per operation is:
//! 1. Names: path + verb -> OperationNames (computed once)
//! 2. Params type: descriptor params -> `XParams`
//! 3. Result type: responses -> `XResult` union + variants
//! 4. Function: descriptor -> TypeScript AST -> String (via Emit trait)
//!
//! A run emits the preamble once, then each operation in input order.

use tracing::debug;

use crate::codegen::{
    codegen_params_type, codegen_preamble, codegen_request_function, codegen_result_type,
};
use crate::descriptor::Operation;
use crate::naming::OperationNames;
use crate::status::{HttpStatusPhrases, StatusPhrases};

/// Generated code for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationCode {
    /// Names shared by the three blocks.
    pub names: OperationNames,
    /// The `XParams` declaration.
    pub params_type: String,
    /// The `XResult` union followed by its variant declarations.
    pub result_type: String,
    /// The async request function.
    pub function: String,
}

impl OperationCode {
    /// Params type, result type and function, separated by blank lines.
    pub fn to_source(&self) -> String {
        [
            self.params_type.trim_end(),
            self.result_type.trim_end(),
            self.function.trim_end(),
        ]
        .join("\n\n")
    }
}

/// Generate the code for a single operation.
pub fn generate_operation(op: &Operation, phrases: &dyn StatusPhrases) -> OperationCode {
    let names = OperationNames::new(&op.path, op.verb);

    debug!(
        operation = %names.base,
        verb = op.verb.as_method(),
        path = %op.path,
        responses = op.responses.len(),
        "Generating operation."
    );

    let params_type = codegen_params_type(op, &names);
    let result_type = codegen_result_type(op, &names, phrases);
    let function = codegen_request_function(op, &names);
    OperationCode {
        names,
        params_type,
        result_type,
        function,
    }
}

/// Generate a TypeScript module for a set of operations using the standard
/// status phrase table.
pub fn generate(operations: &[Operation]) -> String {
    generate_with(operations, &HttpStatusPhrases)
}

/// Generate a TypeScript module with a custom status phrase lookup.
pub fn generate_with(operations: &[Operation], phrases: &dyn StatusPhrases) -> String {
    let mut blocks = vec![codegen_preamble()];
    blocks.extend(
        operations
            .iter()
            .map(|op| generate_operation(op, phrases).to_source()),
    );

    debug!(operations = operations.len(), "TypeScript module generated.");

    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::literal_string_with_formatting_args)]
mod tests {
    use super::*;
    use crate::descriptor::Verb;
    use crate::test_utils::{make_operation, make_param, make_response};

    #[test]
    fn test_operation_blocks_in_order() {
        let mut op = make_operation("/users/{id}", Verb::Get);
        op.positional_params = vec![make_param("id", "string", true)];
        op.responses = vec![make_response("200", &[("application/json", "User")])];

        let code = generate_operation(&op, &HttpStatusPhrases);
        let source = code.to_source();

        let params_at = source.find("export interface GetUserParams").unwrap();
        let result_at = source.find("export type GetUserResult").unwrap();
        let fn_at = source.find("export async function getUser(").unwrap();
        assert!(params_at < result_at);
        assert!(result_at < fn_at);
        assert!(!source.ends_with('\n'));
    }

    #[test]
    fn test_preamble_emitted_once() {
        let ops = vec![
            make_operation("/a", Verb::Get),
            make_operation("/b", Verb::Post),
        ];
        let output = generate(&ops);
        assert_eq!(output.matches("export interface RequestOptions").count(), 1);
        assert!(output.starts_with("export interface RequestOptions {"));
        assert!(output.ends_with("}\n"));
    }

    #[test]
    fn test_empty_run_is_preamble_only() {
        assert_eq!(
            generate(&[]),
            "export interface RequestOptions {\n  signal?: AbortSignal;\n}\n"
        );
    }

    #[test]
    fn test_custom_phrase_table() {
        struct Short;
        impl StatusPhrases for Short {
            fn phrase(&self, code: &str) -> Option<&str> {
                (code == "200").then_some("Success")
            }
        }

        let mut op = make_operation("/users", Verb::Get);
        op.responses = vec![make_response("200", &[("application/json", "User[]")])];
        let output = generate_with(&[op], &Short);
        assert!(output.contains("export type GetUsersResult = | GetUsersSuccessResult;"));
    }
}
