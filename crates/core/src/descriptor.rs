//! Operation descriptor structs for serde deserialization.
//!
//! A descriptor is the already-parsed form of one REST endpoint. The upstream
//! parser resolves every schema into a TypeScript type expression, so the
//! generator only ever sees strings like `"User"` or `"string[]"`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    /// Read a resource or collection.
    Get,
    /// Create a resource.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl Verb {
    /// Upper-case method literal used in the fetch call.
    pub fn as_method(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Keyword that prefixes the derived operation name.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "create",
            Self::Put => "replace",
            Self::Patch => "update",
            Self::Delete => "delete",
        }
    }
}

/// A single parameter (path, query, or header).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Name as it appears in the path template, query string or header.
    pub name: String,
    /// Resolved TypeScript type expression.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether callers must supply a value.
    #[serde(default)]
    pub required: bool,
    /// Free-form text rendered as a doc comment on the generated field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The request body parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyParam {
    /// Name from the source document. Generated code always uses `data`.
    #[serde(default)]
    pub name: String,
    /// Resolved TypeScript type expression.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether callers must supply a body.
    #[serde(default)]
    pub required: bool,
    /// Free-form text rendered as a doc comment on `data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Request content type, e.g. `application/json`.
    #[serde(default = "default_body_media_type")]
    pub media_type: String,
}

fn default_body_media_type() -> String {
    "application/json".to_string()
}

/// One declared content type of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTypeDef {
    /// Content type, e.g. `application/json`.
    pub media_type: String,
    /// Resolved TypeScript type of the body. Blank means `any`.
    #[serde(rename = "type", default)]
    pub ty: String,
}

/// Response definition for one status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDef {
    /// Numeric status code string, or `"default"`.
    pub code: String,
    /// Declared content types, in declaration order. Empty means no body.
    #[serde(default)]
    pub media_types: Vec<MediaTypeDef>,
}

impl ResponseDef {
    /// Whether this is the `"default"` fallback response.
    pub fn is_default(&self) -> bool {
        self.code == "default"
    }
}

/// A normalized REST operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Path template with `{name}` placeholders.
    pub path: String,
    /// HTTP verb.
    pub verb: Verb,
    /// Base URL prepended to the path.
    #[serde(default)]
    pub server: String,
    /// Path parameters, one per placeholder.
    #[serde(default)]
    pub positional_params: Vec<Param>,
    /// Query string parameters.
    #[serde(default)]
    pub query_params: Vec<Param>,
    /// Request header parameters.
    #[serde(default)]
    pub header_params: Vec<Param>,
    /// Request body, if the operation takes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_param: Option<BodyParam>,
    /// Declared responses, in declaration order.
    #[serde(default)]
    pub responses: Vec<ResponseDef>,
}

impl Operation {
    /// Every media type declared by any response, in declaration order.
    pub fn response_media_types(&self) -> impl Iterator<Item = &str> {
        self.responses
            .iter()
            .flat_map(|r| r.media_types.iter())
            .map(|m| m.media_type.as_str())
    }
}

/// Parse a JSON array of operation descriptors.
pub fn load_operations(json: &str) -> Result<Vec<Operation>, DescriptorError> {
    serde_json::from_str(json).map_err(DescriptorError::InvalidJson)
}

/// Read and parse a JSON file of operation descriptors.
pub fn load_operations_from_path(path: &Path) -> Result<Vec<Operation>, DescriptorError> {
    let json = fs::read_to_string(path).map_err(|source| DescriptorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_operations(&json)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_operation() {
        let json = r#"[{
            "path": "/users/{id}",
            "verb": "get",
            "server": "https://api.example.com",
            "positionalParams": [{ "name": "id", "type": "string", "required": true }],
            "responses": [{ "code": "200", "mediaTypes": [{ "mediaType": "application/json", "type": "User" }] }]
        }]"#;

        let ops = load_operations(json).unwrap();
        assert_eq!(ops.len(), 1);
        let op = &ops[0];
        assert_eq!(op.verb, Verb::Get);
        assert_eq!(op.positional_params[0].ty, "string");
        assert!(op.query_params.is_empty());
        assert!(op.header_params.is_empty());
        assert!(op.body_param.is_none());
        assert_eq!(op.responses[0].media_types[0].ty, "User");
    }

    #[test]
    fn test_body_param_defaults_to_json() {
        let json = r#"[{
            "path": "/users",
            "verb": "post",
            "bodyParam": { "name": "body", "type": "NewUser", "required": true },
            "responses": [{ "code": "201" }]
        }]"#;

        let ops = load_operations(json).unwrap();
        let body = ops[0].body_param.as_ref().unwrap();
        assert_eq!(body.media_type, "application/json");
        assert!(ops[0].responses[0].media_types.is_empty());
        assert_eq!(ops[0].server, "");
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        let json = r#"[{ "path": "/x", "verb": "head", "responses": [] }]"#;
        let err = load_operations(json).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidJson(_)));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = load_operations_from_path(&missing).unwrap_err();
        assert!(matches!(err, DescriptorError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ops.json");
        fs::write(
            &file,
            r#"[{ "path": "/ping", "verb": "delete", "responses": [{ "code": "default" }] }]"#,
        )
        .unwrap();
        let ops = load_operations_from_path(&file).unwrap();
        assert_eq!(ops[0].verb, Verb::Delete);
        assert!(ops[0].responses[0].is_default());
    }

    #[test]
    fn test_response_media_types_in_order() {
        let json = r#"[{
            "path": "/a",
            "verb": "get",
            "responses": [
                { "code": "200", "mediaTypes": [{ "mediaType": "application/json", "type": "A" }] },
                { "code": "404", "mediaTypes": [{ "mediaType": "text/plain", "type": "string" }] }
            ]
        }]"#;
        let ops = load_operations(json).unwrap();
        let media: Vec<_> = ops[0].response_media_types().collect();
        assert_eq!(media, vec!["application/json", "text/plain"]);
    }
}
