//! Request function generation.
//!
//! Builds the TypeScript AST of the async function performing one fetch call,
//! then emits it. The shape of the function body is decided from the
//! descriptor once:
//! - URL: server + path template, with an optional query-string fragment
//! - init: method, headers, body, abort signal
//! - parsing: one of [`ResponseParsing`]

use crate::descriptor::{BodyParam, Operation};
use crate::naming::OperationNames;
use crate::ts::Emit;
use crate::ts::types::{
    BinOp, ObjectEntry, TemplatePart, TsExpr, TsFunction, TsParam, TsStmt, TsType, VarKind,
};
use crate::ts::utils::{escape_template, format_param_access};

use super::is_json;
use super::preamble::REQUEST_OPTIONS;

/// Serializes `params.query` at call time. Undefined values are skipped and
/// arrays repeat their key.
const QUERY_SEARCH_PARAMS: &str = "new URLSearchParams(Object.entries(params.query ?? {}).flatMap(([key, value]) => value === undefined ? [] : Array.isArray(value) ? value.map((item) => [key, String(item)]) : [[key, String(value)]]))";

/// How a response body is read, decided from every media type of every
/// response of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseParsing {
    /// Every media type is JSON: `response.json()`.
    Json,
    /// No media type is JSON: `response.text()`.
    Text,
    /// Both kinds: branch on the `content-type` header.
    Mixed,
    /// No media types at all: no parse step and no `data`.
    NoContent,
}

impl ResponseParsing {
    /// Classify from the media types of every response of an operation.
    pub fn classify<'a>(media_types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut json = false;
        let mut other = false;
        for media_type in media_types {
            if is_json(media_type) {
                json = true;
            } else {
                other = true;
            }
        }
        match (json, other) {
            (true, false) => Self::Json,
            (false, true) => Self::Text,
            (true, true) => Self::Mixed,
            (false, false) => Self::NoContent,
        }
    }

    /// Classify the responses declared by `op`.
    pub fn for_operation(op: &Operation) -> Self {
        Self::classify(op.response_media_types())
    }

    fn has_data(self) -> bool {
        self != Self::NoContent
    }
}

/// Generate the request function for an operation.
pub fn codegen_request_function(op: &Operation, names: &OperationNames) -> String {
    build_request_function(op, names).emit()
}

fn build_request_function(op: &Operation, names: &OperationNames) -> TsFunction {
    let parsing = ResponseParsing::for_operation(op);
    let has_query = !op.query_params.is_empty();

    let mut body = Vec::new();

    if has_query {
        body.extend(query_statements());
    }

    let fetch = TsExpr::ident("fetch")
        .call(vec![
            TsExpr::Template(url_template(&op.server, &op.path, has_query)),
            request_init(op),
        ])
        .awaited();
    body.push(TsStmt::constant("response", fetch));

    body.extend(parse_statements(parsing));

    let mut result = vec![
        ObjectEntry::Prop("status".into(), response().member("status")),
        ObjectEntry::Prop("headers".into(), response().member("headers")),
    ];
    if parsing.has_data() {
        result.push(ObjectEntry::Shorthand("data".into()));
    }
    body.push(TsStmt::Return(TsExpr::Cast {
        expr: Box::new(TsExpr::Object(result)),
        ty: TsType::Ref(names.result_type.clone()),
    }));

    TsFunction {
        name: names.function.clone(),
        params: vec![
            TsParam {
                name: "params".into(),
                ty: TsType::Ref(names.params_type.clone()),
                default: None,
            },
            TsParam {
                name: "options".into(),
                ty: TsType::Ref(REQUEST_OPTIONS.into()),
                default: Some(TsExpr::Object(vec![])),
            },
        ],
        return_type: TsType::Promise(Box::new(TsType::Ref(names.result_type.clone()))),
        body,
    }
}

fn params() -> TsExpr {
    TsExpr::ident("params")
}

fn response() -> TsExpr {
    TsExpr::ident("response")
}

/// Serialize `params.query` into `search`, then derive the `query` fragment.
///
/// The `?` is only added when serialization produced something, so an empty
/// or all-undefined `params.query` leaves the URL untouched.
fn query_statements() -> [TsStmt; 2] {
    let search = TsExpr::Raw(QUERY_SEARCH_PARAMS.into())
        .member("toString")
        .call(vec![]);
    let fragment = TsExpr::Ternary {
        cond: Box::new(TsExpr::ident("search")),
        then_expr: Box::new(TsExpr::Template(vec![
            TemplatePart::Static("?".into()),
            TemplatePart::Dynamic(TsExpr::ident("search")),
        ])),
        else_expr: Box::new(TsExpr::string("")),
    };
    [
        TsStmt::constant("search", search),
        TsStmt::constant("query", fragment),
    ]
}

/// Server base + path, with every `{name}` placeholder replaced by the
/// matching `params` field.
fn url_template(server: &str, path: &str, has_query: bool) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut text = escape_template(server);
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        text.push_str(&escape_template(&rest[..start]));
        if !text.is_empty() {
            parts.push(TemplatePart::Static(std::mem::take(&mut text)));
        }
        let name = &rest[start + 1..start + len];
        parts.push(TemplatePart::Dynamic(TsExpr::Raw(format_param_access(
            "params", name,
        ))));
        rest = &rest[start + len + 1..];
    }

    text.push_str(&escape_template(rest));
    if !text.is_empty() {
        parts.push(TemplatePart::Static(text));
    }
    if has_query {
        parts.push(TemplatePart::Dynamic(TsExpr::ident("query")));
    }
    parts
}

/// Content type sent for a body. `multipart/form-data` is left to the
/// runtime, which adds the boundary.
fn content_type(body: &BodyParam) -> Option<&str> {
    let media_type = body.media_type.trim();
    if media_type.is_empty() || media_type.starts_with("multipart/form-data") {
        None
    } else {
        Some(media_type)
    }
}

/// The `RequestInit` object literal passed to `fetch`.
fn request_init(op: &Operation) -> TsExpr {
    let mut init = vec![ObjectEntry::Prop(
        "method".into(),
        TsExpr::string(op.verb.as_method()),
    )];

    let mut headers = Vec::new();
    if let Some(media_type) = op.body_param.as_ref().and_then(content_type) {
        headers.push(ObjectEntry::Prop(
            "Content-Type".into(),
            TsExpr::string(media_type),
        ));
    }
    if !op.header_params.is_empty() {
        headers.push(ObjectEntry::Spread(params().member("headers")));
    }
    if !headers.is_empty() {
        init.push(ObjectEntry::Prop("headers".into(), TsExpr::Object(headers)));
    }

    if let Some(body) = &op.body_param {
        let data = params().member("data");
        let value = if is_json(&body.media_type) {
            TsExpr::ident("JSON").member("stringify").call(vec![data])
        } else {
            TsExpr::Cast {
                expr: Box::new(data),
                ty: TsType::Ref("BodyInit".into()),
            }
        };
        init.push(ObjectEntry::Prop("body".into(), value));
    }

    init.push(ObjectEntry::Prop(
        "signal".into(),
        TsExpr::ident("options").member("signal"),
    ));

    TsExpr::Object(init)
}

fn read_body(method: &str) -> TsExpr {
    response().member(method).call(vec![]).awaited()
}

fn parse_statements(parsing: ResponseParsing) -> Vec<TsStmt> {
    match parsing {
        ResponseParsing::Json => vec![TsStmt::constant("data", read_body("json"))],
        ResponseParsing::Text => vec![TsStmt::constant("data", read_body("text"))],
        ResponseParsing::Mixed => {
            let header = response()
                .member("headers")
                .member("get")
                .call(vec![TsExpr::string("content-type")]);
            vec![
                TsStmt::constant(
                    "contentType",
                    TsExpr::BinOp {
                        left: Box::new(header),
                        op: BinOp::NullishCoalesce,
                        right: Box::new(TsExpr::string("")),
                    },
                ),
                TsStmt::VarDecl {
                    kind: VarKind::Let,
                    name: "data".into(),
                    ty: Some(TsType::Any),
                    init: None,
                },
                TsStmt::If {
                    cond: TsExpr::ident("contentType")
                        .member("includes")
                        .call(vec![TsExpr::string("application/json")]),
                    then_body: vec![TsStmt::Assign {
                        name: "data".into(),
                        value: read_body("json"),
                    }],
                    else_body: vec![TsStmt::Assign {
                        name: "data".into(),
                        value: read_body("text"),
                    }],
                },
            ]
        }
        ResponseParsing::NoContent => Vec::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::literal_string_with_formatting_args)]
mod tests {
    use super::*;
    use crate::descriptor::Verb;
    use crate::test_utils::{make_body, make_operation, make_param, make_response};

    fn generate(op: &Operation) -> String {
        codegen_request_function(op, &OperationNames::new(&op.path, op.verb))
    }

    #[test]
    fn test_classify_parsing_modes() {
        assert_eq!(
            ResponseParsing::classify(["application/json", "application/json; charset=utf-8"]),
            ResponseParsing::Json
        );
        assert_eq!(
            ResponseParsing::classify(["text/plain", "image/png"]),
            ResponseParsing::Text
        );
        assert_eq!(
            ResponseParsing::classify(["application/json", "text/plain"]),
            ResponseParsing::Mixed
        );
        assert_eq!(
            ResponseParsing::classify(std::iter::empty()),
            ResponseParsing::NoContent
        );
    }

    #[test]
    fn test_simple_get() {
        let mut op = make_operation("/users/{id}", Verb::Get);
        op.positional_params = vec![make_param("id", "string", true)];
        op.responses = vec![make_response("200", &[("application/json", "User")])];

        let expected = "\
export async function getUser(params: GetUserParams, options: RequestOptions = {}): Promise<GetUserResult> {
  const response = await fetch(`https://api.example.com/users/${params.id}`, { method: \"GET\", signal: options.signal });
  const data = await response.json();
  return { status: response.status, headers: response.headers, data } as GetUserResult;
}
";
        assert_eq!(generate(&op), expected);
    }

    #[test]
    fn test_json_body_and_headers() {
        let mut op = make_operation("/users", Verb::Post);
        op.body_param = Some(make_body("NewUser", "application/json"));
        op.header_params = vec![make_param("x-trace-id", "string", false)];
        op.responses = vec![make_response("201", &[("application/json", "User")])];

        let out = generate(&op);
        assert!(out.contains(
            "{ method: \"POST\", headers: { \"Content-Type\": \"application/json\", ...params.headers }, body: JSON.stringify(params.data), signal: options.signal }"
        ));
    }

    #[test]
    fn test_non_json_body_passes_through() {
        let mut op = make_operation("/notes/{id}", Verb::Put);
        op.positional_params = vec![make_param("id", "string", true)];
        op.body_param = Some(make_body("string", "text/plain"));
        op.responses = vec![make_response("204", &[])];

        let out = generate(&op);
        assert!(out.contains(
            "headers: { \"Content-Type\": \"text/plain\" }, body: params.data as BodyInit, signal: options.signal"
        ));
    }

    #[test]
    fn test_form_data_body_sets_no_content_type() {
        let mut op = make_operation("/uploads", Verb::Post);
        op.body_param = Some(make_body("FormData", "multipart/form-data"));
        op.responses = vec![make_response("201", &[])];

        let out = generate(&op);
        assert!(!out.contains("headers: {"));
        assert!(out.contains("body: params.data as BodyInit"));
    }

    #[test]
    fn test_no_headers_object_without_body_or_header_params() {
        let mut op = make_operation("/users/{id}", Verb::Delete);
        op.positional_params = vec![make_param("id", "string", true)];
        op.responses = vec![make_response("204", &[])];

        let out = generate(&op);
        assert!(out.contains("{ method: \"DELETE\", signal: options.signal }"));
    }

    #[test]
    fn test_header_params_without_body() {
        let mut op = make_operation("/me", Verb::Get);
        op.header_params = vec![make_param("authorization", "string", true)];
        op.responses = vec![make_response("200", &[("application/json", "User")])];

        let out = generate(&op);
        assert!(out.contains("headers: { ...params.headers }"));
    }

    #[test]
    fn test_query_fragment_is_appended() {
        let mut op = make_operation("/users", Verb::Get);
        op.query_params = vec![make_param("limit", "number", false)];
        op.responses = vec![make_response("200", &[("application/json", "User[]")])];

        let out = generate(&op);
        assert!(out.contains(
            "  const search = new URLSearchParams(Object.entries(params.query ?? {}).flatMap("
        ));
        assert!(out.contains("]])).toString();\n"));
        assert!(out.contains("  const query = search ? `?${search}` : \"\";\n"));
        assert!(out.contains("fetch(`https://api.example.com/users${query}`"));
    }

    #[test]
    fn test_question_mark_only_for_serialized_query() {
        let mut op = make_operation("/search", Verb::Get);
        op.query_params = vec![make_param("q", "string", false)];
        op.responses = vec![make_response("200", &[("application/json", "Hit[]")])];

        let out = generate(&op);
        // `{}` or all-undefined queries serialize to "", which must not yield a bare `?`
        assert!(!out.contains("params.query ? `"));
        let search_at = out.find("const search = ").unwrap();
        let query_at = out.find("const query = search ? ").unwrap();
        let fetch_at = out.find("const response = await fetch(").unwrap();
        assert!(search_at < query_at);
        assert!(query_at < fetch_at);
    }

    #[test]
    fn test_text_parsing() {
        let mut op = make_operation("/readme", Verb::Get);
        op.responses = vec![make_response("200", &[("text/markdown", "string")])];
        assert!(generate(&op).contains("  const data = await response.text();\n"));
    }

    #[test]
    fn test_mixed_parsing_branches_on_content_type() {
        let mut op = make_operation("/reports/{id}", Verb::Get);
        op.positional_params = vec![make_param("id", "string", true)];
        op.responses = vec![
            make_response("200", &[("application/json", "Report")]),
            make_response("default", &[("text/plain", "string")]),
        ];

        let expected_parse = "\
  const contentType = response.headers.get(\"content-type\") ?? \"\";
  let data: any;
  if (contentType.includes(\"application/json\")) {
    data = await response.json();
  } else {
    data = await response.text();
  }
";
        assert!(generate(&op).contains(expected_parse));
    }

    #[test]
    fn test_no_media_types_means_no_data() {
        let mut op = make_operation("/users/{id}", Verb::Delete);
        op.positional_params = vec![make_param("id", "string", true)];
        op.responses = vec![make_response("204", &[]), make_response("404", &[])];

        let out = generate(&op);
        assert!(!out.contains("response.json()"));
        assert!(!out.contains("response.text()"));
        assert!(out.contains(
            "return { status: response.status, headers: response.headers } as DeleteUserResult;"
        ));
    }

    #[test]
    fn test_url_template_placeholders() {
        let parts = url_template("https://x.io", "/a/{first}/b/{second-id}", false);
        let url = TsExpr::Template(parts).emit();
        assert_eq!(url, "`https://x.io/a/${params.first}/b/${params[\"second-id\"]}`");
    }

    #[test]
    fn test_url_template_escapes_static_text() {
        let url = TsExpr::Template(url_template("", "/odd`path", false)).emit();
        assert_eq!(url, "`/odd\\`path`");
    }

    #[test]
    fn test_url_template_unclosed_brace_is_static() {
        let url = TsExpr::Template(url_template("", "/a/{broken", false)).emit();
        assert_eq!(url, "`/a/{broken`");
    }

    #[test]
    fn test_reserved_base_name_is_escaped() {
        let mut op = make_operation("/", Verb::Delete);
        op.responses = vec![make_response("204", &[])];
        assert!(generate(&op).starts_with("export async function _delete(params: DeleteParams"));
    }
}
