//! Field and declaration formatting for generated types.
//!
//! Type bodies are assembled as text: fields render one statement line each,
//! and a finished body is handed to [`format_declaration`], which picks between
//! `interface` and `type` alias form.

/// One field of an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsField {
    /// Property key, already quoted if needed.
    pub name: String,
    /// Type expression.
    pub ty: String,
    /// Renders without the `?` optional marker.
    pub required: bool,
    /// Renders with a leading `readonly` modifier.
    pub readonly: bool,
}

impl TsField {
    /// A mutable field; set `readonly` afterwards when needed.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required,
            readonly: false,
        }
    }

    /// Render as `[readonly ]name[?]: type;`.
    pub fn format(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let opt = if self.required { "" } else { "?" };
        let Self { name, ty, .. } = self;
        format!("{readonly}{name}{opt}: {ty};")
    }
}

/// Form a declaration takes in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `type Name = Body;`
    Alias,
    /// `interface Name Body`
    Interface,
}

/// Decide how a body must be declared.
///
/// Object-shaped bodies become interfaces unless a `|` or `&` sits at brace
/// depth 0, because an interface cannot be a union or intersection.
pub fn declaration_kind(body: &str) -> DeclarationKind {
    if !body.trim_start().starts_with('{') {
        return DeclarationKind::Alias;
    }

    let mut depth: usize = 0;
    for c in body.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '|' | '&' if depth == 0 => return DeclarationKind::Alias,
            _ => {}
        }
    }
    DeclarationKind::Interface
}

/// Render an exported declaration of `name` with the given body.
pub fn format_declaration(name: &str, body: &str) -> String {
    match declaration_kind(body) {
        DeclarationKind::Alias => format!("export type {name} = {body};"),
        DeclarationKind::Interface => format!("export interface {name} {body}"),
    }
}

/// Render an object type body from field entries.
///
/// Each entry may span several lines (a doc comment or a nested object); every
/// line is indented one level inside the braces.
pub fn object_body(entries: &[String]) -> String {
    if entries.is_empty() {
        return "{}".to_string();
    }
    let mut out = String::from("{\n");
    for entry in entries {
        for line in entry.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push('}');
    out
}
