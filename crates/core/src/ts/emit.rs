//! TypeScript code emission via the Emit trait.
//!
//! Each AST type implements `Emit`, so the request builder only assembles
//! nodes and never concatenates code by hand.

use std::fmt::Write as _;

use super::types::{
    BinOp, ObjectEntry, TemplatePart, TsExpr, TsFunction, TsLiteral, TsParam, TsStmt, TsType,
    VarKind,
};
use super::utils::{escape_js_string, quote_if_needed};

/// Trait for emitting TypeScript code from AST nodes.
pub trait Emit {
    /// Convert the AST node to its TypeScript string representation.
    fn emit(&self) -> String;
}

// =============================================================================
// Types
// =============================================================================

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            Self::Ref(name) => name.clone(),
            Self::Promise(inner) => format!("Promise<{}>", inner.emit()),
            Self::Any => "any".to_string(),
        }
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            Self::String(s) => format!("\"{}\"", escape_js_string(s)),
        }
    }
}

// =============================================================================
// Expressions
// =============================================================================

impl Emit for BinOp {
    fn emit(&self) -> String {
        match self {
            Self::NullishCoalesce => "??".to_string(),
        }
    }
}

impl Emit for ObjectEntry {
    fn emit(&self) -> String {
        match self {
            Self::Prop(key, value) => format!("{}: {}", quote_if_needed(key), value.emit()),
            Self::Shorthand(key) => key.clone(),
            Self::Spread(expr) => format!("...{}", expr.emit()),
        }
    }
}

impl Emit for TsExpr {
    fn emit(&self) -> String {
        match self {
            Self::Ident(name) => name.clone(),
            Self::Literal(lit) => lit.emit(),
            Self::Call { callee, args } => {
                let args_str = args.iter().map(Emit::emit).collect::<Vec<_>>().join(", ");
                format!("{}({args_str})", callee.emit())
            }
            Self::Object(entries) => {
                if entries.is_empty() {
                    "{}".to_string()
                } else {
                    let parts: Vec<_> = entries.iter().map(Emit::emit).collect();
                    format!("{{ {} }}", parts.join(", "))
                }
            }
            Self::Member { object, prop } => {
                format!("{}.{prop}", object.emit())
            }
            Self::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => s.clone(),
                        TemplatePart::Dynamic(e) => format!("${{{}}}", e.emit()),
                    })
                    .collect();
                format!("`{content}`")
            }
            Self::Await(expr) => {
                format!("await {}", expr.emit())
            }
            Self::BinOp { left, op, right } => {
                format!("{} {} {}", left.emit(), op.emit(), right.emit())
            }
            Self::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                format!(
                    "{} ? {} : {}",
                    cond.emit(),
                    then_expr.emit(),
                    else_expr.emit()
                )
            }
            Self::Cast { expr, ty } => {
                format!("{} as {}", expr.emit(), ty.emit())
            }
            Self::Raw(code) => code.clone(),
        }
    }
}

impl Emit for TsParam {
    fn emit(&self) -> String {
        let mut out = format!("{}: {}", self.name, self.ty.emit());
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(&default.emit());
        }
        out
    }
}

// =============================================================================
// Statements
// =============================================================================

impl Emit for VarKind {
    fn emit(&self) -> String {
        match self {
            Self::Const => "const".to_string(),
            Self::Let => "let".to_string(),
        }
    }
}

impl Emit for TsStmt {
    fn emit(&self) -> String {
        self.emit_indented(1)
    }
}

impl TsStmt {
    /// Emit with specified indentation level (2 spaces per level)
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        match self {
            Self::VarDecl {
                kind,
                name,
                ty,
                init,
            } => {
                let ty_str = ty
                    .as_ref()
                    .map(|t| format!(": {}", t.emit()))
                    .unwrap_or_default();
                let init_str = init
                    .as_ref()
                    .map(|e| format!(" = {}", e.emit()))
                    .unwrap_or_default();
                format!("{prefix}{} {name}{ty_str}{init_str};\n", kind.emit())
            }
            Self::Assign { name, value } => {
                format!("{prefix}{name} = {};\n", value.emit())
            }
            Self::Return(expr) => format!("{prefix}return {};\n", expr.emit()),
            Self::If {
                cond,
                then_body,
                else_body,
            } => {
                let mut output = format!("{prefix}if ({}) {{\n", cond.emit());
                for stmt in then_body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                let _ = writeln!(output, "{prefix}}} else {{");
                for stmt in else_body {
                    output.push_str(&stmt.emit_indented(indent + 1));
                }
                let _ = writeln!(output, "{prefix}}}");
                output
            }
        }
    }
}

// =============================================================================
// Functions
// =============================================================================

impl Emit for TsFunction {
    fn emit(&self) -> String {
        let params_str = self
            .params
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");

        let mut output = format!(
            "export async function {}({params_str}): {} {{\n",
            self.name,
            self.return_type.emit()
        );
        for stmt in &self.body {
            output.push_str(&stmt.emit_indented(1));
        }
        output.push_str("}\n");
        output
    }
}

// =============================================================================
// Tests
// =============================================================================
