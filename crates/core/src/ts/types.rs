//! TypeScript AST used to build the request functions.
//!
//! Type expressions arrive from descriptors already resolved to text, so the
//! type side of the AST is thin. Expressions and statements cover exactly the
//! shapes a generated fetch call needs.

/// Type annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// Named type or already-resolved type expression: `GetUserParams`
    Ref(String),
    /// `Promise<T>`
    Promise(Box<TsType>),
    /// `any`
    Any,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsLiteral {
    /// Double-quoted string literal.
    String(String),
}

/// Object literal entry
#[derive(Debug, Clone)]
pub enum ObjectEntry {
    /// `key: value`
    Prop(String, TsExpr),
    /// `key`
    Shorthand(String),
    /// `...expr`
    Spread(TsExpr),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `??`
    NullishCoalesce,
}

/// TypeScript expression
#[derive(Debug, Clone)]
pub enum TsExpr {
    /// Identifier: foo
    Ident(String),
    /// Literal value: "bar"
    Literal(TsLiteral),
    /// Function call: foo(a, b)
    Call {
        /// Expression being called.
        callee: Box<TsExpr>,
        /// Arguments in order.
        args: Vec<TsExpr>,
    },
    /// Object literal: { a: 1, ...b }
    Object(Vec<ObjectEntry>),
    /// Member access: foo.bar
    Member {
        /// Receiver.
        object: Box<TsExpr>,
        /// Property name, emitted as-is.
        prop: String,
    },
    /// Template literal: `${foo}/bar`
    Template(Vec<TemplatePart>),
    /// Await expression: await fetch()
    Await(Box<TsExpr>),
    /// a ?? b
    BinOp {
        /// Left operand.
        left: Box<TsExpr>,
        /// Operator.
        op: BinOp,
        /// Right operand.
        right: Box<TsExpr>,
    },
    /// Ternary/conditional: cond ? a : b
    Ternary {
        /// Condition.
        cond: Box<TsExpr>,
        /// Value when the condition is truthy.
        then_expr: Box<TsExpr>,
        /// Value otherwise.
        else_expr: Box<TsExpr>,
    },
    /// Type cast: expr as Type
    Cast {
        /// Expression being cast.
        expr: Box<TsExpr>,
        /// Target type.
        ty: TsType,
    },
    /// Raw code that doesn't fit the AST
    Raw(String),
}

impl TsExpr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// String literal expression.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(TsLiteral::String(value.into()))
    }

    /// `self.prop`
    pub fn member(self, prop: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(self),
            prop: prop.into(),
        }
    }

    /// `self(args...)`
    pub fn call(self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(self),
            args,
        }
    }

    /// `await self`
    pub fn awaited(self) -> Self {
        Self::Await(Box::new(self))
    }
}

/// Function parameter
#[derive(Debug, Clone)]
pub struct TsParam {
    /// Parameter name.
    pub name: String,
    /// Type annotation.
    pub ty: TsType,
    /// Default value: `options: RequestOptions = {}`
    pub default: Option<TsExpr>,
}

/// Template literal part
#[derive(Debug, Clone)]
pub enum TemplatePart {
    /// Static string part
    Static(String),
    /// Dynamic expression part: ${expr}
    Dynamic(TsExpr),
}

/// Statement in a function body
#[derive(Debug, Clone)]
pub enum TsStmt {
    /// const/let declaration; `let` may omit the initializer
    VarDecl {
        /// `const` or `let`.
        kind: VarKind,
        /// Variable name.
        name: String,
        /// Optional type annotation.
        ty: Option<TsType>,
        /// Initializer, required for `const`.
        init: Option<TsExpr>,
    },
    /// Assignment: name = value
    Assign {
        /// Assigned variable.
        name: String,
        /// New value.
        value: TsExpr,
    },
    /// Return statement
    Return(TsExpr),
    /// If/else statement
    If {
        /// Condition.
        cond: TsExpr,
        /// Statements run when the condition is truthy.
        then_body: Vec<TsStmt>,
        /// Statements run otherwise.
        else_body: Vec<TsStmt>,
    },
}

impl TsStmt {
    /// `const name = init;`
    pub fn constant(name: impl Into<String>, init: TsExpr) -> Self {
        Self::VarDecl {
            kind: VarKind::Const,
            name: name.into(),
            ty: None,
            init: Some(init),
        }
    }
}

/// Variable declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// `const`
    Const,
    /// `let`
    Let,
}

/// Exported async function definition
#[derive(Debug, Clone)]
pub struct TsFunction {
    /// Function name.
    pub name: String,
    /// Parameters in order.
    pub params: Vec<TsParam>,
    /// Declared return type.
    pub return_type: TsType,
    /// Body statements.
    pub body: Vec<TsStmt>,
}
