//! Typed syntax tree consumed by the extraction core.
//!
//! The tree is intentionally small: it carries only what the describers need
//! (function declarations, call expressions, type expressions, doc comments)
//! plus byte positions into the source text the tree was built from.
//! Construction lives in [`go`]; everything else in the crate only reads.

pub mod go;

/// A 1-based byte offset into the original source text.
///
/// `Pos(1)` is the first byte. An end position points one past the last byte
/// of the node, so the text of `[start, end)` is `source[start - 1..end - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub usize);

impl Pos {
    /// Convert a 0-based byte offset into a position.
    pub fn from_byte_offset(offset: usize) -> Self {
        Pos(offset + 1)
    }

    /// The 0-based byte offset this position refers to, or `None` for the
    /// invalid position `Pos(0)`.
    pub fn byte_offset(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

/// Start/end positions of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Build a span from a 0-based, end-exclusive byte range.
    pub fn from_byte_range(start: usize, end: usize) -> Self {
        Self { start: Pos::from_byte_offset(start), end: Pos::from_byte_offset(end) }
    }

    /// Exact source text covered by this span.
    ///
    /// Returns `None` when the span does not describe a valid range of `source`
    /// (out of bounds, reversed, or not on a char boundary).
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        let start = self.start.byte_offset()?;
        let end = self.end.byte_offset()?;
        source.get(start..end)
    }
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Declared package name (`package foo`).
    pub package: String,
    /// Top-level nodes in source order.
    pub nodes: Vec<Node>,
}

impl SourceFile {
    /// Visit every node of the file in pre-order.
    pub fn inspect<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node),
    {
        for node in &self.nodes {
            node.inspect(visit);
        }
    }

    /// All function declarations, in traversal (source) order.
    pub fn func_decls(&self) -> Vec<&FuncDecl> {
        let mut out = Vec::new();
        self.inspect(&mut |node| {
            if let Node::Func(func) = node {
                out.push(func);
            }
        });
        out
    }
}

/// One node of the tree.
///
/// Nodes the core does not interpret are kept as `Group`s so that function
/// declarations and calls nested anywhere below them stay reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Func(FuncDecl),
    Call(CallExpr),
    Group { kind: String, span: Span, children: Vec<Node> },
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Func(func) => func.span,
            Node::Call(call) => call.span,
            Node::Group { span, .. } => *span,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Func(func) => &func.children,
            Node::Call(call) => &call.children,
            Node::Group { children, .. } => children,
        }
    }

    /// Pre-order traversal of this node and everything below it.
    pub fn inspect<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node),
    {
        visit(self);
        for child in self.children() {
            child.inspect(visit);
        }
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Attached doc comment, if any.
    pub doc: Option<CommentGroup>,
    pub recv: Option<FieldList>,
    pub params: Option<FieldList>,
    pub results: Option<FieldList>,
    /// From the `func` keyword to the end of the body.
    pub span: Span,
    /// Nodes inside the declaration (signature and body), in source order.
    pub children: Vec<Node>,
}

impl FuncDecl {
    /// Every call expression in this declaration's subtree, in pre-order.
    pub fn calls(&self) -> Vec<&CallExpr> {
        let mut out = Vec::new();
        for child in &self.children {
            child.inspect(&mut |node| {
                if let Node::Call(call) = node {
                    out.push(call);
                }
            });
        }
        out
    }
}

/// One call expression, including its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub span: Span,
    /// Nodes within the call (callee and arguments); nested calls live here.
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Raw comment text including its `//` or `/* */` markers.
    pub text: String,
    pub span: Span,
}

/// Adjacent comments forming one doc block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

/// Ordered (names, type) groups of a receiver, parameter, or result list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Zero or more names sharing one type, e.g. `a, b int`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn new<I, S>(names: I, ty: TypeExpr) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect(), ty }
    }

    /// An unnamed field holding only a type.
    pub fn anonymous(ty: TypeExpr) -> Self {
        Self { names: Vec::new(), ty }
    }
}

/// The closed set of type expressions the renderer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `name`
    Ident(String),
    /// `[N]T`
    Array { len: Box<TypeExpr>, elem: Box<TypeExpr> },
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// `owner.member`
    Qualified { owner: Box<TypeExpr>, member: Box<TypeExpr> },
    /// Literal text, as found in array lengths.
    BasicLit(String),
    /// Anything else; `kind` names the construct for diagnostics.
    Unsupported { kind: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }

    pub fn array(len: TypeExpr, elem: TypeExpr) -> Self {
        TypeExpr::Array { len: Box::new(len), elem: Box::new(elem) }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map { key: Box::new(key), value: Box::new(value) }
    }

    pub fn qualified(owner: TypeExpr, member: TypeExpr) -> Self {
        TypeExpr::Qualified { owner: Box::new(owner), member: Box::new(member) }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        TypeExpr::Unsupported { kind: kind.into() }
    }
}
