//! Go front end: builds a [`SourceFile`] from Go source with tree-sitter-go.
//!
//! This is the only module that touches tree-sitter. Everything it produces
//! is owned data, so the tree-sitter tree is dropped before `parse` returns.

use thiserror::Error;
use tree_sitter::{Node as TsNode, Parser};

use super::{
    CallExpr, Comment, CommentGroup, Field, FieldList, FuncDecl, Node, SourceFile, Span, TypeExpr,
};

/// Reasons a source text could not be turned into a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("failed to load Go grammar: {0}")]
    Language(String),
    #[error("parser produced no tree")]
    NoTree,
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
    #[error("missing package clause")]
    MissingPackage,
}

/// Parse Go source text.
///
/// Any syntax error rejects the whole file; partial trees are never returned.
pub fn parse(source: &str) -> Result<SourceFile, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ParseError::Language(format!("{e:?}")))?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column) = first_error_location(root).unwrap_or((0, 0));
        return Err(ParseError::Syntax { line: line + 1, column: column + 1 });
    }

    let builder = Builder { source };
    let package = builder.package_name(root).ok_or(ParseError::MissingPackage)?;

    let mut cursor = root.walk();
    let nodes = root.children(&mut cursor).filter_map(|child| builder.node(child)).collect();

    Ok(SourceFile { package, nodes })
}

fn first_error_location(node: TsNode) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let point = node.start_position();
        return Some((point.row, point.column));
    }
    let mut cursor = node.walk();
    let children: Vec<TsNode> = node.children(&mut cursor).collect();
    children.into_iter().filter(|c| c.has_error()).find_map(first_error_location)
}

fn span_of(node: TsNode) -> Span {
    Span::from_byte_range(node.start_byte(), node.end_byte())
}

struct Builder<'s> {
    source: &'s str,
}

impl<'s> Builder<'s> {
    fn text(&self, node: TsNode) -> &'s str {
        self.source.get(node.start_byte()..node.end_byte()).unwrap_or_default()
    }

    fn package_name(&self, root: TsNode) -> Option<String> {
        let mut cursor = root.walk();
        let clause = root.children(&mut cursor).find(|c| c.kind() == "package_clause")?;
        let mut inner = clause.walk();
        let ident = clause.named_children(&mut inner).find(|c| c.kind() == "package_identifier")?;
        Some(self.text(ident).to_string())
    }

    /// Convert one tree-sitter node. Subtrees holding neither declarations
    /// nor calls are dropped.
    fn node(&self, ts: TsNode) -> Option<Node> {
        match ts.kind() {
            "function_declaration" | "method_declaration" => self.func_decl(ts).map(Node::Func),
            // `[]byte(s)` and `map[K]V(x)` parse as conversions, not calls.
            "call_expression" | "type_conversion_expression" => {
                Some(Node::Call(CallExpr { span: span_of(ts), children: self.children(ts) }))
            }
            "comment" => None,
            kind => {
                let children = self.children(ts);
                if children.is_empty() {
                    None
                } else {
                    Some(Node::Group { kind: kind.to_string(), span: span_of(ts), children })
                }
            }
        }
    }

    fn children(&self, ts: TsNode) -> Vec<Node> {
        let mut cursor = ts.walk();
        let kids: Vec<TsNode> = ts.children(&mut cursor).collect();
        kids.into_iter().filter_map(|child| self.node(child)).collect()
    }

    fn func_decl(&self, ts: TsNode) -> Option<FuncDecl> {
        let name = self.text(ts.child_by_field_name("name")?).to_string();
        if name.is_empty() {
            return None;
        }

        let recv = ts.child_by_field_name("receiver").map(|list| self.field_list(list));
        // An empty `()` is stored as absent, so `func main()` renders no
        // `##Parameters` line. Present-but-empty lists never come out of a parse.
        let params = ts
            .child_by_field_name("parameters")
            .map(|list| self.field_list(list))
            .filter(|list| !list.is_empty());
        let results = ts.child_by_field_name("result").map(|result| {
            if result.kind() == "parameter_list" {
                self.field_list(result)
            } else {
                FieldList::new(vec![Field::anonymous(self.type_expr(result))])
            }
        });

        Some(FuncDecl {
            name,
            doc: self.doc_comment(ts),
            recv,
            params,
            results,
            span: span_of(ts),
            children: self.children(ts),
        })
    }

    fn field_list(&self, list: TsNode) -> FieldList {
        let mut cursor = list.walk();
        let fields = list
            .named_children(&mut cursor)
            .filter_map(|decl| match decl.kind() {
                "parameter_declaration" => Some(self.field(decl, None)),
                "variadic_parameter_declaration" => Some(self.field(decl, Some("variadic"))),
                _ => None,
            })
            .collect();
        FieldList::new(fields)
    }

    fn field(&self, decl: TsNode, override_kind: Option<&str>) -> Field {
        let mut cursor = decl.walk();
        let names: Vec<String> = decl
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.text(n).to_string())
            .collect();
        let ty = match (override_kind, decl.child_by_field_name("type")) {
            (Some(kind), _) => TypeExpr::unsupported(kind),
            (None, Some(ty)) => self.type_expr(ty),
            (None, None) => TypeExpr::unsupported(decl.kind()),
        };
        Field { names, ty }
    }

    fn type_expr(&self, ts: TsNode) -> TypeExpr {
        match ts.kind() {
            "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
                TypeExpr::ident(self.text(ts))
            }
            "pointer_type" => match ts.named_child(0) {
                Some(inner) => TypeExpr::pointer(self.type_expr(inner)),
                None => TypeExpr::unsupported("pointer_type"),
            },
            "slice_type" => match ts.child_by_field_name("element") {
                Some(elem) => TypeExpr::slice(self.type_expr(elem)),
                None => TypeExpr::unsupported("slice_type"),
            },
            "array_type" => {
                match (ts.child_by_field_name("length"), ts.child_by_field_name("element")) {
                    (Some(len), Some(elem)) => {
                        TypeExpr::array(self.type_expr(len), self.type_expr(elem))
                    }
                    _ => TypeExpr::unsupported("array_type"),
                }
            }
            "map_type" => match (ts.child_by_field_name("key"), ts.child_by_field_name("value")) {
                (Some(key), Some(value)) => {
                    TypeExpr::map(self.type_expr(key), self.type_expr(value))
                }
                _ => TypeExpr::unsupported("map_type"),
            },
            "qualified_type" => {
                match (ts.child_by_field_name("package"), ts.child_by_field_name("name")) {
                    (Some(owner), Some(member)) => {
                        TypeExpr::qualified(self.type_expr(owner), self.type_expr(member))
                    }
                    _ => TypeExpr::unsupported("qualified_type"),
                }
            }
            "selector_expression" => {
                match (ts.child_by_field_name("operand"), ts.child_by_field_name("field")) {
                    (Some(owner), Some(member)) => {
                        TypeExpr::qualified(self.type_expr(owner), self.type_expr(member))
                    }
                    _ => TypeExpr::unsupported("selector_expression"),
                }
            }
            "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
            | "interpreted_string_literal" | "raw_string_literal" => {
                TypeExpr::BasicLit(self.text(ts).to_string())
            }
            other => TypeExpr::unsupported(other),
        }
    }

    /// The comment group ending on the line directly above the declaration.
    ///
    /// Comments are grouped while separated by at most one line break. A
    /// comment sharing a line with the preceding code belongs to that code
    /// and ends the group.
    fn doc_comment(&self, decl: TsNode) -> Option<CommentGroup> {
        let mut collected: Vec<TsNode> = Vec::new();
        let mut next_row = decl.start_position().row;
        let mut current = decl.prev_named_sibling();

        while let Some(prev) = current {
            if prev.kind() != "comment" {
                break;
            }
            let end_row = prev.end_position().row;
            let adjacent = if collected.is_empty() {
                end_row + 1 == next_row
            } else {
                end_row + 1 >= next_row
            };
            if !adjacent {
                break;
            }
            collected.push(prev);
            next_row = prev.start_position().row;
            current = prev.prev_named_sibling();
        }

        // Same-line comments after code all belong to that code.
        if let Some(owner) = current.filter(|p| p.kind() != "comment") {
            let owner_row = owner.end_position().row;
            collected.retain(|c| c.start_position().row != owner_row);
        }

        if collected.is_empty() {
            return None;
        }

        let list = collected
            .into_iter()
            .rev()
            .map(|c| Comment {
                text: self.text(c).trim_end_matches('\r').to_string(),
                span: span_of(c),
            })
            .collect();
        Some(CommentGroup { list })
    }
}
