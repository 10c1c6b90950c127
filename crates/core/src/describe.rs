//! Rendering of a single function declaration.
//!
//! The block layout is fixed:
//!
//! ~~~text
//! // doc comment lines, verbatim
//! ## Name
//!
//! ## Receiver
//!
//! r *T
//!
//! ##Parameters a, b int
//! ##Return error
//! ## Function calls from other packages
//!
//! ```go
//!   fmt.Println(a)
//! ```
//! `###End of function with name Name  ###`
//! ~~~
//!
//! Call lines and the optional body are cut straight out of the source text
//! by byte range, so their spelling and spacing are preserved exactly.

use std::fmt::Write as _;

use crate::error::Diagnostic;
use crate::model::{ExtractOptions, FunctionRecord};
use crate::render::render_fields;
use crate::syntax::{FuncDecl, Span};

/// Per-file inputs shared by every declaration in that file.
#[derive(Debug, Clone, Copy)]
pub struct DeclContext<'a> {
    pub package: &'a str,
    pub is_test_file: bool,
    pub options: ExtractOptions,
}

/// Describe one declaration.
///
/// Returns the rendered block and the matching record; the record's
/// `documentation` is exactly the block.
pub fn describe(
    func: &FuncDecl,
    source: &str,
    ctx: &DeclContext<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> (String, FunctionRecord) {
    let mut out = String::new();

    if let Some(doc) = &func.doc {
        for comment in &doc.list {
            out.push_str(&comment.text);
            out.push('\n');
        }
    }

    let _ = write!(out, "## {}\n\n", func.name);

    if let Some(recv) = &func.recv {
        let _ = write!(out, "## Receiver\n\n{}\n\n", render_fields(recv, diagnostics));
    }
    if let Some(params) = &func.params {
        let _ = writeln!(out, "##Parameters {}", render_fields(params, diagnostics));
    }
    if let Some(results) = &func.results {
        let _ = writeln!(out, "##Return {}", render_fields(results, diagnostics));
    }

    write_calls(&mut out, func, source);

    if ctx.options.include_body {
        write_body(&mut out, func, source, ctx.options.duplicate_body);
    }

    let _ = write!(out, "`###End of function with name {}  ###`\n\n", func.name);

    let record = FunctionRecord {
        name: func.name.clone(),
        documentation: out.clone(),
        package: ctx.package.to_string(),
        is_test_function: ctx.is_test_file,
    };
    (out, record)
}

fn write_calls(out: &mut String, func: &FuncDecl, source: &str) {
    out.push_str("## Function calls from other packages\n\n");
    out.push_str("```go\n");
    for call in func.calls() {
        out.push_str("  ");
        out.push_str(source_text(call.span, source));
        out.push('\n');
    }
    out.push_str("```\n");
}

fn write_body(out: &mut String, func: &FuncDecl, source: &str, duplicate: bool) {
    let body = source_text(func.span, source);
    let _ = write!(out, "####Function Body of function {}\n\n", func.name);
    out.push_str("```go\n");
    out.push_str(body);
    out.push_str("```\n");
    if duplicate {
        out.push_str(body);
    }
}

/// Slice `span` out of the text the tree was parsed from.
fn source_text(span: Span, source: &str) -> &str {
    span.slice(source).unwrap_or_else(|| {
        tracing::warn!(start = span.start.0, end = span.end.0, "span outside source text");
        ""
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{CallExpr, Comment, CommentGroup, Field, FieldList, Node, Pos, TypeExpr};

    fn ctx(options: ExtractOptions) -> DeclContext<'static> {
        DeclContext { package: "demo", is_test_file: false, options }
    }

    fn bare(name: &str, span: Span) -> FuncDecl {
        FuncDecl {
            name: name.to_string(),
            doc: None,
            recv: None,
            params: None,
            results: None,
            span,
            children: Vec::new(),
        }
    }

    #[test]
    fn bare_declaration_has_header_calls_and_terminator_only() {
        let source = "func f() {}";
        let func = bare("f", Span::new(Pos(1), Pos(12)));
        let (block, record) =
            describe(&func, source, &ctx(ExtractOptions::default()), &mut Vec::new());
        assert_eq!(
            block,
            "## f\n\n## Function calls from other packages\n\n```go\n```\n\
             `###End of function with name f  ###`\n\n"
        );
        assert_eq!(record.documentation, block);
        assert_eq!(record.package, "demo");
        assert!(!record.is_test_function);
    }

    #[test]
    fn present_but_empty_lists_keep_their_labels() {
        let source = "func f() {}";
        let mut func = bare("f", Span::new(Pos(1), Pos(12)));
        func.recv = Some(FieldList::default());
        func.params = Some(FieldList::default());
        func.results = Some(FieldList::default());
        let (block, _) =
            describe(&func, source, &ctx(ExtractOptions::default()), &mut Vec::new());
        assert!(block.contains("## Receiver\n\n\n\n"));
        assert!(block.contains("##Parameters \n"));
        assert!(block.contains("##Return \n"));
    }

    #[test]
    fn doc_signature_and_calls_render_in_order() {
        let source = "func (s *S) Run(a, b int) error { return check( a ) }";
        let mut func = bare("Run", Span::new(Pos(1), Pos(54)));
        func.doc = Some(CommentGroup {
            list: vec![Comment { text: "// Run runs.".into(), span: Span::new(Pos(1), Pos(1)) }],
        });
        func.recv = Some(FieldList::new(vec![Field::new(
            ["s"],
            TypeExpr::pointer(TypeExpr::ident("S")),
        )]));
        func.params = Some(FieldList::new(vec![Field::new(["a", "b"], TypeExpr::ident("int"))]));
        func.results = Some(FieldList::new(vec![Field::anonymous(TypeExpr::ident("error"))]));
        func.children = vec![Node::Call(CallExpr {
            span: Span::new(Pos(42), Pos(52)),
            children: Vec::new(),
        })];

        let (block, _) =
            describe(&func, source, &ctx(ExtractOptions::default()), &mut Vec::new());
        let expected = "// Run runs.\n## Run\n\n## Receiver\n\ns *S\n\n##Parameters a, b int\n\
                        ##Return error\n## Function calls from other packages\n\n```go\n  \
                        check( a )\n```\n`###End of function with name Run  ###`\n\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn body_is_fenced_then_repeated_by_default() {
        let source = "func f() {}";
        let func = bare("f", Span::new(Pos(1), Pos(12)));
        let options = ExtractOptions { include_body: true, duplicate_body: true };
        let (block, _) = describe(&func, source, &ctx(options), &mut Vec::new());
        assert!(block.contains(
            "####Function Body of function f\n\n```go\nfunc f() {}```\nfunc f() {}`###End"
        ));
    }

    #[test]
    fn body_can_be_emitted_once() {
        let source = "func f() {}";
        let func = bare("f", Span::new(Pos(1), Pos(12)));
        let options = ExtractOptions { include_body: true, duplicate_body: false };
        let (block, _) = describe(&func, source, &ctx(options), &mut Vec::new());
        assert_eq!(block.matches("func f() {}").count(), 1);
    }
}
