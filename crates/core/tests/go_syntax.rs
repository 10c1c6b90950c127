use fncat_core::syntax::go::{parse, ParseError};
use fncat_core::syntax::{Field, FieldList, TypeExpr};

#[test]
fn parses_package_and_declarations_in_source_order() {
    let source = "package shapes\n\nfunc Area() int { return 0 }\n\n\
                  type Sq struct{}\n\nfunc (s Sq) Side() int { return 1 }\n";
    let file = parse(source).expect("parse");
    assert_eq!(file.package, "shapes");
    let names: Vec<_> = file.func_decls().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Area", "Side"]);
}

#[test]
fn signature_lists_are_typed() {
    let source = "package p\n\n\
                  func (s *Server) Start(ctx context.Context, a, b int) (n int, err error) {}\n";
    let file = parse(source).expect("parse");
    let func = file.func_decls()[0];

    let server = TypeExpr::pointer(TypeExpr::ident("Server"));
    assert_eq!(func.recv, Some(FieldList::new(vec![Field::new(["s"], server)])));
    assert_eq!(
        func.params,
        Some(FieldList::new(vec![
            Field::new(
                ["ctx"],
                TypeExpr::qualified(TypeExpr::ident("context"), TypeExpr::ident("Context"))
            ),
            Field::new(["a", "b"], TypeExpr::ident("int")),
        ]))
    );
    assert_eq!(
        func.results,
        Some(FieldList::new(vec![
            Field::new(["n"], TypeExpr::ident("int")),
            Field::new(["err"], TypeExpr::ident("error")),
        ]))
    );
}

#[test]
fn empty_parameter_list_and_missing_results_are_absent() {
    let file = parse("package p\n\nfunc main() {}\n").expect("parse");
    let func = file.func_decls()[0];
    assert!(func.recv.is_none());
    assert!(func.params.is_none());
    assert!(func.results.is_none());
}

#[test]
fn single_result_type_is_an_anonymous_field() {
    let file = parse("package p\n\nfunc f() []string { return nil }\n").expect("parse");
    let func = file.func_decls()[0];
    assert_eq!(
        func.results,
        Some(FieldList::new(vec![Field::anonymous(TypeExpr::slice(TypeExpr::ident("string")))]))
    );
}

#[test]
fn spans_slice_back_to_exact_source() {
    let source = "package p\n\nfunc f() {\n\tfoo( 1,  2 )\n}\n";
    let file = parse(source).expect("parse");
    let func = file.func_decls()[0];
    assert_eq!(func.span.slice(source), Some("func f() {\n\tfoo( 1,  2 )\n}"));
    let calls = func.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].span.slice(source), Some("foo( 1,  2 )"));
}

#[test]
fn calls_are_collected_in_pre_order_including_closures() {
    let source = "package p\n\nfunc f() {\n\tfmt.Println(strings.ToUpper(s))\n\
                  \tgo func() { work() }()\n}\n";
    let file = parse(source).expect("parse");
    let calls: Vec<_> =
        file.func_decls()[0].calls().iter().map(|c| c.span.slice(source).unwrap()).collect();
    assert_eq!(
        calls,
        vec![
            "fmt.Println(strings.ToUpper(s))",
            "strings.ToUpper(s)",
            "func() { work() }()",
            "work()",
        ]
    );
}

#[test]
fn conversions_are_collected_as_calls() {
    let source = "package p\n\nfunc f() {\n\tb := []byte(s)\n\tm := map[string]int(x)\n\
                  \tp := (*T)(q)\n\tn := int(y)\n}\n";
    let file = parse(source).expect("parse");
    let calls: Vec<_> =
        file.func_decls()[0].calls().iter().map(|c| c.span.slice(source).unwrap()).collect();
    assert_eq!(calls, vec!["[]byte(s)", "map[string]int(x)", "(*T)(q)", "int(y)"]);
}

#[test]
fn top_level_nodes_keep_their_spans() {
    let source = "package p\n\nvar x = g()\n\nfunc f() { h() }\n";
    let file = parse(source).expect("parse");
    let spans: Vec<_> = file.nodes.iter().map(|n| n.span().slice(source).unwrap()).collect();
    assert_eq!(spans, vec!["var x = g()", "func f() { h() }"]);
}

#[test]
fn doc_comment_is_the_group_directly_above() {
    let source = "package p\n\n// Detached.\n\n// Line one.\n// Line two.\nfunc F() {}\n\n\
                  func G() {}\n";
    let file = parse(source).expect("parse");
    let funcs = file.func_decls();
    let doc = funcs[0].doc.as_ref().expect("doc on F");
    let lines: Vec<_> = doc.list.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(lines, vec!["// Line one.", "// Line two."]);
    assert!(funcs[1].doc.is_none());
}

#[test]
fn trailing_comment_on_previous_code_is_not_doc() {
    let source = "package p\n\nvar x = 1 // about x\nfunc F() {}\n";
    let file = parse(source).expect("parse");
    assert!(file.func_decls()[0].doc.is_none());
}

#[test]
fn block_doc_comment_is_kept_whole() {
    let source = "package p\n\n/* Multi\n   line. */\nfunc F() {}\n";
    let file = parse(source).expect("parse");
    let doc = file.func_decls()[0].doc.as_ref().expect("doc");
    assert_eq!(doc.list.len(), 1);
    assert_eq!(doc.list[0].text, "/* Multi\n   line. */");
}

#[test]
fn unsupported_types_are_marked() {
    let source = "package p\n\nfunc f(cb func(), args ...string) {}\n";
    let file = parse(source).expect("parse");
    let params = file.func_decls()[0].params.clone().expect("params");
    assert!(matches!(params.fields[0].ty, TypeExpr::Unsupported { .. }));
    assert!(matches!(params.fields[1].ty, TypeExpr::Unsupported { .. }));
}

#[test]
fn syntax_errors_reject_the_file() {
    let err = parse("package p\n\nfunc (\n").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "unexpected error: {err}");
}

#[test]
fn missing_package_clause_is_rejected() {
    let err = parse("").unwrap_err();
    assert_eq!(err, ParseError::MissingPackage);
}
