//! Per-file report assembly.

use std::fmt::Write as _;

use crate::describe::{describe, DeclContext};
use crate::model::{ExtractOptions, FileInfo, FileReport};
use crate::syntax::{Node, SourceFile};

/// Build the report for one parsed file.
///
/// Every function declaration found by a full pre-order walk is described
/// in source order. Whether the file is a test file decides the wording of
/// the header and footer and which list every record lands in.
pub fn build_report(
    info: &FileInfo,
    tree: &SourceFile,
    source: &str,
    options: ExtractOptions,
) -> FileReport {
    let is_test_file = info.is_test_file();
    let ctx = DeclContext { package: &tree.package, is_test_file, options };

    let mut body = String::new();
    write_header(&mut body, info, &tree.package, is_test_file);

    let mut ordinary_functions = Vec::new();
    let mut test_functions = Vec::new();
    let mut diagnostics = Vec::new();

    tree.inspect(&mut |node| {
        if let Node::Func(func) = node {
            let (block, record) = describe(func, source, &ctx, &mut diagnostics);
            body.push_str(&block);
            if is_test_file {
                test_functions.push(record);
            } else {
                ordinary_functions.push(record);
            }
        }
    });

    write_footer(&mut body, info, is_test_file);

    let diagnostics = diagnostics.into_iter().map(|d| d.in_file(&info.file_path)).collect();

    tracing::debug!(
        file = %info.file_path,
        functions = ordinary_functions.len(),
        test_functions = test_functions.len(),
        "built file report"
    );

    FileReport {
        file_path: info.file_path.clone(),
        file_name: info.file_name.clone(),
        body_text: body,
        ordinary_functions,
        test_functions,
        diagnostics,
    }
}

fn file_kind(is_test_file: bool) -> &'static str {
    if is_test_file {
        "go test"
    } else {
        "go"
    }
}

fn section_title(is_test_file: bool) -> &'static str {
    if is_test_file {
        "Go Test Functions"
    } else {
        "Go Functions"
    }
}

fn write_header(out: &mut String, info: &FileInfo, package: &str, is_test_file: bool) {
    let kind = file_kind(is_test_file);
    let _ = writeln!(out, "##Start of {kind} file {}", info.file_path);
    let _ = writeln!(out, "###File path: {}", info.file_path);
    let _ = writeln!(out, "###File name: {}", info.file_name);
    let _ = writeln!(out, "##Package name: {package}");
    let _ = writeln!(out, "##{}", section_title(is_test_file));
}

fn write_footer(out: &mut String, info: &FileInfo, is_test_file: bool) {
    let kind = file_kind(is_test_file);
    let _ = writeln!(out, "----- End of {kind} file {} -------", info.file_path);
}
