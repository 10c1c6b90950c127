//! Canonical text for type expressions and field lists.

use crate::error::{Diagnostic, ExtractError, ExtractResult};
use crate::syntax::{FieldList, TypeExpr};

/// Render a type expression, e.g. `map[string][]*pkg.T`.
///
/// Fails on the first unsupported sub-expression; positions are never
/// consulted, so this works on synthetic trees too.
pub fn render_expr(expr: &TypeExpr) -> ExtractResult<String> {
    Ok(match expr {
        TypeExpr::Pointer(inner) => format!("*{}", render_expr(inner)?),
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Array { len, elem } => {
            format!("[{}]{}", render_expr(len)?, render_expr(elem)?)
        }
        TypeExpr::Slice(elem) => format!("[]{}", render_expr(elem)?),
        TypeExpr::Map { key, value } => {
            format!("map[{}]{}", render_expr(key)?, render_expr(value)?)
        }
        TypeExpr::Qualified { owner, member } => {
            format!("{}.{}", render_expr(owner)?, render_expr(member)?)
        }
        TypeExpr::BasicLit(text) => text.clone(),
        TypeExpr::Unsupported { kind } => {
            return Err(ExtractError::UnrenderableExpression { kind: kind.clone() })
        }
    })
}

/// Render a type, degrading to an empty string on failure.
///
/// The failure is logged and pushed onto `diagnostics`.
pub fn render_type_lossy(expr: &TypeExpr, diagnostics: &mut Vec<Diagnostic>) -> String {
    match render_expr(expr) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "unrenderable type expression");
            diagnostics.push(Diagnostic::from(&err));
            String::new()
        }
    }
}

/// Render a field list as `a, b int, c string`.
///
/// Unnamed groups render as the bare type. An empty list renders as the
/// empty string; whether to emit a label around it is the caller's call.
pub fn render_fields(list: &FieldList, diagnostics: &mut Vec<Diagnostic>) -> String {
    list.fields
        .iter()
        .map(|field| {
            let ty = render_type_lossy(&field.ty, diagnostics);
            if field.names.is_empty() {
                ty
            } else {
                format!("{} {}", field.names.join(", "), ty)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
