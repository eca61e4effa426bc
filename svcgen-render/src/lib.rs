//! Rust source rendering for [`ClassDescriptor`]s.
//!
//! The output targets `svcgen-runtime`: every method is an `async fn`
//! returning `ServiceResult`, and the repository is held by value.

mod error;
mod options;

pub use error::RenderError;
pub use options::RenderOptions;

use std::collections::HashSet;

use svcgen_core::code::{CodeArg, Fragment};
use svcgen_core::model::{
    ClassDescriptor, FailureKind, MethodDescriptor, ReturnMarker, Visibility,
};
use svcgen_core::naming::to_snake_case;

const HEADER: &str = "// Generated by svcgen. Do not edit by hand.\n";
const INDENT: &str = "    ";

/// Render `class` as a complete Rust source file.
///
/// # Errors
///
/// Fails when a declared type is not a Rust type, when identifiers collide
/// after case conversion, or when the assembled file does not parse.
pub fn render_class(class: &ClassDescriptor, options: &RenderOptions) -> Result<String, RenderError> {
    let repository_ty = class.repository.ty.rust_type();
    check_type(&format!("{}.{}", class.name, class.repository.name), &repository_ty)?;
    let field = identifier(&class.repository.name);

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str("use svcgen_runtime::prelude::*;\n");
    for import in &options.imports {
        out.push_str(&format!("use {import};\n"));
    }

    out.push_str(&format!(
        "\n#[derive(Clone)]\npub struct {name} {{\n{INDENT}{field}: {repository_ty},\n}}\n\n",
        name = class.name
    ));

    if options.bean_wiring && class.repository.injected {
        out.push_str("#[bean]\n");
    }
    out.push_str(&format!(
        "impl {name} {{\n\
         {INDENT}pub fn new({field}: {repository_ty}) -> Self {{\n\
         {INDENT}{INDENT}Self {{ {field} }}\n\
         {INDENT}}}\n\
         }}\n\n",
        name = class.name
    ));

    let mut seen = HashSet::new();
    out.push_str(&format!("impl {} {{\n", class.name));
    for (index, method) in class.methods.iter().enumerate() {
        let name = identifier(&method.name);
        if !seen.insert(name.clone()) {
            return Err(RenderError::DuplicateIdentifier {
                scope: class.name.clone(),
                name,
            });
        }
        if index > 0 {
            out.push('\n');
        }
        render_method(&mut out, &name, method)?;
    }
    out.push_str("}\n");

    syn::parse_file(&out).map_err(|e| RenderError::InvalidSyntax(e.to_string()))?;
    tracing::debug!(class = %class.name, bytes = out.len(), "Rendered service class");
    Ok(out)
}

/// File the class is written to: `<snake_class>.rs`.
pub fn file_name(class: &ClassDescriptor) -> String {
    format!("{}.rs", module_name(class))
}

/// Module name of the generated file.
pub fn module_name(class: &ClassDescriptor) -> String {
    to_snake_case(&class.name)
}

fn render_method(out: &mut String, name: &str, method: &MethodDescriptor) -> Result<(), RenderError> {
    let mut seen = HashSet::new();
    let mut params = String::new();
    for param in &method.params {
        let ident = identifier(&param.name);
        if !seen.insert(ident.clone()) {
            return Err(RenderError::DuplicateIdentifier {
                scope: format!("method '{}'", method.name),
                name: ident,
            });
        }
        let ty = param.ty.rust_type();
        check_type(&format!("parameter '{}' of '{}'", param.name, method.name), &ty)?;
        params.push_str(&format!(", {ident}: {ty}"));
    }

    if !method.failures.is_empty() {
        out.push_str(&format!("{INDENT}/// # Errors\n{INDENT}///\n"));
        for kind in &method.failures {
            out.push_str(&format!("{INDENT}/// {}\n", failure_doc(*kind)));
        }
    }

    let visibility = match method.visibility {
        Visibility::Public => "pub ",
    };
    let returns = match method.returns {
        ReturnMarker::Response => "ServiceResult",
    };
    out.push_str(&format!(
        "{INDENT}{visibility}async fn {name}(&self{params}) -> {returns} {{\n"
    ));
    render_body(out, method)?;
    out.push_str(&format!("{INDENT}}}\n"));
    Ok(())
}

fn render_body(out: &mut String, method: &MethodDescriptor) -> Result<(), RenderError> {
    let malformed = |reason: String| RenderError::MalformedBody {
        method: method.name.clone(),
        reason,
    };
    let mut depth = 2usize;

    for fragment in &method.body {
        let code = match fragment.code() {
            Some(code) => code.expand(render_arg).map_err(malformed)?,
            None => String::new(),
        };
        match fragment {
            Fragment::Statement(_) => push_line(out, depth, &format!("{code};")),
            Fragment::Expr(_) => push_line(out, depth, &code),
            Fragment::BeginBlock(_) => {
                push_line(out, depth, &format!("{code} {{"));
                depth += 1;
            }
            Fragment::NextBlock(_) => {
                let outer = close_block(depth).ok_or_else(|| malformed("unopened block".into()))?;
                push_line(out, outer, &format!("}} {code} {{"));
            }
            Fragment::EndBlock { semicolon } => {
                depth = close_block(depth).ok_or_else(|| malformed("unopened block".into()))?;
                push_line(out, depth, if *semicolon { "};" } else { "}" });
            }
        }
    }
    Ok(())
}

/// Depth after closing one block, if one is open.
fn close_block(depth: usize) -> Option<usize> {
    depth.checked_sub(1).filter(|d| *d >= 2)
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

fn render_arg(arg: &CodeArg) -> String {
    match arg {
        CodeArg::Name(name) => identifier(name),
        CodeArg::Str(value) => format!("{value:?}"),
        CodeArg::Literal(text) => text.clone(),
    }
}

fn failure_doc(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::NotFound => "Returns `ServiceError::NotFound` when no entity matches `id`.",
    }
}

/// snake_case identifier, raw when it would clash with a keyword.
fn identifier(name: &str) -> String {
    let snake = to_snake_case(name);
    if syn::parse_str::<syn::Ident>(&snake).is_ok() {
        snake
    } else {
        format!("r#{snake}")
    }
}

fn check_type(item: &str, ty: &str) -> Result<(), RenderError> {
    syn::parse_str::<syn::Type>(ty)
        .map(|_| ())
        .map_err(|e| RenderError::InvalidType {
            item: item.to_string(),
            ty: ty.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(identifier("type"), "r#type");
        assert_eq!(identifier("pageSize"), "page_size");
        assert_eq!(identifier("status"), "status");
    }

    #[test]
    fn string_arguments_are_escaped() {
        assert_eq!(render_arg(&CodeArg::string("say \"hi\"")), r#""say \"hi\"""#);
    }

    #[test]
    fn type_check() {
        assert!(check_type("x", "Option<Vec<String>>").is_ok());
        assert!(matches!(
            check_type("x", "Vec<"),
            Err(RenderError::InvalidType { .. })
        ));
    }

    #[test]
    fn close_block_stops_at_method_level() {
        assert_eq!(close_block(3), Some(2));
        assert_eq!(close_block(2), None);
    }
}
