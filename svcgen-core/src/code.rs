//! Method bodies as format strings over named arguments.
//!
//! A [`CodeBlock`] is a format string plus an ordered argument list. The
//! placeholders are:
//!
//! | Placeholder | Argument            | Rendered as                         |
//! |-------------|---------------------|-------------------------------------|
//! | `$N`        | [`CodeArg::Name`]   | an identifier, in the target casing |
//! | `$S`        | [`CodeArg::Str`]    | an escaped string literal           |
//! | `$L`        | [`CodeArg::Literal`]| verbatim text                       |
//! | `$$`        | none                | a single `$`                        |
//!
//! Bodies are ordered [`Fragment`]s. Block fragments open and close braces
//! so that a renderer can indent them without re-parsing the text.

use serde::{Deserialize, Serialize};

/// A single argument referenced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CodeArg {
    Name(String),
    Str(String),
    Literal(String),
}

impl CodeArg {
    pub fn name(value: impl Into<String>) -> Self {
        CodeArg::Name(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        CodeArg::Str(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        CodeArg::Literal(value.into())
    }

    fn placeholder(&self) -> char {
        match self {
            CodeArg::Name(_) => 'N',
            CodeArg::Str(_) => 'S',
            CodeArg::Literal(_) => 'L',
        }
    }
}

/// A format string with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    format: String,
    #[serde(default)]
    args: Vec<CodeArg>,
}

impl CodeBlock {
    pub fn new(format: impl Into<String>, args: impl IntoIterator<Item = CodeArg>) -> Self {
        Self {
            format: format.into(),
            args: args.into_iter().collect(),
        }
    }

    /// A block without placeholders.
    pub fn of(format: impl Into<String>) -> Self {
        Self::new(format, Vec::new())
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn args(&self) -> &[CodeArg] {
        &self.args
    }

    /// Substitute every placeholder using `render` for the argument text.
    ///
    /// Fails when a placeholder is unknown, when its argument is missing or
    /// of another kind, or when arguments are left over.
    pub fn expand(&self, mut render: impl FnMut(&CodeArg) -> String) -> Result<String, String> {
        let mut out = String::with_capacity(self.format.len());
        let mut args = self.args.iter();
        let mut position = 0usize;
        let mut chars = self.format.chars();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            let marker = chars
                .next()
                .ok_or_else(|| format!("dangling '$' at the end of \"{}\"", self.format))?;
            if marker == '$' {
                out.push('$');
                continue;
            }
            if !matches!(marker, 'N' | 'S' | 'L') {
                return Err(format!("unknown placeholder '${marker}' in \"{}\"", self.format));
            }
            position += 1;
            let arg = args.next().ok_or_else(|| {
                format!("placeholder #{position} in \"{}\" has no argument", self.format)
            })?;
            if arg.placeholder() != marker {
                return Err(format!(
                    "placeholder #{position} '${marker}' does not accept {arg:?}"
                ));
            }
            out.push_str(&render(arg));
        }

        let unused = args.count();
        if unused > 0 {
            return Err(format!(
                "{unused} unused argument(s) for \"{}\"",
                self.format
            ));
        }
        Ok(out)
    }

    /// Validate placeholders against arguments without rendering.
    pub fn check(&self) -> Result<(), String> {
        self.expand(|_| String::new()).map(|_| ())
    }
}

/// One piece of a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fragment", rename_all = "snake_case")]
pub enum Fragment {
    /// Rendered followed by `;`.
    Statement(CodeBlock),
    /// Tail expression, rendered without a terminator.
    Expr(CodeBlock),
    /// `<code> {`
    BeginBlock(CodeBlock),
    /// `} <code> {`
    NextBlock(CodeBlock),
    /// `}` or `};`
    EndBlock { semicolon: bool },
}

impl Fragment {
    pub fn code(&self) -> Option<&CodeBlock> {
        match self {
            Fragment::Statement(code)
            | Fragment::Expr(code)
            | Fragment::BeginBlock(code)
            | Fragment::NextBlock(code) => Some(code),
            Fragment::EndBlock { .. } => None,
        }
    }
}

/// Check that every block is well-formed and that braces balance.
pub fn check_body(body: &[Fragment]) -> Result<(), String> {
    let mut depth = 0usize;
    for (index, fragment) in body.iter().enumerate() {
        if let Some(code) = fragment.code() {
            code.check()?;
        }
        match fragment {
            Fragment::BeginBlock(_) => depth += 1,
            Fragment::NextBlock(_) if depth == 0 => {
                return Err(format!("fragment #{index} continues a block that is not open"));
            }
            Fragment::EndBlock { .. } => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| format!("fragment #{index} closes a block that is not open"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(format!("{depth} block(s) left open"));
    }
    Ok(())
}
