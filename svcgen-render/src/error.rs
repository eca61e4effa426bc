/// Errors raised while rendering a class descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A declared type is not a Rust type.
    InvalidType {
        item: String,
        ty: String,
        reason: String,
    },
    /// Two identifiers collide once converted to snake_case.
    DuplicateIdentifier { scope: String, name: String },
    /// A method body could not be expanded.
    MalformedBody { method: String, reason: String },
    /// The assembled file does not parse.
    InvalidSyntax(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidType { item, ty, reason } => {
                write!(f, "Invalid type `{ty}` for {item}: {reason}")
            }
            RenderError::DuplicateIdentifier { scope, name } => {
                write!(f, "Identifier `{name}` is defined twice in {scope}")
            }
            RenderError::MalformedBody { method, reason } => {
                write!(f, "Cannot render body of '{method}': {reason}")
            }
            RenderError::InvalidSyntax(msg) => write!(f, "Generated code does not parse: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
