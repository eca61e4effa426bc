/// Errors raised while assembling a service class.
///
/// Input reaching the assembler is expected to be pre-validated by the
/// metadata provider. When it is not, assembly stops at the first problem
/// instead of producing a partially valid class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The entity name was empty.
    EmptyEntityName,
    /// The metadata's entity name differs from the name in its CRUD configuration.
    EntityNameMismatch { entity: String, crud: String },
    /// A filter field does not name a field of the entity.
    UnknownFilterField { entity: String, field: String },
    /// An endpoint member has no declaring entity.
    MissingOwner { entity: String, member: String },
    /// Two parameters of the same method share a name.
    DuplicateParameter { method: String, name: String },
    /// A method body is not well-formed (placeholder mismatch, unbalanced blocks).
    MalformedBody { method: String, reason: String },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::EmptyEntityName => write!(f, "Entity name must not be empty"),
            GenerationError::EntityNameMismatch { entity, crud } => {
                write!(f, "Entity '{entity}' carries a CRUD configuration for '{crud}'")
            }
            GenerationError::UnknownFilterField { entity, field } => {
                write!(f, "Filter field '{field}' is not a field of entity '{entity}'")
            }
            GenerationError::MissingOwner { entity, member } => {
                write!(f, "Endpoint '{member}' of entity '{entity}' has no declaring entity")
            }
            GenerationError::DuplicateParameter { method, name } => {
                write!(f, "Method '{method}' declares parameter '{name}' more than once")
            }
            GenerationError::MalformedBody { method, reason } => {
                write!(f, "Malformed body for method '{method}': {reason}")
            }
        }
    }
}

impl std::error::Error for GenerationError {}
