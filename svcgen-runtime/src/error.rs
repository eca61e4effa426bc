use std::fmt::Display;

/// Errors raised by repository implementations.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
    Other(String),
}

impl DataError {
    /// Construct a `Database` variant from any driver error.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
            DataError::Other(msg) => write!(f, "Data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Failures surfaced by generated service methods.
#[derive(Debug)]
pub enum ServiceError {
    /// No `entity` exists with the given identifier.
    NotFound { entity: String, id: String },
    /// The repository failed; passed through unchanged.
    Data(DataError),
    /// The result could not be turned into a response body.
    Serialization(serde_json::Error),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &impl Display) -> Self {
        ServiceError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// HTTP-style status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound { .. } => 404,
            ServiceError::Data(DataError::NotFound(_)) => 404,
            ServiceError::Data(_) | ServiceError::Serialization(_) => 500,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound { entity, id } => write!(f, "{entity} with id {id} not found"),
            ServiceError::Data(err) => write!(f, "{err}"),
            ServiceError::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::NotFound { .. } => None,
            ServiceError::Data(err) => Some(err),
            ServiceError::Serialization(err) => Some(err),
        }
    }
}

impl From<DataError> for ServiceError {
    fn from(err: DataError) -> Self {
        ServiceError::Data(err)
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err)
    }
}
