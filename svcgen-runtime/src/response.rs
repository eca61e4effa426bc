use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ServiceError;

pub type ServiceResult = Result<ServiceResponse, ServiceError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    NoContent,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::NoContent => 204,
        }
    }
}

/// Uniform answer of every generated service method.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: ResponseStatus,
    pub body: Option<serde_json::Value>,
}

impl ServiceResponse {
    /// A `200` response carrying `value` as JSON.
    pub fn ok(value: impl Serialize) -> ServiceResult {
        Ok(Self {
            status: ResponseStatus::Ok,
            body: Some(serde_json::to_value(value)?),
        })
    }

    pub fn no_content() -> Self {
        Self {
            status: ResponseStatus::NoContent,
            body: None,
        }
    }

    /// Decode the body back into a typed value.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<Option<T>, ServiceError> {
        match &self.body {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serialises_body() {
        let response = ServiceResponse::ok(vec![1, 2, 3]).unwrap();
        assert_eq!(response.status.code(), 200);
        assert_eq!(response.body_as::<Vec<i32>>().unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn no_content_has_no_body() {
        let response = ServiceResponse::no_content();
        assert_eq!(response.status, ResponseStatus::NoContent);
        assert_eq!(response.status.code(), 204);
        assert_eq!(response.body_as::<String>().unwrap(), None);
    }

    #[test]
    fn unserialisable_value_is_an_error() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON keys");
        assert!(matches!(
            ServiceResponse::ok(map),
            Err(ServiceError::Serialization(_))
        ));
    }
}
