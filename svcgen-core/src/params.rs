//! Builders for the recurring parameter shapes.

use crate::model::{ParameterDescriptor, TypeRef};

pub const ENTITY: &str = "entity";
pub const ID: &str = "id";
pub const PAGE: &str = "page";
pub const PAGE_SIZE: &str = "pageSize";

/// The entity value accepted by `save`.
pub fn entity_param(entity: &str) -> ParameterDescriptor {
    ParameterDescriptor {
        name: ENTITY.to_string(),
        ty: TypeRef::Entity(entity.to_string()),
    }
}

/// The identifier accepted by `one`, `delete` and every endpoint method.
pub fn id_param(id_type: &str) -> ParameterDescriptor {
    ParameterDescriptor {
        name: ID.to_string(),
        ty: TypeRef::Id(id_type.to_string()),
    }
}

pub fn page_param() -> ParameterDescriptor {
    ParameterDescriptor {
        name: PAGE.to_string(),
        ty: TypeRef::OptionalInt,
    }
}

pub fn page_size_param() -> ParameterDescriptor {
    ParameterDescriptor {
        name: PAGE_SIZE.to_string(),
        ty: TypeRef::OptionalInt,
    }
}

/// A listing filter, typed after the field's declared type.
pub fn filter_param(field: &str, declared: &str) -> ParameterDescriptor {
    ParameterDescriptor {
        name: field.to_string(),
        ty: TypeRef::Declared(declared.to_string()),
    }
}

/// A parameter forwarded to a callable endpoint.
pub fn endpoint_param(name: &str, declared: &str) -> ParameterDescriptor {
    filter_param(name, declared)
}
