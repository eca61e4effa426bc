//! Service class synthesis.
//!
//! Given an entity's CRUD configuration and its endpoint members, the
//! generator assembles a [`ClassDescriptor`]: a service with `save`, `one`,
//! `all` (or `allByFilter`) and `delete`, plus one forwarding method per
//! endpoint member. Rendering the descriptor is left to a separate crate.

pub mod assembly;
pub mod code;
pub mod config;
pub mod entity;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod method;
pub mod model;
pub mod naming;
pub mod params;

pub use code::{CodeArg, CodeBlock, Fragment};
pub use config::{ConfigError, ConfigProperties, ConfigValue, GeneratorConfig};
pub use entity::{EndpointMember, EndpointParam, EntityConfig, FilterSpec};
pub use error::GenerationError;
pub use generator::ServiceGenerator;
pub use metadata::{EntityMetadata, FieldInfo, FieldResolver, StaticEntity};
pub use method::MethodBuilder;
pub use model::{
    ClassDescriptor, FailureKind, FieldDescriptor, MethodDescriptor, ParameterDescriptor,
    ReturnMarker, TypeRef, Visibility,
};
pub use naming::{AccessorStyle, NamingConfig};

pub mod prelude {
    //! Re-exports of the most commonly used generator types.
    pub use crate::{
        ClassDescriptor, EndpointMember, EntityConfig, EntityMetadata, FieldInfo,
        GenerationError, GeneratorConfig, MethodDescriptor, NamingConfig, ServiceGenerator,
        StaticEntity,
    };
}
