//! Boundary with the source-metadata provider.
//!
//! The provider discovers entities and their members; the assembler only
//! consumes the already-extracted structure through these traits.

use crate::entity::{EndpointMember, EntityConfig};

/// Field lookups used when resolving filter fields.
pub trait FieldResolver {
    /// Declared type of `field`, or `None` when the entity has no such field.
    fn field_type(&self, field: &str) -> Option<String>;

    /// Non-transient fields in declaration order.
    fn non_transient_fields(&self) -> Vec<String>;
}

/// Everything the generator needs to know about one entity.
pub trait EntityMetadata: FieldResolver {
    fn entity_name(&self) -> &str;

    /// Rust type of the entity's identifier.
    fn id_type(&self) -> &str;

    fn crud(&self) -> &EntityConfig;

    /// Endpoint members in declaration order.
    fn endpoints(&self) -> &[EndpointMember];
}

/// One field of an entity as seen by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: String,
    pub transient: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            transient: false,
        }
    }

    pub fn transient(mut self) -> Self {
        self.transient = true;
        self
    }
}

/// In-memory metadata, for providers that have already extracted everything.
#[derive(Debug, Clone)]
pub struct StaticEntity {
    pub id_type: String,
    pub fields: Vec<FieldInfo>,
    pub crud: EntityConfig,
    pub endpoints: Vec<EndpointMember>,
}

impl StaticEntity {
    pub fn new(crud: EntityConfig, id_type: impl Into<String>) -> Self {
        Self {
            id_type: id_type.into(),
            fields: Vec::new(),
            crud,
            endpoints: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn endpoint(mut self, member: EndpointMember) -> Self {
        self.endpoints.push(member);
        self
    }
}

impl FieldResolver for StaticEntity {
    fn field_type(&self, field: &str) -> Option<String> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.ty.clone())
    }

    fn non_transient_fields(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| !f.transient)
            .map(|f| f.name.clone())
            .collect()
    }
}

impl EntityMetadata for StaticEntity {
    fn entity_name(&self) -> &str {
        &self.crud.name
    }

    fn id_type(&self) -> &str {
        &self.id_type
    }

    fn crud(&self) -> &EntityConfig {
        &self.crud
    }

    fn endpoints(&self) -> &[EndpointMember] {
        &self.endpoints
    }
}
