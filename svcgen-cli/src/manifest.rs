//! The entity manifest read by `svcgen generate` and `svcgen inspect`.
//!
//! ```yaml
//! entities:
//!   - name: Order
//!     id_type: i64
//!     fields:
//!       - { name: status, type: String }
//!       - { name: cache, type: "Vec<u8>", transient: true }
//!     crud: { pagination: true, filter: ["*"] }
//!     endpoints:
//!       - field: status
//!       - method: recalculate
//!         params: [{ name: factor, type: f64 }]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use svcgen_core::{EndpointMember, EntityConfig, FieldInfo, StaticEntity};

#[derive(Debug)]
pub enum ManifestError {
    Read { path: String, message: String },
    Parse(String),
    DuplicateEntity(String),
    /// An endpoint names an owner that is not declared in the manifest.
    UnknownOwner {
        entity: String,
        member: String,
        owner: String,
    },
    /// A field endpoint names a field its owner does not have.
    UnknownField {
        entity: String,
        member: String,
        owner: String,
    },
    InvalidEndpoint { entity: String, message: String },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Read { path, message } => {
                write!(f, "Cannot read manifest '{path}': {message}")
            }
            ManifestError::Parse(msg) => write!(f, "Invalid manifest: {msg}"),
            ManifestError::DuplicateEntity(name) => {
                write!(f, "Entity '{name}' is declared more than once")
            }
            ManifestError::UnknownOwner {
                entity,
                member,
                owner,
            } => write!(
                f,
                "Endpoint '{member}' of '{entity}' names owner '{owner}', which is not a declared entity"
            ),
            ManifestError::UnknownField {
                entity,
                member,
                owner,
            } => write!(
                f,
                "Endpoint '{member}' of '{entity}' is not a field of '{owner}'"
            ),
            ManifestError::InvalidEndpoint { entity, message } => {
                write!(f, "Invalid endpoint on '{entity}': {message}")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitySpec {
    pub name: String,
    #[serde(default = "default_id_type")]
    pub id_type: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub crud: CrudSpec,
    #[serde(default)]
    pub endpoints: Vec<EndpointSpec>,
}

fn default_id_type() -> String {
    "i64".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub transient: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrudSpec {
    #[serde(default)]
    pub pagination: bool,
    #[serde(default)]
    pub filter: Vec<String>,
}

/// Either `field: <name>` or `method: <name>` with optional `params`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointSpec {
    pub field: Option<String>,
    pub method: Option<String>,
    pub owner: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl Manifest {
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ManifestError> {
        serde_yaml::from_str(yaml).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Validate cross-entity references and build generator input, in
    /// manifest order.
    pub fn entities(&self) -> Result<Vec<StaticEntity>, ManifestError> {
        let mut by_name: HashMap<&str, &EntitySpec> = HashMap::new();
        for spec in &self.entities {
            if by_name.insert(spec.name.as_str(), spec).is_some() {
                return Err(ManifestError::DuplicateEntity(spec.name.clone()));
            }
        }

        self.entities
            .iter()
            .map(|spec| spec.to_entity(&by_name))
            .collect()
    }
}

impl EntitySpec {
    fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    fn to_entity(&self, by_name: &HashMap<&str, &EntitySpec>) -> Result<StaticEntity, ManifestError> {
        let crud = EntityConfig::new(&self.name)
            .with_pagination(self.crud.pagination)
            .with_filter(self.crud.filter.iter().cloned());

        let mut entity = StaticEntity::new(crud, &self.id_type);
        for field in &self.fields {
            let info = FieldInfo::new(&field.name, &field.ty);
            entity = entity.field(if field.transient { info.transient() } else { info });
        }
        for endpoint in &self.endpoints {
            entity = entity.endpoint(self.to_member(endpoint, by_name)?);
        }
        Ok(entity)
    }

    fn to_member(
        &self,
        endpoint: &EndpointSpec,
        by_name: &HashMap<&str, &EntitySpec>,
    ) -> Result<EndpointMember, ManifestError> {
        let owner_name = endpoint.owner.as_deref().unwrap_or(&self.name);
        let owner = by_name.get(owner_name).copied();

        match (&endpoint.field, &endpoint.method) {
            (Some(field), None) => {
                if !endpoint.params.is_empty() {
                    return Err(ManifestError::InvalidEndpoint {
                        entity: self.name.clone(),
                        message: format!("field endpoint '{field}' cannot take params"),
                    });
                }
                let owner = owner.ok_or_else(|| self.unknown_owner(field, owner_name))?;
                if !owner.has_field(field) {
                    return Err(ManifestError::UnknownField {
                        entity: self.name.clone(),
                        member: field.clone(),
                        owner: owner_name.to_string(),
                    });
                }
                Ok(EndpointMember::field(field, owner_name))
            }
            (None, Some(method)) => {
                if owner.is_none() {
                    return Err(self.unknown_owner(method, owner_name));
                }
                Ok(EndpointMember::callable(
                    method,
                    owner_name,
                    endpoint.params.iter().map(|p| (p.name.clone(), p.ty.clone())),
                ))
            }
            _ => Err(ManifestError::InvalidEndpoint {
                entity: self.name.clone(),
                message: "each endpoint needs exactly one of `field` or `method`".to_string(),
            }),
        }
    }

    fn unknown_owner(&self, member: &str, owner: &str) -> ManifestError {
        ManifestError::UnknownOwner {
            entity: self.name.clone(),
            member: member.to_string(),
            owner: owner.to_string(),
        }
    }
}
