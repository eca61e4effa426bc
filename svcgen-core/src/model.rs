//! The class description produced by assembly.
//!
//! Descriptors form an immutable tree (`ClassDescriptor` → `MethodDescriptor`
//! → `ParameterDescriptor`) that is fully self-contained: rendering needs no
//! further lookups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::code::Fragment;

/// Type of a parameter or field, in target-language terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TypeRef {
    /// The entity's own value type.
    Entity(String),
    /// The entity's identifier type.
    Id(String),
    /// A nullable integer (`page`, `pageSize`).
    OptionalInt,
    /// A type taken verbatim from metadata (field or callable parameter).
    Declared(String),
}

impl TypeRef {
    /// The Rust spelling of this type.
    pub fn rust_type(&self) -> String {
        match self {
            TypeRef::Entity(name) | TypeRef::Id(name) | TypeRef::Declared(name) => name.clone(),
            TypeRef::OptionalInt => "Option<u64>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub ty: TypeRef,
}

/// Failure kinds a generated method may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    NotFound,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::NotFound => "NotFound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
}

/// What a generated method returns.
///
/// Every generated method answers with the runtime's response wrapper; the
/// marker exists so renderers do not have to hard-code that decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMarker {
    #[default]
    Response,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub returns: ReturnMarker,
    pub params: Vec<ParameterDescriptor>,
    pub failures: BTreeSet<FailureKind>,
    pub body: Vec<Fragment>,
}

impl MethodDescriptor {
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn declares(&self, kind: FailureKind) -> bool {
        self.failures.contains(&kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    /// Wired by the host's dependency injection rather than set by hand.
    pub injected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub repository: FieldDescriptor,
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }
}
