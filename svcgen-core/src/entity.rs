use serde::{Deserialize, Serialize};

/// The filter marker meaning "every non-transient field".
pub const WILDCARD: &str = "*";

/// Which fields the listing method filters on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum FilterSpec {
    /// No filtering: the listing method is `all`.
    #[default]
    None,
    /// `["*"]`: all non-transient fields, resolved at generation time.
    Wildcard,
    /// An explicit, non-empty list of field names.
    Fields(Vec<String>),
}

impl FilterSpec {
    pub fn is_none(&self) -> bool {
        matches!(self, FilterSpec::None)
    }
}

impl From<Vec<String>> for FilterSpec {
    fn from(fields: Vec<String>) -> Self {
        match fields.as_slice() {
            [] => FilterSpec::None,
            [only] if only == WILDCARD => FilterSpec::Wildcard,
            _ => FilterSpec::Fields(fields),
        }
    }
}

impl From<FilterSpec> for Vec<String> {
    fn from(spec: FilterSpec) -> Self {
        match spec {
            FilterSpec::None => Vec::new(),
            FilterSpec::Wildcard => vec![WILDCARD.to_string()],
            FilterSpec::Fields(fields) => fields,
        }
    }
}

/// CRUD capabilities of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default)]
    pub pagination: bool,
    #[serde(default)]
    pub filter: FilterSpec,
}

impl EntityConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pagination: false,
            filter: FilterSpec::None,
        }
    }

    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_filter<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.filter = fields.into_iter().map(Into::into).collect::<Vec<String>>().into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParam {
    pub name: String,
    pub ty: String,
}

/// An extra member exposed as its own forwarding method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EndpointMember {
    Field {
        name: String,
        owner: String,
    },
    Callable {
        name: String,
        owner: String,
        #[serde(default)]
        params: Vec<EndpointParam>,
    },
}

impl EndpointMember {
    pub fn field(name: impl Into<String>, owner: impl Into<String>) -> Self {
        EndpointMember::Field {
            name: name.into(),
            owner: owner.into(),
        }
    }

    pub fn callable(
        name: impl Into<String>,
        owner: impl Into<String>,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        EndpointMember::Callable {
            name: name.into(),
            owner: owner.into(),
            params: params
                .into_iter()
                .map(|(name, ty)| EndpointParam { name, ty })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EndpointMember::Field { name, .. } | EndpointMember::Callable { name, .. } => name,
        }
    }

    /// The entity declaring this member.
    pub fn owner(&self) -> &str {
        match self {
            EndpointMember::Field { owner, .. } | EndpointMember::Callable { owner, .. } => owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_spec_from_list() {
        assert_eq!(FilterSpec::from(Vec::<String>::new()), FilterSpec::None);
        assert_eq!(FilterSpec::from(vec!["*".to_string()]), FilterSpec::Wildcard);
        assert_eq!(
            FilterSpec::from(vec!["a".to_string(), "b".to_string()]),
            FilterSpec::Fields(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn wildcard_mixed_with_fields_is_an_explicit_list() {
        let spec = FilterSpec::from(vec!["*".to_string(), "a".to_string()]);
        assert_eq!(spec, FilterSpec::Fields(vec!["*".into(), "a".into()]));
    }

    #[test]
    fn filter_spec_serde_uses_plain_lists() {
        let config: EntityConfig =
            serde_json::from_str(r#"{ "name": "Order", "filter": ["*"] }"#).unwrap();
        assert_eq!(config.filter, FilterSpec::Wildcard);
        assert!(!config.pagination);

        let json = serde_json::to_string(&EntityConfig::new("Order")).unwrap();
        assert!(json.contains(r#""filter":[]"#));
    }

    #[test]
    fn endpoint_accessors() {
        let member = EndpointMember::callable(
            "recalculate",
            "Order",
            [("factor".to_string(), "f64".to_string())],
        );
        assert_eq!(member.name(), "recalculate");
        assert_eq!(member.owner(), "Order");
    }
}
