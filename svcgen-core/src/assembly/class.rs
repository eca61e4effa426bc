use crate::model::{ClassDescriptor, FieldDescriptor, MethodDescriptor, TypeRef};
use crate::naming::NamingConfig;

/// Name of the single collaborator field on every generated service.
pub const REPOSITORY_FIELD: &str = "repository";

/// Wrap assembled methods into the service class for `entity`.
///
/// The class carries exactly one injected repository field; everything the
/// methods persist goes through it.
pub fn assemble_class(
    entity: &str,
    methods: Vec<MethodDescriptor>,
    naming: &NamingConfig,
) -> ClassDescriptor {
    ClassDescriptor {
        name: naming.service_name(entity),
        repository: FieldDescriptor {
            name: REPOSITORY_FIELD.to_string(),
            ty: TypeRef::Declared(naming.repository_name(entity)),
            injected: true,
        },
        methods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_field_follows_naming() {
        let class = assemble_class("Order", Vec::new(), &NamingConfig::default());
        assert_eq!(class.name, "OrderService");
        assert_eq!(class.repository.name, "repository");
        assert_eq!(
            class.repository.ty,
            TypeRef::Declared("OrderRepository".into())
        );
        assert!(class.repository.injected);
    }
}
