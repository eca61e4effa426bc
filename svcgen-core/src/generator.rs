use crate::assembly::{assemble_class, assemble_methods};
use crate::error::GenerationError;
use crate::metadata::EntityMetadata;
use crate::model::ClassDescriptor;
use crate::naming::NamingConfig;

/// Runs intake, method assembly and class assembly for one entity at a time.
///
/// A generator holds only its naming configuration, so one instance can be
/// shared across threads and reused for any number of entities.
#[derive(Debug, Clone, Default)]
pub struct ServiceGenerator {
    naming: NamingConfig,
}

impl ServiceGenerator {
    pub fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Generate the service class for one entity.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationError`] met; no partial class is
    /// produced.
    pub fn generate(&self, entity: &dyn EntityMetadata) -> Result<ClassDescriptor, GenerationError> {
        let name = entity.entity_name();
        if name.is_empty() {
            return Err(GenerationError::EmptyEntityName);
        }
        if entity.crud().name != name {
            return Err(GenerationError::EntityNameMismatch {
                entity: name.to_string(),
                crud: entity.crud().name.clone(),
            });
        }

        let methods = assemble_methods(
            entity.crud(),
            entity.id_type(),
            entity.endpoints(),
            entity,
            self.naming.accessor_style,
        )?;
        let class = assemble_class(name, methods, &self.naming);

        tracing::info!(
            entity = name,
            class = %class.name,
            methods = class.methods.len(),
            "Generated service class"
        );
        Ok(class)
    }

    /// Generate classes for a batch of entities, stopping at the first error.
    pub fn generate_all<'a, I>(&self, entities: I) -> Result<Vec<ClassDescriptor>, GenerationError>
    where
        I: IntoIterator<Item = &'a dyn EntityMetadata>,
    {
        entities.into_iter().map(|e| self.generate(e)).collect()
    }
}
