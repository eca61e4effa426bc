//! Command implementations for the `svcgen` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

use std::path::Path;

use svcgen_core::{ClassDescriptor, GeneratorConfig, NamingConfig, ServiceGenerator};
use svcgen_render::RenderOptions;

use crate::manifest::Manifest;

/// Configuration listing: `svcgen config`.
///
/// Prints every known property with its default, current value and
/// environment override.
pub mod config;

/// Service generation: `svcgen generate <manifest>`.
///
/// Renders one file per entity and updates the output `mod.rs`.
pub mod generate;

/// Class inspection: `svcgen inspect <manifest>`.
///
/// Prints the methods each entity would get, without rendering.
pub mod inspect;

/// Typed configuration sections used by every command.
pub struct Settings {
    pub config: GeneratorConfig,
    pub naming: NamingConfig,
    pub render: RenderOptions,
}

impl Settings {
    pub fn load(profile: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = GeneratorConfig::load(profile)?;
        let naming = config.section()?;
        let render = config.section()?;
        Ok(Self {
            config,
            naming,
            render,
        })
    }
}

/// Read the manifest and generate a class for each entity, in order.
pub fn generate_classes(
    manifest_path: &Path,
    naming: &NamingConfig,
) -> Result<Vec<ClassDescriptor>, Box<dyn std::error::Error>> {
    let manifest = Manifest::from_path(manifest_path)?;
    let entities = manifest.entities()?;
    tracing::debug!(
        manifest = %manifest_path.display(),
        entities = entities.len(),
        "Read entity manifest"
    );

    let generator = ServiceGenerator::new(naming.clone());
    let mut classes = Vec::with_capacity(entities.len());
    for entity in &entities {
        classes.push(generator.generate(entity)?);
    }
    Ok(classes)
}
