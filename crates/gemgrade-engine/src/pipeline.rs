//! Parse → resolve shape → derive → map.

use gemgrade_core::config::MappingConfig;
use gemgrade_core::constants::FIELD_SHAPE;
use gemgrade_core::{MeasurementMap, NormalizedFieldSet};

use crate::derivation::derive_fields;
use crate::mapper::map_fields_onto;
use crate::parser::parse_measurements;
use crate::shapes::ShapeRegistry;

/// Computes normalized field sets against one shape registry.
#[derive(Debug, Clone, Copy)]
pub struct FieldPipeline<'r> {
    registry: &'r ShapeRegistry,
}

impl Default for FieldPipeline<'static> {
    fn default() -> Self {
        Self::new(ShapeRegistry::library())
    }
}

impl<'r> FieldPipeline<'r> {
    pub fn new(registry: &'r ShapeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ShapeRegistry {
        self.registry
    }

    /// Parse `raw_text` and compute its normalized fields.
    pub fn compute(&self, raw_text: &str, explicit_shape: Option<&str>) -> NormalizedFieldSet {
        self.compute_from_map(&parse_measurements(raw_text), explicit_shape)
    }

    /// Compute normalized fields from an already parsed export.
    ///
    /// Derived fields are computed first; directly measured fields with the
    /// same name overwrite them, and the profile hook runs last. The
    /// resolved shape name is recorded under `shape`, even when it named
    /// no profile and mapping used the fallback.
    pub fn compute_from_map(
        &self,
        data: &MeasurementMap,
        explicit_shape: Option<&str>,
    ) -> NormalizedFieldSet {
        let resolved = self.registry.resolve(data, explicit_shape);
        let derived = derive_fields(data, resolved.profile);
        let mut fields = map_fields_onto(data, resolved.profile, derived);
        if !resolved.name.is_empty() {
            fields.insert(FIELD_SHAPE, resolved.name);
        }
        tracing::debug!(
            shape = resolved.name,
            profile = %resolved.profile.name,
            fields = fields.len(),
            "computed normalized fields"
        );
        fields
    }
}

/// Registry built from the library with the configured fallback shape.
pub fn configured_registry(config: &MappingConfig) -> ShapeRegistry {
    ShapeRegistry::library().with_mapping_config(config)
}

/// Parse, derive and map a measurement export with the built-in library.
pub fn compute_normalized_fields(raw_text: &str, explicit_shape: Option<&str>) -> NormalizedFieldSet {
    FieldPipeline::default().compute(raw_text, explicit_shape)
}
