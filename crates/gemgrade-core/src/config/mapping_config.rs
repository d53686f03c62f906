//! Field mapping configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SHAPE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MappingConfig {
    /// Profile used when a stone's shape is not in the library.
    /// Default: "Pear 8 Mains".
    pub fallback_shape: Option<String>,
}

impl MappingConfig {
    pub fn effective_fallback_shape(&self) -> &str {
        self.fallback_shape.as_deref().unwrap_or(DEFAULT_SHAPE)
    }
}
