//! ShapeRegistry: profile lookup with variant detection and fallback.

use std::collections::HashMap;
use std::sync::LazyLock;

use gemgrade_core::config::MappingConfig;
use gemgrade_core::constants::{DEFAULT_SHAPE, KEY_SHAPE};
use gemgrade_core::MeasurementMap;

use super::library::library_profiles;
use super::profile::ShapeProfile;
use super::variants::{library_detectors, VariantDetector};

static LIBRARY: LazyLock<ShapeRegistry> = LazyLock::new(ShapeRegistry::build_library);

/// Outcome of shape resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedShape<'a> {
    /// The shape name after variant detection. May name no profile.
    pub name: &'a str,
    /// The profile to map with: the named one, or the fallback.
    pub profile: &'a ShapeProfile,
    pub is_fallback: bool,
}

/// Immutable table of shape profiles plus family detectors.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    profiles: HashMap<String, ShapeProfile>,
    detectors: HashMap<String, VariantDetector>,
    fallback: String,
}

impl ShapeRegistry {
    /// The built-in library: Pear, Oval and Marquise in 8- and 4-main cuts.
    pub fn library() -> &'static ShapeRegistry {
        &LIBRARY
    }

    fn build_library() -> Self {
        Self::new(library_profiles(), library_detectors(), DEFAULT_SHAPE)
    }

    /// Build a registry. `fallback` should name one of `profiles`; if it
    /// does not, the first profile (by name) becomes the fallback.
    pub fn new(
        profiles: impl IntoIterator<Item = ShapeProfile>,
        detectors: impl IntoIterator<Item = (&'static str, VariantDetector)>,
        fallback: &str,
    ) -> Self {
        let mut profiles: HashMap<String, ShapeProfile> = profiles
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        if profiles.is_empty() {
            // Keeps `fallback()` total: an empty registry maps nothing.
            profiles.insert(fallback.to_string(), ShapeProfile::new(fallback));
        }
        let detectors = detectors
            .into_iter()
            .map(|(family, d)| (family.to_string(), d))
            .collect();
        let fallback = if profiles.contains_key(fallback) {
            fallback.to_string()
        } else {
            let first = profiles.keys().min().cloned().unwrap_or_default();
            tracing::warn!(requested = fallback, using = %first, "fallback shape not in registry");
            first
        };
        Self {
            profiles,
            detectors,
            fallback,
        }
    }

    /// A copy of this registry with the fallback taken from config.
    /// An unknown configured name keeps the current fallback.
    pub fn with_mapping_config(&self, config: &MappingConfig) -> Self {
        let mut registry = self.clone();
        let requested = config.effective_fallback_shape();
        if registry.profiles.contains_key(requested) {
            registry.fallback = requested.to_string();
        } else {
            tracing::warn!(
                requested,
                using = %registry.fallback,
                "configured fallback shape not in registry"
            );
        }
        registry
    }

    pub fn get(&self, name: &str) -> Option<&ShapeProfile> {
        self.profiles.get(name)
    }

    /// Every registered profile name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn fallback(&self) -> &ShapeProfile {
        &self.profiles[&self.fallback]
    }

    /// Apply the family detector for `shape`, if one is registered.
    /// Otherwise the declared shape is the profile name as-is.
    pub fn detect<'a>(&self, shape: &'a str, data: &MeasurementMap) -> &'a str {
        match self.detectors.get(shape) {
            Some(detector) => detector(data),
            None => shape,
        }
    }

    /// Resolve the active profile for a stone.
    ///
    /// The declared shape is `explicit` when given and not blank, else the
    /// export's `SHAPE` value. Unknown names fall back; this never fails.
    pub fn resolve<'a>(
        &'a self,
        data: &'a MeasurementMap,
        explicit: Option<&'a str>,
    ) -> ResolvedShape<'a> {
        let declared = explicit
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| data.get(KEY_SHAPE))
            .unwrap_or_default();
        let name = self.detect(declared, data);

        match self.profiles.get(name) {
            Some(profile) => {
                tracing::debug!(declared, resolved = name, "resolved shape profile");
                ResolvedShape {
                    name,
                    profile,
                    is_fallback: false,
                }
            }
            None => {
                tracing::warn!(declared, fallback = %self.fallback, "unknown shape, using fallback profile");
                ResolvedShape {
                    name,
                    profile: self.fallback(),
                    is_fallback: true,
                }
            }
        }
    }
}
