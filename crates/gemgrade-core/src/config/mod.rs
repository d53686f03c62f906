//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod gemgrade_config;
pub mod grading_config;
pub mod mapping_config;
pub mod storage_config;

pub use gemgrade_config::{ConfigOverrides, GemgradeConfig};
pub use grading_config::GradingConfig;
pub use mapping_config::MappingConfig;
pub use storage_config::StorageConfig;
