//! Grade resolution configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GradingConfig {
    /// Run the primary and bowtie lookups concurrently. Default: true.
    pub concurrent_queries: Option<bool>,
}

impl GradingConfig {
    pub fn effective_concurrent_queries(&self) -> bool {
        self.concurrent_queries.unwrap_or(true)
    }
}
