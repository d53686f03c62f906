//! Measurement parser for line-oriented `KEY=VALUE` exports.
//!
//! Never fails. Each line is split on its first `=`; key and value are
//! trimmed. Lines without `=` or with an empty key are dropped. `\n` and
//! `\r\n` endings are both accepted. A repeated key keeps its last value.

use std::collections::HashMap;

use gemgrade_core::MeasurementMap;

pub fn parse_measurements(text: &str) -> MeasurementMap {
    let mut entries = HashMap::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
            _ if line.trim().is_empty() => {}
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = entries.len(), "dropped malformed measurement lines");
    }

    MeasurementMap::from(entries)
}
