//! Quantization steps and the shared rounding policy.
//!
//! A value is rounded by dividing by the step, rounding to the nearest
//! integer (`f64::round`, ties away from zero), and multiplying back. The
//! formatted output carries as many decimals as the step's own literal:
//! step `"0.5"` gives one decimal, `"1"` none, `"1.0"` one. Step zero
//! means no rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A rounding step together with the decimal precision of its literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    value: f64,
    decimals: usize,
}

/// Rejected step literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rounding step: {0:?}")]
pub struct InvalidStep(pub String);

impl Step {
    /// No rounding.
    pub const ZERO: Step = Step {
        value: 0.0,
        decimals: 0,
    };

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl From<f64> for Step {
    /// Precision follows the shortest display form of the number, so
    /// `1.0` behaves like the literal `"1"` and `0.2` like `"0.2"`.
    fn from(value: f64) -> Self {
        let decimals = decimals_of(&value.to_string());
        Self { value, decimals }
    }
}

impl FromStr for Step {
    type Err = InvalidStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let value = literal
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| InvalidStep(s.to_string()))?;
        if literal.contains(['e', 'E']) {
            return Ok(Step::from(value));
        }
        Ok(Self {
            value,
            decimals: decimals_of(literal),
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", self.decimals, self.value)
    }
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Step {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn decimals_of(literal: &str) -> usize {
    literal.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Round `value` to the nearest multiple of `step`, or `None` when scaling
/// by the step overflows.
pub fn checked_round_value(value: f64, step: Step) -> Option<f64> {
    if step.is_zero() {
        return Some(value);
    }
    let inverse = 1.0 / step.value;
    let rounded = (value * inverse).round() / inverse;
    if !rounded.is_finite() {
        return None;
    }
    // -0.0 would format as "-0.0".
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// Round `value` to the nearest multiple of `step` without formatting.
/// Values too large to scale are returned unrounded.
pub fn round_value(value: f64, step: Step) -> f64 {
    checked_round_value(value, step).unwrap_or(value)
}

/// Round and format, or `None` when the value cannot be rounded to `step`.
pub fn checked_round_to_step(value: f64, step: Step) -> Option<String> {
    if step.is_zero() {
        return Some(value.to_string());
    }
    checked_round_value(value, step).map(|rounded| format!("{:.*}", step.decimals, rounded))
}

/// Round `value` to `step` and format it with the step's precision.
/// Falls back to the unrounded value when it cannot be rounded.
pub fn round_to_step(value: f64, step: Step) -> String {
    checked_round_to_step(value, step).unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(s: &str) -> Step {
        s.parse().unwrap()
    }

    #[test]
    fn literal_precision_is_kept() {
        assert_eq!(step("1.0").decimals(), 1);
        assert_eq!(step("1").decimals(), 0);
        assert_eq!(step("0.50").decimals(), 2);
        assert_eq!(Step::from(1.0).decimals(), 0);
        assert_eq!(Step::from(0.2).decimals(), 1);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!("-0.5".parse::<Step>().is_err());
        assert!("abc".parse::<Step>().is_err());
        assert!("inf".parse::<Step>().is_err());
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(round_to_step(-0.2, step("1")), "0");
        assert_eq!(round_to_step(-0.04, step("0.1")), "0.0");
    }

    #[test]
    fn serde_uses_the_literal() {
        let s: Step = serde_json::from_str("\"0.20\"").unwrap();
        assert_eq!(s.decimals(), 2);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"0.20\"");
    }
}
