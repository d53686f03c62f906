use gemgrade_core::types::{round_to_step, round_value, Step};
use proptest::prelude::*;

fn steps() -> impl Strategy<Value = Step> {
    prop::sample::select(vec!["0.1", "0.2", "0.5", "1", "1.0", "0.25"])
        .prop_map(|s| s.parse::<Step>().unwrap())
}

proptest! {
    #[test]
    fn rounded_value_is_within_half_a_step(value in -1000.0f64..1000.0, step in steps()) {
        let rounded = round_value(value, step);
        prop_assert!((rounded - value).abs() <= step.value() / 2.0 + 1e-9);
    }

    #[test]
    fn output_has_step_precision(value in 0.0f64..1000.0, step in steps()) {
        let out = round_to_step(value, step);
        let decimals = out.split_once('.').map_or(0, |(_, frac)| frac.len());
        prop_assert_eq!(decimals, step.decimals());
    }

    #[test]
    fn rounding_is_idempotent(value in 0.0f64..1000.0, step in steps()) {
        let once = round_to_step(value, step);
        let twice = round_to_step(once.parse::<f64>().unwrap(), step);
        prop_assert_eq!(once, twice);
    }
}
