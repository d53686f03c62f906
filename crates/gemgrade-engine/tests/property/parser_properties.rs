use std::collections::BTreeMap;

use gemgrade_engine::parse_measurements;
use proptest::prelude::*;

fn export() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-Z][A-Z0-9_]{0,15}", "[a-z0-9.]{0,8}", 0..20)
}

proptest! {
    #[test]
    fn every_keyed_line_is_kept(entries in export()) {
        let text: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        let map = parse_measurements(&text);

        prop_assert_eq!(map.len(), entries.len());
        for (k, v) in &entries {
            prop_assert_eq!(map.get(k), Some(v.as_str()));
        }
    }

    #[test]
    fn lines_without_separator_are_ignored(
        entries in export(),
        junk in prop::collection::vec("[a-z ]{0,12}", 0..10),
    ) {
        let mut lines: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        lines.extend(junk);
        let map = parse_measurements(&lines.join("\r\n"));
        prop_assert_eq!(map.len(), entries.len());
    }

    #[test]
    fn value_keeps_everything_after_first_separator(
        key in "[A-Z_]{1,10}",
        rest in "[a-z0-9=]{0,12}",
    ) {
        let map = parse_measurements(&format!("{key}=x{rest}"));
        let expected = format!("x{rest}");
        prop_assert_eq!(map.get(&key), Some(expected.as_str()));
    }

    #[test]
    fn last_duplicate_wins(key in "[A-Z]{1,8}", first in "[0-9]{1,4}", second in "[0-9]{1,4}") {
        let map = parse_measurements(&format!("{key}={first}\n{key}={second}\n"));
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.get(&key), Some(second.as_str()));
    }

    #[test]
    fn never_panics_on_arbitrary_text(text in "\\PC*") {
        let _ = parse_measurements(&text);
    }
}
