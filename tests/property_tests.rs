//! Property-based tests for the dump format.
//!
//! These complement the exact transcripts in the integration tests by
//! checking labels, lengths, ordering and indentation over generated inputs.

use proptest::prelude::*;
use var_dumper::{dump, dump_with_options, DumpOptions, Map, Value};

proptest! {
    #[test]
    fn prop_integers_are_int(n in any::<i64>()) {
        prop_assert_eq!(dump(&Value::from(n)), format!("int {}", n));
    }

    #[test]
    fn prop_fractional_floats_are_float(
        f in (-1.0e9f64..1.0e9).prop_filter("fractional", |f| f.fract() != 0.0 && f.abs() >= 1e-6)
    ) {
        prop_assert_eq!(dump(&Value::from(f)), format!("float {}", f));
    }

    #[test]
    fn prop_string_length_counts_raw_chars(s in any::<String>()) {
        let dumped = dump(&Value::from(s.as_str()));
        prop_assert!(dumped.starts_with("string \""));
        let suffix = format!("\" (length={})", s.chars().count());
        prop_assert!(dumped.ends_with(&suffix));
    }

    #[test]
    fn prop_sequence_entries_in_index_order(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let value: Value = v.iter().map(|&n| Value::from(n)).collect();
        let dumped = dump(&value);
        let lines: Vec<&str> = dumped.lines().collect();

        prop_assert_eq!(lines.len(), v.len() + 2);
        let header = format!("sequence (size={}) [", v.len());
        prop_assert_eq!(lines[0], header.as_str());
        for (i, n) in v.iter().enumerate() {
            let expected = format!("    [{}] => int {},", i, n);
            prop_assert_eq!(lines[i + 1], expected.as_str());
        }
        prop_assert_eq!(lines[v.len() + 1], "]");
    }

    #[test]
    fn prop_mapping_entries_in_insertion_order(keys in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let mut map = Map::new();
        let mut order = Vec::new();
        for key in &keys {
            if map.insert(key.clone(), Value::Null).is_none() {
                order.push(key.clone());
            }
        }

        let dumped = dump(&Value::from(map));
        let names: Vec<String> = dumped
            .lines()
            .skip(1)
            .filter_map(|line| line.trim_start().strip_prefix('\''))
            .filter_map(|rest| rest.split('\'').next())
            .map(str::to_string)
            .collect();
        prop_assert_eq!(names, order);
    }

    #[test]
    fn prop_each_level_adds_one_indent_unit(depth in 1usize..8, width in 0usize..6) {
        let mut value = Value::from(true);
        for _ in 0..depth {
            value = Value::from(vec![value]);
        }

        let dumped = dump_with_options(&value, DumpOptions::new().with_indent(width));
        let lines: Vec<&str> = dumped.lines().collect();
        prop_assert_eq!(lines.len(), 2 * depth + 1);

        for level in 1..=depth {
            let prefix = format!("{}[0] =>", " ".repeat(width * level));
            prop_assert!(lines[level].starts_with(&prefix));
            // Footers sit at the parent's indent; nested ones close an entry line.
            let trailer = if level == depth { "" } else { "," };
            let footer = format!("{}]{}", " ".repeat(width * (depth - level)), trailer);
            prop_assert_eq!(lines[depth + level], footer.as_str());
        }
    }

    #[test]
    fn prop_extreme_floats_use_exponent_form(
        mantissa in 1.0f64..10.0,
        exponent in prop_oneof![22i32..300, -300i32..-8],
    ) {
        let f = mantissa * 10f64.powi(exponent);
        let dumped = dump(&Value::from(f));
        prop_assert!(dumped.contains('e'), "{}", dumped);
        prop_assert!(dumped.len() < 40, "{}", dumped);
    }
}
