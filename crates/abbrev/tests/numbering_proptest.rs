//! Property-based tests for repetition numbering and determinism

use abbrev::{expand, number_placeholders, ExpandError, DEFAULT_MAX_DEPTH};
use proptest::prelude::*;

/// Generate abbreviations from a small, always valid grammar subset
fn abbreviation_strategy() -> impl Strategy<Value = String> {
    let element = ("[a-z]{1,6}", prop::option::of("[a-z]{1,4}\\$*"))
        .prop_map(|(tag, class)| match class {
            Some(class) => format!("{tag}.{class}"),
            None => tag,
        });
    let term = (element, prop::option::of(1usize..5)).prop_map(|(el, count)| match count {
        Some(count) => format!("{el}*{count}"),
        None => el,
    });
    prop::collection::vec(term, 1..4).prop_map(|terms| terms.join(">"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_numbered_values_are_padded_indexes(count in 1usize..120, width in 1usize..5) {
        let placeholder = "$".repeat(width);
        let abbreviation = format!("li.n{placeholder}*{count}");
        let expansion = expand(&abbreviation).unwrap();

        prop_assert_eq!(expansion.nodes.len(), count);
        for (index, node) in expansion.nodes.iter().enumerate() {
            let digits = node.classes[0].strip_prefix('n').unwrap();
            prop_assert!(digits.len() >= width);
            prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));

            let value: usize = digits.parse().unwrap();
            prop_assert!((1..=count).contains(&value));
            prop_assert_eq!(value, index + 1);
            // Padding only ever fills up to the placeholder width
            if digits.len() > width {
                prop_assert!(!digits.starts_with('0'));
            }
        }
    }

    #[test]
    fn test_placeholder_runs_substituted(prefix in "[a-z]{0,5}", width in 1usize..6, number in 1usize..100_000) {
        let input = format!("{prefix}{}", "$".repeat(width));
        let output = number_placeholders(&input, number);

        prop_assert_eq!(output, format!("{prefix}{number:0width$}"));
    }

    #[test]
    fn test_expand_is_deterministic(abbreviation in abbreviation_strategy()) {
        let first = expand(&abbreviation);
        let second = expand(&abbreviation);

        prop_assert!(first.is_ok(), "failed to expand: {}", abbreviation);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in "[a-z#.*>+(){}\\[\\]=$0-9 ]{0,24}") {
        let first = expand(&input);
        prop_assert_eq!(first, expand(&input));
    }

    #[test]
    fn test_nested_groups_respect_depth_limit(depth in 1usize..20_000) {
        let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
        let result = expand(&input);

        if depth <= DEFAULT_MAX_DEPTH {
            prop_assert_eq!(result.map(|e| e.html), Ok("<a></a>".to_string()));
        } else {
            prop_assert_eq!(
                result,
                Err(ExpandError::TooDeep { limit: DEFAULT_MAX_DEPTH, position: DEFAULT_MAX_DEPTH })
            );
        }
    }

    #[test]
    fn test_child_chains_respect_depth_limit(depth in 1usize..20_000) {
        let input = format!("{}b", "a>".repeat(depth));
        let result = expand(&input);

        if depth <= DEFAULT_MAX_DEPTH {
            let expansion = result.unwrap();
            prop_assert_eq!(expansion.nodes[0].count(), depth + 1);
        } else {
            prop_assert_eq!(
                result,
                Err(ExpandError::TooDeep { limit: DEFAULT_MAX_DEPTH, position: 2 * DEFAULT_MAX_DEPTH + 1 })
            );
        }
    }
}
