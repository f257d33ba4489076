//! Specificity ordering.

use leanver_core::priority::ScoredSpecifier;

/// Sort ranges narrowest first.
///
/// The sort is stable: ranges of equal specificity keep their input order,
/// which is the only thing deciding between them during greedy resolution.
pub fn order(mut specs: Vec<ScoredSpecifier>) -> Vec<ScoredSpecifier> {
    specs.sort_by_key(|s| s.specificity());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use leanver_core::priority::score;
    use leanver_core::specifier::normalize;

    fn ordered(ranges: &[&str]) -> Vec<String> {
        let scored = ranges.iter().map(|r| score(normalize(r))).collect();
        order(scored)
            .into_iter()
            .map(|s| s.raw().to_string())
            .collect()
    }

    #[test]
    fn narrowest_first() {
        assert_eq!(
            ordered(&["*", "1.2.x", "1.x", "1.1.0", "1.1.x", "1.1.3"]),
            vec!["1.1.0", "1.1.3", "1.2.x", "1.1.x", "1.x", "*"]
        );
    }

    #[test]
    fn comparison_operators_in_convention_order() {
        assert_eq!(
            ordered(&["<=1.0.0", "<1.0.0", ">=1.0.0", ">1.0.0"]),
            vec![">1.0.0", ">=1.0.0", "<1.0.0", "<=1.0.0"]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        assert_eq!(
            ordered(&["2.x", "1.x", "3", "~1"]),
            vec!["2.x", "1.x", "3", "~1"]
        );
    }

    #[test]
    fn unranked_goes_last() {
        assert_eq!(ordered(&["~1.5", "*", "1.5.6"]), vec!["1.5.6", "*", "~1.5"]);
    }
}
