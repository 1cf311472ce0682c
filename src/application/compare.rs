use crate::application::report::{Comparison, Difference};
use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::fragment::NamedFragment;

/// Compare two fragments and localise the difference when there is only one.
pub fn compare(
    checker: &EquivalenceChecker<'_>,
    left: &NamedFragment,
    right: &NamedFragment,
) -> Comparison {
    let outcome = checker.fragments_match(&left.body, &right.body);
    Comparison {
        left: left.name.clone(),
        right: right.name.clone(),
        equivalent: outcome.is_exact(),
        difference: outcome.diff_texts().map(|(l, r)| Difference {
            left: l.to_string(),
            right: r.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fragment::Fragment;
    use crate::domain::symbol::NoResolver;
    use crate::domain::tree::Expression;

    fn expr(name: &str, e: Expression) -> NamedFragment {
        NamedFragment {
            name: name.to_string(),
            body: Fragment::Expression(e),
        }
    }

    #[test]
    fn test_compare_reports_difference() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = expr("l", Expression::call("f", vec![Expression::name("a"), Expression::name("b")]));
        let right = expr("r", Expression::call("f", vec![Expression::name("a"), Expression::name("c")]));
        let result = compare(&checker, &left, &right);
        assert!(!result.equivalent);
        let difference = result.difference.unwrap();
        assert_eq!(difference.left, "b");
        assert_eq!(difference.right, "c");
    }

    #[test]
    fn test_compare_equivalent() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = expr("l", Expression::name("a"));
        let right = expr("r", Expression::parenthesized(Expression::name("a")));
        let result = compare(&checker, &left, &right);
        assert!(result.equivalent);
        assert!(result.difference.is_none());
    }
}
