//! Duplicate fragment detection.
//!
//! Compares every pair of fragments in parallel, then groups them greedily in
//! input order. A fragment joins the first group whose every member it is
//! equivalent to. Equivalence is not transitive once some references resolve
//! and others fall back to text, so groups are never merged through a chain.

use rayon::prelude::*;
use tracing::debug;

use crate::application::report::DuplicateGroup;
use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::fragment::NamedFragment;

/// Symmetric pairwise equivalence, row-major `n * n`.
struct PairMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl PairMatrix {
    fn compute(checker: &EquivalenceChecker<'_>, fragments: &[NamedFragment]) -> Self {
        let n = fragments.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let edges: Vec<(usize, usize)> = pairs
            .into_par_iter()
            .filter(|&(i, j)| checker.fragments_equivalent(&fragments[i].body, &fragments[j].body))
            .collect();
        debug!(fragments = n, equivalent_pairs = edges.len(), "compared all pairs");

        let mut cells = vec![false; n * n];
        for (i, j) in edges {
            cells[i * n + j] = true;
            cells[j * n + i] = true;
        }
        Self { n, cells }
    }

    fn equivalent(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }
}

pub fn find_duplicates(
    checker: &EquivalenceChecker<'_>,
    fragments: &[NamedFragment],
) -> Vec<DuplicateGroup> {
    let matrix = PairMatrix::compute(checker, fragments);

    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..fragments.len() {
        let home = groups
            .iter_mut()
            .find(|members| members.iter().all(|&m| matrix.equivalent(m, i)));
        match home {
            Some(members) => members.push(i),
            None => groups.push(vec![i]),
        }
    }

    groups
        .into_iter()
        .filter(|members| members.len() > 1)
        .map(|members| DuplicateGroup {
            text: fragments[members[0]].body.source_text().to_string(),
            members: members.iter().map(|&i| fragments[i].name.clone()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fragment::Fragment;
    use crate::domain::operator::Operator;
    use crate::domain::symbol::NoResolver;
    use crate::domain::tree::{Expression, Statement};

    fn stmt(name: &str, statement: Statement) -> NamedFragment {
        NamedFragment {
            name: name.to_string(),
            body: Fragment::Statement(statement),
        }
    }

    fn increment(var: &str) -> Statement {
        Statement::expression(Expression::postfix(Expression::name(var), Operator::PlusPlus))
    }

    #[test]
    fn test_groups_follow_input_order() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let fragments = vec![
            stmt("a1", increment("a")),
            stmt("b1", increment("b")),
            stmt("a2", increment("a")),
            stmt("b2", increment("b")),
            stmt("a3", increment("a")),
            stmt("c1", increment("c")),
        ];
        let groups = find_duplicates(&checker, &fragments);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members, vec!["a1", "a2", "a3"]);
        assert_eq!(groups[0].text, "a++;");
        assert_eq!(groups[1].members, vec!["b1", "b2"]);
    }

    #[test]
    fn test_no_duplicates() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let fragments = vec![stmt("a", increment("a")), stmt("b", increment("b"))];
        assert!(find_duplicates(&checker, &fragments).is_empty());
        assert!(find_duplicates(&checker, &[]).is_empty());
    }

    #[test]
    fn test_groups_are_mutually_equivalent() {
        use crate::infrastructure::symbol_table::{SymbolInfo, SymbolTable};

        let table = SymbolTable::new();
        table.insert("P#x", SymbolInfo::field("x", "demo.P"));
        let checker = EquivalenceChecker::new(&table);
        let bump = |e: Expression| Statement::expression(Expression::postfix(e, Operator::PlusPlus));
        let fragments = vec![
            stmt("resolved", bump(Expression::name("x").bound_to("P#x"))),
            stmt("unresolved", bump(Expression::name("x"))),
            stmt("this_x", bump(Expression::field(Expression::this(), "x").bound_to("P#x"))),
        ];
        assert!(!checker.fragments_equivalent(&fragments[1].body, &fragments[2].body));

        let groups = find_duplicates(&checker, &fragments);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, vec!["resolved", "unresolved"]);
        assert!(checker.fragments_equivalent(&fragments[0].body, &fragments[1].body));
    }
}
