// A named piece of code handed over by the host: one statement or one expression.

use serde::{Deserialize, Serialize};

use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::matching::Match;
use crate::domain::render::{fill_expression_text, fill_statement_text};
use crate::domain::tree::{Child, ExprKind, Expression, Statement, StmtKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Statement(Statement),
    Expression(Expression),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedFragment {
    pub name: String,
    #[serde(flatten)]
    pub body: Fragment,
}

impl Fragment {
    pub fn source_text(&self) -> &str {
        match self {
            Fragment::Statement(s) => s.source_text(),
            Fragment::Expression(e) => e.source_text(),
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Fragment::Statement(s) => s.kind().name(),
            Fragment::Expression(e) => e.kind().name(),
        }
    }

    pub fn fill_missing_text(&mut self) {
        match self {
            Fragment::Statement(s) => fill_statement_text(s),
            Fragment::Expression(e) => fill_expression_text(e),
        }
    }

    /// Name of the first host extension node that has no recorded text.
    /// Such nodes cannot be compared, since their text is all the engine sees.
    pub fn untexted_extension(&self) -> Option<&str> {
        match self {
            Fragment::Statement(s) => untexted_in_statement(s),
            Fragment::Expression(e) => untexted_in_expression(e),
        }
    }
}

fn untexted_in_expression(expr: &Expression) -> Option<&str> {
    if let ExprKind::Other { name } = &expr.kind {
        if expr.text.is_empty() {
            return Some(name);
        }
    }
    expr.children().into_iter().find_map(untexted_in_expression)
}

fn untexted_in_statement(stmt: &Statement) -> Option<&str> {
    if let StmtKind::Other { name } = &stmt.kind {
        if stmt.text.is_empty() {
            return Some(name);
        }
    }
    stmt.children().into_iter().find_map(|child| match child {
        Child::Statement(s) => untexted_in_statement(s),
        Child::Expression(e) => untexted_in_expression(e),
    })
}

impl<'a> EquivalenceChecker<'a> {
    /// A statement never matches an expression.
    pub fn fragments_equivalent(&self, a: &Fragment, b: &Fragment) -> bool {
        match (a, b) {
            (Fragment::Statement(x), Fragment::Statement(y)) => {
                self.statements_equivalent(Some(x), Some(y))
            }
            (Fragment::Expression(x), Fragment::Expression(y)) => {
                self.expressions_equivalent(Some(x), Some(y))
            }
            _ => false,
        }
    }

    pub fn fragments_match<'t>(&self, a: &'t Fragment, b: &'t Fragment) -> Match<'t> {
        match (a, b) {
            (Fragment::Statement(x), Fragment::Statement(y)) => self.statements_match(x, y),
            (Fragment::Expression(x), Fragment::Expression(y)) => self.expressions_match(x, y),
            _ => Match::NonEquivalent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symbol::NoResolver;

    #[test]
    fn test_statement_never_matches_expression() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let call = Expression::call("a", vec![]);
        let as_expr = Fragment::Expression(call.clone());
        let as_stmt = Fragment::Statement(Statement::expression(call));
        assert!(!checker.fragments_equivalent(&as_expr, &as_stmt));
        assert!(checker.fragments_equivalent(&as_expr, &as_expr.clone()));
    }

    #[test]
    fn test_untexted_extension_is_found_in_nested_position() {
        let mut other = Expression::other("lambda", "");
        other.text.clear();
        let fragment = Fragment::Statement(Statement::return_(Some(other)));
        assert_eq!(fragment.untexted_extension(), Some("lambda"));

        let fine = Fragment::Statement(Statement::return_(Some(Expression::other("lambda", "() -> 1"))));
        assert_eq!(fine.untexted_extension(), None);
    }

    #[test]
    fn test_named_fragment_json_shape() {
        let json = r#"{ "name": "first", "expression": { "kind": "this" } }"#;
        let mut named: NamedFragment = serde_json::from_str(json).unwrap();
        named.body.fill_missing_text();
        assert_eq!(named.name, "first");
        assert_eq!(named.body.source_text(), "this");
        assert_eq!(named.body.kind_name(), "this");
    }
}
