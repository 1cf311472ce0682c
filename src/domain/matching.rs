//! Match localisation.
//!
//! Beyond the yes/no answer, tells whether two fragments differ in exactly one
//! place and hands back that pair. `a + f(x)` against `a + f(y)` is a partial
//! match with the differing pair `f(x)` / `f(y)`.

use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::tree::{Child, CodeBlock, ExprKind, Expression, Statement, StmtKind, TypeRef};

/// Outcome of matching two fragments.
#[derive(Debug, Clone, Copy)]
pub enum Match<'t> {
    Exact,
    /// Same shape; exactly one pair of direct children differs.
    Partial { left: Child<'t>, right: Child<'t> },
    NonEquivalent,
}

impl<'t> Match<'t> {
    pub fn is_exact(&self) -> bool {
        matches!(self, Match::Exact)
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Match::Partial { .. })
    }

    /// Source texts of the differing pair, if partial.
    pub fn diff_texts(&self) -> Option<(&'t str, &'t str)> {
        match self {
            Match::Partial { left, right } => Some((child_text(left), child_text(right))),
            _ => None,
        }
    }
}

fn child_text<'t>(child: &Child<'t>) -> &'t str {
    match child {
        Child::Statement(s) => s.source_text(),
        Child::Expression(e) => e.source_text(),
    }
}

/// A pair of direct children at the same position, either side possibly absent.
type Pair<'t> = (Option<Child<'t>>, Option<Child<'t>>);

fn expr_pair<'t>(a: Option<&'t Expression>, b: Option<&'t Expression>) -> Pair<'t> {
    (a.map(Child::Expression), b.map(Child::Expression))
}

fn stmt_pair<'t>(a: Option<&'t Statement>, b: Option<&'t Statement>) -> Pair<'t> {
    (a.map(Child::Statement), b.map(Child::Statement))
}

fn list_pairs<'t>(a: &'t [Expression], b: &'t [Expression]) -> Option<Vec<Pair<'t>>> {
    (a.len() == b.len()).then(|| a.iter().zip(b).map(|(x, y)| expr_pair(Some(x), Some(y))).collect())
}

fn block_pairs<'t>(a: Option<&'t CodeBlock>, b: Option<&'t CodeBlock>) -> Option<Vec<Pair<'t>>> {
    match (a, b) {
        (None, None) => Some(Vec::new()),
        (Some(a), Some(b)) if a.statements.len() == b.statements.len() => Some(
            a.statements
                .iter()
                .zip(&b.statements)
                .map(|(x, y)| stmt_pair(Some(x), Some(y)))
                .collect(),
        ),
        _ => None,
    }
}

impl<'a> EquivalenceChecker<'a> {
    pub fn expressions_match<'t>(&self, a: &'t Expression, b: &'t Expression) -> Match<'t> {
        if self.expressions_equivalent(Some(a), Some(b)) {
            return Match::Exact;
        }
        let (Some(a), Some(b)) = (a.strip_parentheses(), b.strip_parentheses()) else {
            return Match::NonEquivalent;
        };
        // Swapping the qualifier of `p.x` for `q.x` only helps if both name the same member.
        if let (ExprKind::Reference(r1), ExprKind::Reference(r2)) = (&a.kind, &b.kind) {
            if self.resolver().resolve(r1) != self.resolver().resolve(r2) {
                return Match::NonEquivalent;
            }
        }
        match expression_shape(a, b) {
            Some(pairs) => self.single_difference(pairs),
            None => Match::NonEquivalent,
        }
    }

    pub fn statements_match<'t>(&self, a: &'t Statement, b: &'t Statement) -> Match<'t> {
        if self.statements_equivalent(Some(a), Some(b)) {
            return Match::Exact;
        }
        match statement_shape(a, b) {
            Some(pairs) => self.single_difference(pairs),
            None => Match::NonEquivalent,
        }
    }

    fn children_equivalent(&self, pair: &Pair<'_>) -> bool {
        match pair {
            (None, None) => true,
            (Some(Child::Expression(x)), Some(Child::Expression(y))) => {
                self.expressions_equivalent(Some(*x), Some(*y))
            }
            (Some(Child::Statement(x)), Some(Child::Statement(y))) => {
                self.statements_equivalent(Some(*x), Some(*y))
            }
            _ => false,
        }
    }

    fn single_difference<'t>(&self, pairs: Vec<Pair<'t>>) -> Match<'t> {
        let mut difference = None;
        for pair in pairs {
            if self.children_equivalent(&pair) {
                continue;
            }
            if difference.is_some() {
                return Match::NonEquivalent;
            }
            match pair {
                (Some(left), Some(right)) => difference = Some((left, right)),
                _ => return Match::NonEquivalent,
            }
        }
        match difference {
            Some((left, right)) => Match::Partial { left, right },
            None => Match::NonEquivalent,
        }
    }
}

/// Child pairs of two expressions whose non-child parts (kind, operator, types,
/// arity) agree. `None` means the shapes differ or the kind is a leaf.
fn expression_shape<'t>(a: &'t Expression, b: &'t Expression) -> Option<Vec<Pair<'t>>> {
    match (&a.kind, &b.kind) {
        (
            ExprKind::MethodCall {
                method: m1,
                arguments: a1,
            },
            ExprKind::MethodCall {
                method: m2,
                arguments: a2,
            },
        ) => {
            let mut pairs = vec![expr_pair(Some(m1), Some(m2))];
            pairs.extend(list_pairs(a1, a2)?);
            Some(pairs)
        }
        (ExprKind::Reference(r1), ExprKind::Reference(r2)) => (r1.name == r2.name
            && r1.qualifier.is_some()
            && r2.qualifier.is_some())
        .then(|| vec![expr_pair(r1.qualifier.as_deref(), r2.qualifier.as_deref())]),
        (ExprKind::ArrayInit { elements: e1 }, ExprKind::ArrayInit { elements: e2 }) => {
            list_pairs(e1, e2)
        }
        (
            ExprKind::TypeCast {
                cast_type: t1,
                operand: o1,
            },
            ExprKind::TypeCast {
                cast_type: t2,
                operand: o2,
            },
        ) => same_type(t1.as_ref(), t2.as_ref())
            .then(|| vec![expr_pair(o1.as_deref(), o2.as_deref())]),
        (
            ExprKind::ArrayAccess {
                array: a1,
                index: i1,
            },
            ExprKind::ArrayAccess {
                array: a2,
                index: i2,
            },
        ) => Some(vec![
            expr_pair(Some(a1), Some(a2)),
            expr_pair(i1.as_deref(), i2.as_deref()),
        ]),
        (
            ExprKind::Prefix {
                operator: op1,
                operand: o1,
            },
            ExprKind::Prefix {
                operator: op2,
                operand: o2,
            },
        ) => (op1 == op2).then(|| vec![expr_pair(o1.as_deref(), o2.as_deref())]),
        (
            ExprKind::Postfix {
                operator: op1,
                operand: o1,
            },
            ExprKind::Postfix {
                operator: op2,
                operand: o2,
            },
        ) => (op1 == op2).then(|| vec![expr_pair(Some(o1), Some(o2))]),
        (
            ExprKind::Binary {
                operator: op1,
                lhs: l1,
                rhs: r1,
            },
            ExprKind::Binary {
                operator: op2,
                lhs: l2,
                rhs: r2,
            },
        )
        | (
            ExprKind::Assignment {
                operator: op1,
                lhs: l1,
                rhs: r1,
            },
            ExprKind::Assignment {
                operator: op2,
                lhs: l2,
                rhs: r2,
            },
        ) => (op1 == op2).then(|| {
            vec![
                expr_pair(Some(l1), Some(l2)),
                expr_pair(r1.as_deref(), r2.as_deref()),
            ]
        }),
        (
            ExprKind::Conditional {
                condition: c1,
                then_expr: t1,
                else_expr: e1,
            },
            ExprKind::Conditional {
                condition: c2,
                then_expr: t2,
                else_expr: e2,
            },
        ) => Some(vec![
            expr_pair(Some(c1), Some(c2)),
            expr_pair(t1.as_deref(), t2.as_deref()),
            expr_pair(e1.as_deref(), e2.as_deref()),
        ]),
        (
            ExprKind::InstanceOf {
                operand: o1,
                checked_type: t1,
            },
            ExprKind::InstanceOf {
                operand: o2,
                checked_type: t2,
            },
        ) => same_type(t1.as_ref(), t2.as_ref()).then(|| vec![expr_pair(Some(o1), Some(o2))]),
        _ => None,
    }
}

fn statement_shape<'t>(a: &'t Statement, b: &'t Statement) -> Option<Vec<Pair<'t>>> {
    match (&a.kind, &b.kind) {
        (StmtKind::Block(b1), StmtKind::Block(b2)) => block_pairs(Some(b1), Some(b2)),
        (
            StmtKind::If {
                condition: c1,
                then_branch: t1,
                else_branch: e1,
            },
            StmtKind::If {
                condition: c2,
                then_branch: t2,
                else_branch: e2,
            },
        ) => Some(vec![
            expr_pair(c1.as_ref(), c2.as_ref()),
            stmt_pair(t1.as_deref(), t2.as_deref()),
            stmt_pair(e1.as_deref(), e2.as_deref()),
        ]),
        (
            StmtKind::While {
                condition: c1,
                body: b1,
            },
            StmtKind::While {
                condition: c2,
                body: b2,
            },
        )
        | (
            StmtKind::DoWhile {
                condition: c1,
                body: b1,
            },
            StmtKind::DoWhile {
                condition: c2,
                body: b2,
            },
        ) => Some(vec![
            expr_pair(c1.as_ref(), c2.as_ref()),
            stmt_pair(b1.as_deref(), b2.as_deref()),
        ]),
        (
            StmtKind::For {
                initialization: i1,
                condition: c1,
                update: u1,
                body: b1,
            },
            StmtKind::For {
                initialization: i2,
                condition: c2,
                update: u2,
                body: b2,
            },
        ) => Some(vec![
            stmt_pair(i1.as_deref(), i2.as_deref()),
            expr_pair(c1.as_ref(), c2.as_ref()),
            stmt_pair(u1.as_deref(), u2.as_deref()),
            stmt_pair(b1.as_deref(), b2.as_deref()),
        ]),
        (
            StmtKind::ForEach {
                variable: v1,
                iterated: it1,
                body: b1,
            },
            StmtKind::ForEach {
                variable: v2,
                iterated: it2,
                body: b2,
            },
        ) => (v1.name == v2.name && same_type(v1.ty.as_ref(), v2.ty.as_ref())).then(|| {
            vec![
                expr_pair(it1.as_ref(), it2.as_ref()),
                stmt_pair(b1.as_deref(), b2.as_deref()),
            ]
        }),
        (
            StmtKind::Switch {
                selector: s1,
                body: b1,
            },
            StmtKind::Switch {
                selector: s2,
                body: b2,
            },
        ) => {
            let mut pairs = vec![expr_pair(s1.as_ref(), s2.as_ref())];
            pairs.extend(block_pairs(b1.as_ref(), b2.as_ref())?);
            Some(pairs)
        }
        (
            StmtKind::SwitchLabel {
                is_default: false,
                case_value: v1,
            },
            StmtKind::SwitchLabel {
                is_default: false,
                case_value: v2,
            },
        ) => Some(vec![expr_pair(v1.as_ref(), v2.as_ref())]),
        (StmtKind::Return { value: v1 }, StmtKind::Return { value: v2 })
        | (StmtKind::Throw { exception: v1 }, StmtKind::Throw { exception: v2 }) => {
            Some(vec![expr_pair(v1.as_ref(), v2.as_ref())])
        }
        (
            StmtKind::Labeled {
                label: l1,
                body: b1,
            },
            StmtKind::Labeled {
                label: l2,
                body: b2,
            },
        ) => (l1 == l2).then(|| vec![stmt_pair(b1.as_deref(), b2.as_deref())]),
        (
            StmtKind::Synchronized {
                lock: l1,
                body: b1,
            },
            StmtKind::Synchronized {
                lock: l2,
                body: b2,
            },
        ) => {
            let mut pairs = vec![expr_pair(l1.as_ref(), l2.as_ref())];
            pairs.extend(block_pairs(b1.as_ref(), b2.as_ref())?);
            Some(pairs)
        }
        (StmtKind::Declaration { variables: v1 }, StmtKind::Declaration { variables: v2 }) => {
            let same_declarators = v1.len() == v2.len()
                && v1
                    .iter()
                    .zip(v2)
                    .all(|(x, y)| x.name == y.name && same_type(x.ty.as_ref(), y.ty.as_ref()));
            same_declarators.then(|| {
                v1.iter()
                    .zip(v2)
                    .map(|(x, y)| expr_pair(x.initializer.as_ref(), y.initializer.as_ref()))
                    .collect()
            })
        }
        (StmtKind::Expression { expression: e1 }, StmtKind::Expression { expression: e2 }) => {
            Some(vec![expr_pair(Some(e1), Some(e2))])
        }
        (
            StmtKind::ExpressionList { expressions: e1 },
            StmtKind::ExpressionList { expressions: e2 },
        ) => list_pairs(e1, e2),
        (
            StmtKind::Assert {
                condition: c1,
                description: d1,
            },
            StmtKind::Assert {
                condition: c2,
                description: d2,
            },
        ) => Some(vec![
            expr_pair(c1.as_ref(), c2.as_ref()),
            expr_pair(d1.as_ref(), d2.as_ref()),
        ]),
        _ => None,
    }
}

fn same_type(a: Option<&TypeRef>, b: Option<&TypeRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_as(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operator::Operator;
    use crate::domain::symbol::{NoResolver, QualifiedName, Resolver, SymbolKind, SymbolRef};
    use crate::domain::tree::ReferenceExpr;

    #[test]
    fn test_exact_match() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let a = Expression::binary(Expression::name("a"), Operator::Plus, Expression::name("b"));
        assert!(checker.expressions_match(&a, &a.clone()).is_exact());
    }

    #[test]
    fn test_partial_match_reports_the_differing_operand() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = Expression::binary(
            Expression::name("a"),
            Operator::Plus,
            Expression::call("f", vec![Expression::name("x")]),
        );
        let right = Expression::binary(
            Expression::name("a"),
            Operator::Plus,
            Expression::call("f", vec![Expression::name("y")]),
        );
        let result = checker.expressions_match(&left, &right);
        assert!(result.is_partial());
        assert_eq!(result.diff_texts(), Some(("f(x)", "f(y)")));
    }

    #[test]
    fn test_two_differences_are_not_partial() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = Expression::binary(Expression::name("a"), Operator::Plus, Expression::name("b"));
        let right = Expression::binary(Expression::name("c"), Operator::Plus, Expression::name("d"));
        assert!(matches!(
            checker.expressions_match(&left, &right),
            Match::NonEquivalent
        ));
    }

    #[test]
    fn test_operator_mismatch_is_not_partial() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = Expression::binary(Expression::name("a"), Operator::Plus, Expression::name("b"));
        let right = Expression::binary(Expression::name("a"), Operator::Minus, Expression::name("c"));
        assert!(matches!(
            checker.expressions_match(&left, &right),
            Match::NonEquivalent
        ));
    }

    #[test]
    fn test_statement_partial_match_in_block() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let left = Statement::block(vec![
            Statement::expression(Expression::call("open", vec![])),
            Statement::expression(Expression::call("read", vec![])),
        ]);
        let right = Statement::block(vec![
            Statement::expression(Expression::call("open", vec![])),
            Statement::expression(Expression::call("write", vec![])),
        ]);
        let result = checker.statements_match(&left, &right);
        assert_eq!(result.diff_texts(), Some(("read();", "write();")));
    }

    /// Binds `symbol` keys of the form `Class#field` to fields of `Class`.
    struct KeyResolver;

    impl Resolver for KeyResolver {
        fn resolve(&self, reference: &ReferenceExpr) -> Option<SymbolRef> {
            let key = reference.symbol.clone()?;
            Some(SymbolRef {
                key,
                name: reference.name.clone(),
                kind: SymbolKind::Field,
            })
        }

        fn declaring_container(&self, symbol: &SymbolRef) -> Option<QualifiedName> {
            let (class, _) = symbol.key.split_once('#')?;
            Some(QualifiedName(class.to_string()))
        }
    }

    #[test]
    fn test_qualifier_difference_needs_the_same_member() {
        let checker = EquivalenceChecker::new(&KeyResolver);
        let p_x = Expression::field(Expression::name("p"), "x").bound_to("Point#x");
        let q_x = Expression::field(Expression::name("q"), "x").bound_to("Point#x");
        let q_shape_x = Expression::field(Expression::name("q"), "x").bound_to("Shape#x");

        let same_member = checker.expressions_match(&p_x, &q_x);
        assert_eq!(same_member.diff_texts(), Some(("p", "q")));

        assert!(matches!(
            checker.expressions_match(&p_x, &q_shape_x),
            Match::NonEquivalent
        ));
    }
}
