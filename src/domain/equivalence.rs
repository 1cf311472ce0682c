//! Structural equivalence of expression and statement trees.
//!
//! Two fragments are equivalent when they have the same shape, the same operator
//! tokens, and references that bind to the same declarations. This is syntactic
//! congruence, not semantic equality: `a + b` and `b + a` are *not* equivalent.
//! The checker may miss equal computations but never pairs different ones.
//!
//! Every predicate is total. Absent/absent is equivalent, absent/present is not,
//! and a kind mismatch is never equivalent. Unknown expression kinds are never
//! equivalent; unknown statement kinds fall back to identical source text.

use tracing::trace;

use crate::domain::render::expr_text;
use crate::domain::symbol::{Resolver, SymbolRef};
use crate::domain::tree::{
    CodeBlock, ExprKind, Expression, Parameter, ReferenceExpr, Statement, StmtKind, TypeRef,
};

/// The equivalence engine. Borrows an injected resolver, holds nothing else.
#[derive(Clone, Copy)]
pub struct EquivalenceChecker<'a> {
    resolver: &'a dyn Resolver,
}

impl<'a> EquivalenceChecker<'a> {
    pub fn new(resolver: &'a dyn Resolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &'a dyn Resolver {
        self.resolver
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    pub fn statements_equivalent(&self, a: Option<&Statement>, b: Option<&Statement>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.statement_pair(a, b),
            _ => false,
        }
    }

    fn boxed_statements_equivalent(
        &self,
        a: &Option<Box<Statement>>,
        b: &Option<Box<Statement>>,
    ) -> bool {
        self.statements_equivalent(a.as_deref(), b.as_deref())
    }

    /// Same statement count and pairwise equivalent, in order.
    pub fn code_blocks_equivalent(&self, a: Option<&CodeBlock>, b: Option<&CodeBlock>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.statements.len() == b.statements.len()
                    && a.statements
                        .iter()
                        .zip(&b.statements)
                        .all(|(x, y)| self.statement_pair(x, y))
            }
            _ => false,
        }
    }

    fn statement_pair(&self, a: &Statement, b: &Statement) -> bool {
        let equivalent = match &a.kind {
            StmtKind::Block(block_a) => {
                let StmtKind::Block(block_b) = &b.kind else { return false };
                self.code_blocks_equivalent(Some(block_a), Some(block_b))
            }
            StmtKind::If {
                condition: c1,
                then_branch: t1,
                else_branch: e1,
            } => {
                let StmtKind::If {
                    condition: c2,
                    then_branch: t2,
                    else_branch: e2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(c1.as_ref(), c2.as_ref())
                    && self.boxed_statements_equivalent(t1, t2)
                    && self.boxed_statements_equivalent(e1, e2)
            }
            StmtKind::While {
                condition: c1,
                body: b1,
            } => {
                let StmtKind::While {
                    condition: c2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(c1.as_ref(), c2.as_ref())
                    && self.boxed_statements_equivalent(b1, b2)
            }
            StmtKind::DoWhile {
                condition: c1,
                body: b1,
            } => {
                let StmtKind::DoWhile {
                    condition: c2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(c1.as_ref(), c2.as_ref())
                    && self.boxed_statements_equivalent(b1, b2)
            }
            StmtKind::For {
                initialization: i1,
                condition: c1,
                update: u1,
                body: b1,
            } => {
                let StmtKind::For {
                    initialization: i2,
                    condition: c2,
                    update: u2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(c1.as_ref(), c2.as_ref())
                    && self.boxed_statements_equivalent(i1, i2)
                    && self.boxed_statements_equivalent(u1, u2)
                    && self.boxed_statements_equivalent(b1, b2)
            }
            StmtKind::ForEach {
                variable: v1,
                iterated: it1,
                body: b1,
            } => {
                let StmtKind::ForEach {
                    variable: v2,
                    iterated: it2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(it1.as_ref(), it2.as_ref())
                    && self.parameters_equivalent(v1, v2)
                    && self.boxed_statements_equivalent(b1, b2)
            }
            StmtKind::Switch {
                selector: s1,
                body: b1,
            } => {
                let StmtKind::Switch {
                    selector: s2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(s1.as_ref(), s2.as_ref())
                    && self.code_blocks_equivalent(b1.as_ref(), b2.as_ref())
            }
            StmtKind::SwitchLabel {
                is_default: d1,
                case_value: v1,
            } => {
                let StmtKind::SwitchLabel {
                    is_default: d2,
                    case_value: v2,
                } = &b.kind
                else {
                    return false;
                };
                match (*d1, *d2) {
                    (true, true) => true,
                    (false, false) => self.expressions_equivalent(v1.as_ref(), v2.as_ref()),
                    _ => false,
                }
            }
            StmtKind::Return { value: v1 } => {
                let StmtKind::Return { value: v2 } = &b.kind else { return false };
                self.expressions_equivalent(v1.as_ref(), v2.as_ref())
            }
            StmtKind::Throw { exception: e1 } => {
                let StmtKind::Throw { exception: e2 } = &b.kind else { return false };
                self.expressions_equivalent(e1.as_ref(), e2.as_ref())
            }
            StmtKind::Break { label: l1 } => {
                let StmtKind::Break { label: l2 } = &b.kind else { return false };
                l1 == l2
            }
            StmtKind::Continue { label: l1 } => {
                let StmtKind::Continue { label: l2 } = &b.kind else { return false };
                l1 == l2
            }
            StmtKind::Labeled {
                label: l1,
                body: b1,
            } => {
                let StmtKind::Labeled {
                    label: l2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                // The body is compared as well: same label alone does not make
                // `l: a();` and `l: b();` interchangeable.
                l1 == l2 && self.boxed_statements_equivalent(b1, b2)
            }
            StmtKind::Try {
                try_block: t1,
                catch_sections: c1,
                finally_block: f1,
            } => {
                let StmtKind::Try {
                    try_block: t2,
                    catch_sections: c2,
                    finally_block: f2,
                } = &b.kind
                else {
                    return false;
                };
                self.code_blocks_equivalent(t1.as_ref(), t2.as_ref())
                    && self.code_blocks_equivalent(f1.as_ref(), f2.as_ref())
                    && c1.len() == c2.len()
                    && c1.iter().zip(c2).all(|(x, y)| {
                        self.code_blocks_equivalent(x.block.as_ref(), y.block.as_ref())
                            && self.parameters_equivalent(&x.parameter, &y.parameter)
                    })
            }
            StmtKind::Synchronized {
                lock: l1,
                body: b1,
            } => {
                let StmtKind::Synchronized {
                    lock: l2,
                    body: b2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(l1.as_ref(), l2.as_ref())
                    && self.code_blocks_equivalent(b1.as_ref(), b2.as_ref())
            }
            StmtKind::Declaration { variables: v1 } => {
                let StmtKind::Declaration { variables: v2 } = &b.kind else { return false };
                v1.len() == v2.len()
                    && v1.iter().zip(v2).all(|(x, y)| {
                        types_equivalent(x.ty.as_ref(), y.ty.as_ref())
                            && x.name == y.name
                            && self.expressions_equivalent(
                                x.initializer.as_ref(),
                                y.initializer.as_ref(),
                            )
                    })
            }
            StmtKind::Expression { expression: e1 } => {
                let StmtKind::Expression { expression: e2 } = &b.kind else { return false };
                self.expressions_equivalent(Some(e1), Some(e2))
            }
            StmtKind::ExpressionList { expressions: e1 } => {
                let StmtKind::ExpressionList { expressions: e2 } = &b.kind else { return false };
                self.expression_lists_equivalent(e1, e2)
            }
            StmtKind::Assert {
                condition: c1,
                description: d1,
            } => {
                let StmtKind::Assert {
                    condition: c2,
                    description: d2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(c1.as_ref(), c2.as_ref())
                    && self.expressions_equivalent(d1.as_ref(), d2.as_ref())
            }
            StmtKind::Empty => matches!(b.kind, StmtKind::Empty),
            // An extension statement without recorded text has nothing to compare.
            StmtKind::Other { .. } => {
                matches!(b.kind, StmtKind::Other { .. }) && !a.text.is_empty() && a.text == b.text
            }
        };
        trace!(kind = a.kind.name(), equivalent, "compared statements");
        equivalent
    }

    /// Loop variables and catch parameters: equal names, equivalent types.
    fn parameters_equivalent(&self, a: &Parameter, b: &Parameter) -> bool {
        a.name == b.name && types_equivalent(a.ty.as_ref(), b.ty.as_ref())
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn expressions_equivalent(&self, a: Option<&Expression>, b: Option<&Expression>) -> bool {
        let a = a.and_then(Expression::strip_parentheses);
        let b = b.and_then(Expression::strip_parentheses);
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.expression_pair(a, b),
            _ => false,
        }
    }

    fn boxed_expressions_equivalent(
        &self,
        a: &Option<Box<Expression>>,
        b: &Option<Box<Expression>>,
    ) -> bool {
        self.expressions_equivalent(a.as_deref(), b.as_deref())
    }

    /// Same length and pairwise equivalent, in order.
    pub fn expression_lists_equivalent(&self, a: &[Expression], b: &[Expression]) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| self.expressions_equivalent(Some(x), Some(y)))
    }

    fn optional_lists_equivalent(
        &self,
        a: Option<&[Expression]>,
        b: Option<&[Expression]>,
    ) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.expression_lists_equivalent(a, b),
            _ => false,
        }
    }

    /// Both sides are already stripped of parentheses.
    fn expression_pair(&self, a: &Expression, b: &Expression) -> bool {
        let equivalent = match &a.kind {
            ExprKind::This => matches!(b.kind, ExprKind::This),
            ExprKind::Super => matches!(b.kind, ExprKind::Super),
            ExprKind::Literal { value: v1 } => {
                matches!(&b.kind, ExprKind::Literal { value: v2 } if v1 == v2)
            }
            ExprKind::ClassLiteral { class_type: t1 } => {
                matches!(&b.kind, ExprKind::ClassLiteral { class_type: t2 } if t1.text == t2.text)
            }
            ExprKind::Reference(ref_a) => {
                let ExprKind::Reference(ref_b) = &b.kind else { return false };
                self.references_equivalent(a, ref_a, b, ref_b)
            }
            ExprKind::MethodCall {
                method: m1,
                arguments: args1,
            } => {
                let ExprKind::MethodCall {
                    method: m2,
                    arguments: args2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(Some(m1), Some(m2))
                    && self.expression_lists_equivalent(args1, args2)
            }
            ExprKind::New(n1) => {
                let ExprKind::New(n2) = &b.kind else { return false };
                types_equivalent(n1.class_name.as_ref(), n2.class_name.as_ref())
                    && self.expression_lists_equivalent(&n1.dimensions, &n2.dimensions)
                    && self.boxed_expressions_equivalent(&n1.initializer, &n2.initializer)
                    && self.boxed_expressions_equivalent(&n1.qualifier, &n2.qualifier)
                    && self.optional_lists_equivalent(
                        n1.arguments.as_deref(),
                        n2.arguments.as_deref(),
                    )
            }
            ExprKind::ArrayInit { elements: e1 } => {
                let ExprKind::ArrayInit { elements: e2 } = &b.kind else { return false };
                self.expression_lists_equivalent(e1, e2)
            }
            ExprKind::TypeCast {
                cast_type: t1,
                operand: o1,
            } => {
                let ExprKind::TypeCast {
                    cast_type: t2,
                    operand: o2,
                } = &b.kind
                else {
                    return false;
                };
                types_equivalent(t1.as_ref(), t2.as_ref())
                    && self.boxed_expressions_equivalent(o1, o2)
            }
            ExprKind::ArrayAccess {
                array: a1,
                index: i1,
            } => {
                let ExprKind::ArrayAccess {
                    array: a2,
                    index: i2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(Some(a1), Some(a2))
                    && self.boxed_expressions_equivalent(i1, i2)
            }
            ExprKind::Prefix {
                operator: op1,
                operand: o1,
            } => {
                let ExprKind::Prefix {
                    operator: op2,
                    operand: o2,
                } = &b.kind
                else {
                    return false;
                };
                op1 == op2 && self.boxed_expressions_equivalent(o1, o2)
            }
            ExprKind::Postfix {
                operator: op1,
                operand: o1,
            } => {
                let ExprKind::Postfix {
                    operator: op2,
                    operand: o2,
                } = &b.kind
                else {
                    return false;
                };
                op1 == op2 && self.expressions_equivalent(Some(o1), Some(o2))
            }
            ExprKind::Binary {
                operator: op1,
                lhs: l1,
                rhs: r1,
            } => {
                let ExprKind::Binary {
                    operator: op2,
                    lhs: l2,
                    rhs: r2,
                } = &b.kind
                else {
                    return false;
                };
                op1 == op2
                    && self.expressions_equivalent(Some(l1), Some(l2))
                    && self.boxed_expressions_equivalent(r1, r2)
            }
            ExprKind::Assignment {
                operator: op1,
                lhs: l1,
                rhs: r1,
            } => {
                let ExprKind::Assignment {
                    operator: op2,
                    lhs: l2,
                    rhs: r2,
                } = &b.kind
                else {
                    return false;
                };
                op1 == op2
                    && self.expressions_equivalent(Some(l1), Some(l2))
                    && self.boxed_expressions_equivalent(r1, r2)
            }
            ExprKind::Conditional {
                condition: c1,
                then_expr: t1,
                else_expr: e1,
            } => {
                let ExprKind::Conditional {
                    condition: c2,
                    then_expr: t2,
                    else_expr: e2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(Some(c1), Some(c2))
                    && self.boxed_expressions_equivalent(t1, t2)
                    && self.boxed_expressions_equivalent(e1, e2)
            }
            ExprKind::InstanceOf {
                operand: o1,
                checked_type: t1,
            } => {
                let ExprKind::InstanceOf {
                    operand: o2,
                    checked_type: t2,
                } = &b.kind
                else {
                    return false;
                };
                self.expressions_equivalent(Some(o1), Some(o2))
                    && types_equivalent(t1.as_ref(), t2.as_ref())
            }
            // Callers strip parentheses first; a bare one here only wraps nothing.
            ExprKind::Parenthesized { .. } => false,
            ExprKind::Other { .. } => false,
        };
        trace!(kind = a.kind.name(), equivalent, "compared expressions");
        equivalent
    }

    /// Field references are equal when they name the same member of the same
    /// container, however they are qualified. Anything else compares by text.
    fn references_equivalent(
        &self,
        a: &Expression,
        ref_a: &ReferenceExpr,
        b: &Expression,
        ref_b: &ReferenceExpr,
    ) -> bool {
        let qualifier_a = explicit_qualifier(ref_a);
        let qualifier_b = explicit_qualifier(ref_b);
        if (qualifier_a.is_some() || qualifier_b.is_some())
            && !self.expressions_equivalent(qualifier_a, qualifier_b)
        {
            return false;
        }

        match (self.resolve_field(ref_a), self.resolve_field(ref_b)) {
            (Some(field_a), Some(field_b)) => {
                field_a.name == field_b.name
                    && self.resolver.declaring_container(&field_a)
                        == self.resolver.declaring_container(&field_b)
            }
            _ => expr_text(a) == expr_text(b),
        }
    }

    fn resolve_field(&self, reference: &ReferenceExpr) -> Option<SymbolRef> {
        self.resolver
            .resolve(reference)
            .filter(SymbolRef::is_field)
    }
}

/// The qualifier that actually selects an object; `this`/`super` select the
/// implicit receiver and count as no qualifier at all.
fn explicit_qualifier(reference: &ReferenceExpr) -> Option<&Expression> {
    reference
        .qualifier
        .as_deref()
        .filter(|qualifier| !qualifier.is_this_or_super())
}

fn types_equivalent(a: Option<&TypeRef>, b: Option<&TypeRef>) -> bool {
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
    use crate::domain::symbol::{NoResolver, QualifiedName, SymbolKind};

    /// Resolves `x` to a field of `Point`, everything else to locals.
    struct PointResolver;

    impl Resolver for PointResolver {
        fn resolve(&self, reference: &ReferenceExpr) -> Option<SymbolRef> {
            let kind = if reference.name == "x" {
                SymbolKind::Field
            } else {
                SymbolKind::LocalVariable
            };
            Some(SymbolRef {
                key: reference.name.clone(),
                name: reference.name.clone(),
                kind,
            })
        }

        fn declaring_container(&self, symbol: &SymbolRef) -> Option<QualifiedName> {
            symbol
                .is_field()
                .then(|| QualifiedName("com.acme.Point".to_string()))
        }
    }

    #[test]
    fn test_absent_inputs() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let e = Expression::name("a");
        assert!(checker.expressions_equivalent(None, None));
        assert!(!checker.expressions_equivalent(Some(&e), None));
        assert!(!checker.expressions_equivalent(None, Some(&e)));
        assert!(checker.statements_equivalent(None, None));
        assert!(!checker.statements_equivalent(Some(&Statement::empty()), None));
    }

    #[test]
    fn test_binary_operator_and_order() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let a_plus_b = Expression::binary(Expression::name("a"), Operator::Plus, Expression::name("b"));
        let again = Expression::binary(Expression::name("a"), Operator::Plus, Expression::name("b"));
        let b_plus_a = Expression::binary(Expression::name("b"), Operator::Plus, Expression::name("a"));
        let a_minus_b = Expression::binary(Expression::name("a"), Operator::Minus, Expression::name("b"));
        assert!(checker.expressions_equivalent(Some(&a_plus_b), Some(&again)));
        assert!(!checker.expressions_equivalent(Some(&a_plus_b), Some(&b_plus_a)));
        assert!(!checker.expressions_equivalent(Some(&a_plus_b), Some(&a_minus_b)));
    }

    #[test]
    fn test_parentheses_are_transparent() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let plain = Expression::name("a");
        let wrapped = Expression::parenthesized(Expression::parenthesized(Expression::name("a")));
        assert!(checker.expressions_equivalent(Some(&plain), Some(&wrapped)));
        assert!(checker.expressions_equivalent(Some(&wrapped), Some(&plain)));
    }

    #[test]
    fn test_this_qualified_field_matches_implicit() {
        let checker = EquivalenceChecker::new(&PointResolver);
        let explicit = Expression::field(Expression::this(), "x");
        let implicit = Expression::name("x");
        assert!(checker.expressions_equivalent(Some(&explicit), Some(&implicit)));
        assert!(checker.expressions_equivalent(Some(&implicit), Some(&explicit)));
    }

    #[test]
    fn test_this_qualified_local_falls_back_to_text() {
        // `y` is not a field, so only the text decides.
        let checker = EquivalenceChecker::new(&PointResolver);
        let explicit = Expression::field(Expression::this(), "y");
        let implicit = Expression::name("y");
        assert!(!checker.expressions_equivalent(Some(&explicit), Some(&implicit)));
    }

    #[test]
    fn test_real_qualifier_must_match() {
        let checker = EquivalenceChecker::new(&PointResolver);
        let p_x = Expression::field(Expression::name("p"), "x");
        let q_x = Expression::field(Expression::name("q"), "x");
        let x = Expression::name("x");
        assert!(!checker.expressions_equivalent(Some(&p_x), Some(&q_x)));
        assert!(!checker.expressions_equivalent(Some(&p_x), Some(&x)));
        assert!(checker.expressions_equivalent(
            Some(&p_x),
            Some(&Expression::field(Expression::name("p"), "x"))
        ));
    }

    #[test]
    fn test_unknown_expression_kind_is_never_equivalent() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let lambda = Expression::other("lambda", "() -> 1");
        assert!(!checker.expressions_equivalent(Some(&lambda), Some(&lambda.clone())));
    }

    #[test]
    fn test_unknown_statement_kind_falls_back_to_text() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let first = Statement::other("yield", "yield 1;");
        let same = Statement::other("yield", "yield 1;");
        let spaced = Statement::other("yield", "yield  1;");
        assert!(checker.statements_equivalent(Some(&first), Some(&same)));
        assert!(!checker.statements_equivalent(Some(&first), Some(&spaced)));
    }

    #[test]
    fn test_labeled_compares_body() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let a = Statement::labeled("l", Statement::expression(Expression::call("a", vec![])));
        let b = Statement::labeled("l", Statement::expression(Expression::call("b", vec![])));
        assert!(!checker.statements_equivalent(Some(&a), Some(&b)));
        assert!(checker.statements_equivalent(Some(&a), Some(&a.clone())));
    }

    #[test]
    fn test_switch_labels() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let default = Statement::default_label();
        let case_one = Statement::case_label(Expression::literal("1"));
        assert!(checker.statements_equivalent(Some(&default), Some(&Statement::default_label())));
        assert!(!checker.statements_equivalent(Some(&default), Some(&case_one)));
        assert!(checker.statements_equivalent(
            Some(&case_one),
            Some(&Statement::case_label(Expression::literal("1")))
        ));
        assert!(!checker.statements_equivalent(
            Some(&case_one),
            Some(&Statement::case_label(Expression::literal("2")))
        ));
    }

    fn expr(json: &str) -> Expression {
        serde_json::from_str(json).unwrap()
    }

    fn stmt(json: &str) -> Statement {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_untexted_nodes_compare_by_content() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let one = expr(r#"{ "kind": "literal", "value": "1" }"#);
        let two = expr(r#"{ "kind": "literal", "value": "2" }"#);
        assert!(one.text.is_empty());
        assert!(!checker.expressions_equivalent(Some(&one), Some(&two)));
        assert!(checker.expressions_equivalent(Some(&one), Some(&one.clone())));

        let a = expr(r#"{ "kind": "reference", "name": "a" }"#);
        let b = expr(r#"{ "kind": "reference", "name": "b" }"#);
        assert!(!checker.expressions_equivalent(Some(&a), Some(&b)));
        assert!(checker.expressions_equivalent(Some(&a), Some(&a.clone())));

        let this_y = expr(r#"{ "kind": "reference", "qualifier": { "kind": "this" }, "name": "y" }"#);
        let y = expr(r#"{ "kind": "reference", "name": "y" }"#);
        assert!(!checker.expressions_equivalent(Some(&this_y), Some(&y)));

        let list = expr(r#"{ "kind": "class_literal", "class_type": "java.util.List" }"#);
        let set = expr(r#"{ "kind": "class_literal", "class_type": "java.util.Set" }"#);
        assert!(!checker.expressions_equivalent(Some(&list), Some(&set)));

        let return_one = stmt(r#"{ "kind": "return", "value": { "kind": "literal", "value": "1" } }"#);
        let return_two = stmt(r#"{ "kind": "return", "value": { "kind": "literal", "value": "2" } }"#);
        assert!(!checker.statements_equivalent(Some(&return_one), Some(&return_two)));
    }

    #[test]
    fn test_untexted_extension_statement_is_never_equivalent() {
        let checker = EquivalenceChecker::new(&NoResolver);
        let first = stmt(r#"{ "kind": "other", "name": "yield" }"#);
        let second = stmt(r#"{ "kind": "other", "name": "yield" }"#);
        assert!(!checker.statements_equivalent(Some(&first), Some(&second)));
    }
}
