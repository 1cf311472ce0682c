//! Identical-branches inspection.
//!
//! Reports, at any depth inside a fragment:
//! - `if (c) A else B` and `c ? a : b` with equivalent branches,
//! - `if (a) A else if (b) A ...`, where an else-if branch repeats the `if` branch,
//! - `if` branches that start or end with the same statements,
//! - `if (c) { A; return; } A; return;`, where the code after an exiting `if`
//!   repeats its branch.

use rayon::prelude::*;

use crate::application::report::{Finding, FindingKind};
use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::fragment::{Fragment, NamedFragment};
use crate::domain::tree::{Child, CodeBlock, ExprKind, Expression, Statement, StmtKind};

/// Statements of a branch, looking through one level of braces.
fn unwrap_branch(stmt: &Statement) -> &[Statement] {
    match &stmt.kind {
        StmtKind::Block(block) => &block.statements,
        _ => std::slice::from_ref(stmt),
    }
}

/// Code blocks owned directly by a statement, where sibling order matters.
fn owned_blocks(stmt: &Statement) -> Vec<&CodeBlock> {
    match &stmt.kind {
        StmtKind::Block(block) => vec![block],
        StmtKind::Try {
            try_block,
            catch_sections,
            finally_block,
        } => try_block
            .iter()
            .chain(catch_sections.iter().filter_map(|c| c.block.as_ref()))
            .chain(finally_block.iter())
            .collect(),
        StmtKind::Synchronized { body, .. } | StmtKind::Switch { body, .. } => body.iter().collect(),
        _ => Vec::new(),
    }
}

fn exits(stmt: &Statement) -> bool {
    matches!(stmt.kind, StmtKind::Return { .. } | StmtKind::Continue { .. })
}

struct BranchWalker<'c, 'a> {
    checker: &'c EquivalenceChecker<'a>,
    fragment: &'c str,
    findings: Vec<Finding>,
}

impl<'c, 'a> BranchWalker<'c, 'a> {
    fn report(&mut self, kind: FindingKind, text: &str) {
        self.findings.push(Finding {
            fragment: self.fragment.to_string(),
            kind,
            text: text.to_string(),
        });
    }

    fn branches_equivalent(&self, a: &[Statement], b: &[Statement]) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| self.checker.statements_equivalent(Some(x), Some(y)))
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        if let StmtKind::If {
            condition,
            then_branch: Some(then_branch),
            else_branch: Some(else_branch),
        } = &stmt.kind
        {
            if condition.is_some() {
                self.inspect_if_else(stmt, then_branch, else_branch);
            }
        }
        for block in owned_blocks(stmt) {
            self.inspect_implicit_else(&block.statements);
        }
        for child in stmt.children() {
            match child {
                Child::Statement(s) => self.visit_statement(s),
                Child::Expression(e) => self.visit_expression(e),
            }
        }
    }

    fn inspect_if_else(&mut self, stmt: &Statement, then_branch: &Statement, else_branch: &Statement) {
        let then_stmts = unwrap_branch(then_branch);
        let else_stmts = unwrap_branch(else_branch);
        if self.branches_equivalent(then_stmts, else_stmts) {
            self.report(FindingKind::IdenticalIfBranches, &stmt.text);
            return;
        }

        if let [nested] = else_stmts {
            if let StmtKind::If {
                condition: Some(_),
                then_branch: Some(nested_then),
                else_branch: Some(nested_else),
            } = &nested.kind
            {
                if self.branches_equivalent(then_stmts, unwrap_branch(nested_then))
                    || self.branches_equivalent(then_stmts, unwrap_branch(nested_else))
                {
                    self.report(FindingKind::IdenticalElseIfBranches, &stmt.text);
                }
            }
        }

        let head = then_stmts
            .iter()
            .zip(else_stmts)
            .take_while(|&(x, y)| self.checker.statements_equivalent(Some(x), Some(y)))
            .count();
        let room = then_stmts.len().min(else_stmts.len()) - head;
        let tail = then_stmts
            .iter()
            .rev()
            .zip(else_stmts.iter().rev())
            .take(room)
            .take_while(|&(x, y)| self.checker.statements_equivalent(Some(x), Some(y)))
            .count();
        if head > 0 {
            self.report(FindingKind::CommonHeadStatements, &stmt.text);
        }
        if tail > 0 {
            self.report(FindingKind::CommonTailStatements, &stmt.text);
        }
    }

    /// An `if` without `else` whose branch ends in `return`/`continue` and
    /// equals everything after it in the same block.
    fn inspect_implicit_else(&mut self, statements: &[Statement]) {
        for (k, stmt) in statements.iter().enumerate() {
            let StmtKind::If {
                then_branch: Some(then_branch),
                else_branch: None,
                ..
            } = &stmt.kind
            else {
                continue;
            };
            let then_stmts = unwrap_branch(then_branch);
            if !then_stmts.last().is_some_and(exits) {
                continue;
            }
            let rest = &statements[k + 1..];
            if let [only] = rest {
                if matches!(only.kind, StmtKind::Return { value: None }) {
                    continue;
                }
            }
            if !rest.is_empty() && self.branches_equivalent(then_stmts, rest) {
                self.report(FindingKind::ImplicitElseDuplicate, &stmt.text);
            }
        }
    }

    fn visit_expression(&mut self, expr: &Expression) {
        if let ExprKind::Conditional {
            then_expr: Some(then_expr),
            else_expr: Some(else_expr),
            ..
        } = &expr.kind
        {
            if self
                .checker
                .expressions_equivalent(Some(then_expr.as_ref()), Some(else_expr.as_ref()))
            {
                self.report(FindingKind::IdenticalConditionalBranches, &expr.text);
            }
        }
        for child in expr.children() {
            self.visit_expression(child);
        }
    }
}

/// Findings for one fragment, outermost first.
pub fn identical_branches(checker: &EquivalenceChecker<'_>, fragment: &NamedFragment) -> Vec<Finding> {
    let mut walker = BranchWalker {
        checker,
        fragment: &fragment.name,
        findings: Vec::new(),
    };
    match &fragment.body {
        Fragment::Statement(s) => walker.visit_statement(s),
        Fragment::Expression(e) => walker.visit_expression(e),
    }
    walker.findings
}

/// Findings for all fragments, in fragment order.
pub fn inspect_all(checker: &EquivalenceChecker<'_>, fragments: &[NamedFragment]) -> Vec<Finding> {
    fragments
        .par_iter()
        .map(|fragment| identical_branches(checker, fragment))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
