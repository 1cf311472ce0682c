// Source text synthesis.
// Produces Java-like text for nodes whose host did not record any, so that the
// text-based rules (literals, references, statement fallback) have something to compare.
// A child's recorded text always wins over re-rendering it.

use std::borrow::Cow;

use crate::domain::tree::{
    ChildMut, CodeBlock, ExprKind, Expression, Parameter, Statement, StmtKind,
};

/// Recorded text, or a rendering when the host left it empty.
pub(crate) fn expr_text(expr: &Expression) -> Cow<'_, str> {
    if expr.text.is_empty() {
        Cow::Owned(render_expression(expr))
    } else {
        Cow::Borrowed(&expr.text)
    }
}

fn opt_expr_text(expr: Option<&Expression>) -> Cow<'_, str> {
    expr.map(expr_text).unwrap_or(Cow::Borrowed(""))
}

fn stmt_text(stmt: &Statement) -> Cow<'_, str> {
    if stmt.text.is_empty() {
        Cow::Owned(render_statement(stmt))
    } else {
        Cow::Borrowed(&stmt.text)
    }
}

fn opt_stmt_text(stmt: Option<&Statement>) -> Cow<'_, str> {
    stmt.map(stmt_text).unwrap_or(Cow::Borrowed(""))
}

fn join(exprs: &[Expression]) -> String {
    exprs
        .iter()
        .map(|e| expr_text(e).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

fn block_text(block: Option<&CodeBlock>) -> String {
    match block {
        Some(block) if !block.statements.is_empty() => {
            let body: Vec<String> = block
                .statements
                .iter()
                .map(|s| stmt_text(s).into_owned())
                .collect();
            format!("{{ {} }}", body.join(" "))
        }
        _ => "{}".to_string(),
    }
}

fn parameter_text(parameter: &Parameter) -> String {
    match (&parameter.ty, &parameter.name) {
        (Some(ty), Some(name)) => format!("{} {}", ty.text, name),
        (Some(ty), None) => ty.text.clone(),
        (None, Some(name)) => name.clone(),
        (None, None) => String::new(),
    }
}

/// Header pieces of a `for` drop the statement terminator.
fn header_text(stmt: Option<&Statement>) -> String {
    opt_stmt_text(stmt).trim_end_matches(';').to_string()
}

/// Render an expression. Host extension kinds render as empty text.
pub fn render_expression(expr: &Expression) -> String {
    match &expr.kind {
        ExprKind::Literal { value } => value.clone(),
        ExprKind::This => "this".to_string(),
        ExprKind::Super => "super".to_string(),
        ExprKind::ClassLiteral { class_type } => format!("{}.class", class_type.text),
        ExprKind::Reference(reference) => match reference.qualifier.as_deref() {
            Some(qualifier) => format!("{}.{}", expr_text(qualifier), reference.name),
            None => reference.name.clone(),
        },
        ExprKind::MethodCall { method, arguments } => {
            format!("{}({})", expr_text(method), join(arguments))
        }
        ExprKind::New(new) => {
            let mut out = String::new();
            if let Some(qualifier) = new.qualifier.as_deref() {
                out.push_str(&expr_text(qualifier));
                out.push('.');
            }
            out.push_str("new ");
            if let Some(class_name) = &new.class_name {
                out.push_str(&class_name.text);
            }
            for dimension in &new.dimensions {
                out.push_str(&format!("[{}]", expr_text(dimension)));
            }
            if let Some(initializer) = new.initializer.as_deref() {
                if new.dimensions.is_empty() {
                    out.push_str("[]");
                }
                out.push(' ');
                out.push_str(&expr_text(initializer));
            }
            if let Some(arguments) = &new.arguments {
                out.push_str(&format!("({})", join(arguments)));
            }
            out
        }
        ExprKind::ArrayInit { elements } => format!("{{{}}}", join(elements)),
        ExprKind::TypeCast { cast_type, operand } => format!(
            "({}) {}",
            cast_type.as_ref().map(|t| t.text.as_str()).unwrap_or(""),
            opt_expr_text(operand.as_deref())
        ),
        ExprKind::ArrayAccess { array, index } => {
            format!("{}[{}]", expr_text(array), opt_expr_text(index.as_deref()))
        }
        ExprKind::Prefix { operator, operand } => {
            format!("{}{}", operator, opt_expr_text(operand.as_deref()))
        }
        ExprKind::Postfix { operator, operand } => format!("{}{}", expr_text(operand), operator),
        ExprKind::Binary { operator, lhs, rhs } | ExprKind::Assignment { operator, lhs, rhs } => {
            format!(
                "{} {} {}",
                expr_text(lhs),
                operator,
                opt_expr_text(rhs.as_deref())
            )
        }
        ExprKind::Conditional {
            condition,
            then_expr,
            else_expr,
        } => format!(
            "{} ? {} : {}",
            expr_text(condition),
            opt_expr_text(then_expr.as_deref()),
            opt_expr_text(else_expr.as_deref())
        ),
        ExprKind::InstanceOf {
            operand,
            checked_type,
        } => format!(
            "{} instanceof {}",
            expr_text(operand),
            checked_type.as_ref().map(|t| t.text.as_str()).unwrap_or("")
        ),
        ExprKind::Parenthesized { inner } => format!("({})", opt_expr_text(inner.as_deref())),
        ExprKind::Other { .. } => String::new(),
    }
}

/// Render a statement. Host extension kinds render as empty text.
pub fn render_statement(stmt: &Statement) -> String {
    match &stmt.kind {
        StmtKind::Block(block) => block_text(Some(block)),
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let mut out = format!(
                "if ({}) {}",
                opt_expr_text(condition.as_ref()),
                opt_stmt_text(then_branch.as_deref())
            );
            if let Some(else_branch) = else_branch.as_deref() {
                out.push_str(" else ");
                out.push_str(&stmt_text(else_branch));
            }
            out
        }
        StmtKind::While { condition, body } => format!(
            "while ({}) {}",
            opt_expr_text(condition.as_ref()),
            opt_stmt_text(body.as_deref())
        ),
        StmtKind::DoWhile { condition, body } => format!(
            "do {} while ({});",
            opt_stmt_text(body.as_deref()),
            opt_expr_text(condition.as_ref())
        ),
        StmtKind::For {
            initialization,
            condition,
            update,
            body,
        } => format!(
            "for ({}; {}; {}) {}",
            header_text(initialization.as_deref()),
            opt_expr_text(condition.as_ref()),
            header_text(update.as_deref()),
            opt_stmt_text(body.as_deref())
        ),
        StmtKind::ForEach {
            variable,
            iterated,
            body,
        } => format!(
            "for ({} : {}) {}",
            parameter_text(variable),
            opt_expr_text(iterated.as_ref()),
            opt_stmt_text(body.as_deref())
        ),
        StmtKind::Switch { selector, body } => format!(
            "switch ({}) {}",
            opt_expr_text(selector.as_ref()),
            block_text(body.as_ref())
        ),
        StmtKind::SwitchLabel {
            is_default,
            case_value,
        } => {
            if *is_default {
                "default:".to_string()
            } else {
                format!("case {}:", opt_expr_text(case_value.as_ref()))
            }
        }
        StmtKind::Return { value } => match value {
            Some(value) => format!("return {};", expr_text(value)),
            None => "return;".to_string(),
        },
        StmtKind::Throw { exception } => format!("throw {};", opt_expr_text(exception.as_ref())),
        StmtKind::Break { label } => match label {
            Some(label) => format!("break {};", label),
            None => "break;".to_string(),
        },
        StmtKind::Continue { label } => match label {
            Some(label) => format!("continue {};", label),
            None => "continue;".to_string(),
        },
        StmtKind::Labeled { label, body } => {
            format!("{}: {}", label, opt_stmt_text(body.as_deref()))
        }
        StmtKind::Try {
            try_block,
            catch_sections,
            finally_block,
        } => {
            let mut out = format!("try {}", block_text(try_block.as_ref()));
            for section in catch_sections {
                out.push_str(&format!(
                    " catch ({}) {}",
                    parameter_text(&section.parameter),
                    block_text(section.block.as_ref())
                ));
            }
            if let Some(finally_block) = finally_block {
                out.push_str(&format!(" finally {}", block_text(Some(finally_block))));
            }
            out
        }
        StmtKind::Synchronized { lock, body } => format!(
            "synchronized ({}) {}",
            opt_expr_text(lock.as_ref()),
            block_text(body.as_ref())
        ),
        StmtKind::Declaration { variables } => {
            let ty = variables
                .first()
                .and_then(|v| v.ty.as_ref())
                .map(|t| t.text.as_str())
                .unwrap_or("");
            let declarators: Vec<String> = variables
                .iter()
                .map(|v| {
                    let name = v.name.as_deref().unwrap_or("");
                    match &v.initializer {
                        Some(init) => format!("{} = {}", name, expr_text(init)),
                        None => name.to_string(),
                    }
                })
                .collect();
            format!("{} {};", ty, declarators.join(", "))
        }
        StmtKind::Expression { expression } => format!("{};", expr_text(expression)),
        StmtKind::ExpressionList { expressions } => format!("{};", join(expressions)),
        StmtKind::Assert {
            condition,
            description,
        } => match description {
            Some(description) => format!(
                "assert {} : {};",
                opt_expr_text(condition.as_ref()),
                expr_text(description)
            ),
            None => format!("assert {};", opt_expr_text(condition.as_ref())),
        },
        StmtKind::Empty => ";".to_string(),
        StmtKind::Other { .. } => String::new(),
    }
}

/// Fill every empty `text` in the tree, children first.
pub fn fill_expression_text(expr: &mut Expression) {
    for child in expr.children_mut() {
        fill_expression_text(child);
    }
    if expr.text.is_empty() {
        expr.text = render_expression(expr);
    }
}

/// Fill every empty `text` in the tree, children first.
pub fn fill_statement_text(stmt: &mut Statement) {
    for child in stmt.children_mut() {
        match child {
            ChildMut::Statement(s) => fill_statement_text(s),
            ChildMut::Expression(e) => fill_expression_text(e),
        }
    }
    if stmt.text.is_empty() {
        stmt.text = render_statement(stmt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::operator::Operator;
    use crate::domain::tree::{LocalVariable, ReferenceExpr, TypeRef};

    fn bare(kind: ExprKind) -> Expression {
        Expression {
            kind,
            text: String::new(),
        }
    }

    fn name(n: &str) -> Expression {
        bare(ExprKind::Reference(ReferenceExpr {
            qualifier: None,
            name: n.to_string(),
            symbol: None,
        }))
    }

    #[test]
    fn test_render_binary_and_call() {
        let call = bare(ExprKind::MethodCall {
            method: Box::new(name("foo")),
            arguments: vec![name("a"), name("b")],
        });
        assert_eq!(render_expression(&call), "foo(a, b)");

        let sum = bare(ExprKind::Binary {
            operator: Operator::Plus,
            lhs: Box::new(name("a")),
            rhs: Some(Box::new(name("b"))),
        });
        assert_eq!(render_expression(&sum), "a + b");
    }

    #[test]
    fn test_render_prefers_recorded_child_text() {
        let mut lhs = name("a");
        lhs.text = "a /* first */".to_string();
        let sum = bare(ExprKind::Binary {
            operator: Operator::Asterisk,
            lhs: Box::new(lhs),
            rhs: Some(Box::new(name("b"))),
        });
        assert_eq!(render_expression(&sum), "a /* first */ * b");
    }

    #[test]
    fn test_render_array_creation() {
        let new = bare(ExprKind::New(crate::domain::tree::NewExpr {
            class_name: Some(TypeRef::new("int")),
            dimensions: vec![name("n")],
            initializer: None,
            qualifier: None,
            arguments: None,
        }));
        assert_eq!(render_expression(&new), "new int[n]");
    }

    #[test]
    fn test_fill_statement_text_recurses() {
        let mut decl = Statement {
            kind: StmtKind::Declaration {
                variables: vec![LocalVariable {
                    name: Some("i".to_string()),
                    ty: Some(TypeRef::new("int")),
                    initializer: Some(bare(ExprKind::Literal {
                        value: "0".to_string(),
                    })),
                }],
            },
            text: String::new(),
        };
        fill_statement_text(&mut decl);
        assert_eq!(decl.text, "int i = 0;");
        if let StmtKind::Declaration { variables } = &decl.kind {
            assert_eq!(variables[0].initializer.as_ref().unwrap().text, "0");
        }
    }

    #[test]
    fn test_other_kinds_render_empty() {
        let other = Statement {
            kind: StmtKind::Other {
                name: "yield".to_string(),
            },
            text: String::new(),
        };
        assert_eq!(render_statement(&other), "");
    }
}
