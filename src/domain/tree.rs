// Syntax tree model for the equivalence engine.
// Expressions and statements of a Java-like language, as handed over by the host.
// Every node keeps the source text it was parsed from.

use crate::domain::operator::Operator;
use serde::{Deserialize, Serialize};

/// A type as written in source (`int[]`, `java.util.List<String>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    pub text: String,
}

impl TypeRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Whitespace carries no meaning inside a type, `Map<K, V>` is `Map<K,V>`.
    pub fn same_as(&self, other: &TypeRef) -> bool {
        let mut lhs = self.text.chars().filter(|c| !c.is_whitespace());
        let mut rhs = other.text.chars().filter(|c| !c.is_whitespace());
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(l), Some(r)) if l == r => continue,
                _ => return false,
            }
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expression {
    #[serde(flatten)]
    pub kind: ExprKind,
    /// Original source text of the whole expression.
    #[serde(default)]
    pub text: String,
}

/// A variable, field or method reference, optionally qualified (`obj.field`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceExpr {
    pub qualifier: Option<Box<Expression>>,
    pub name: String,
    /// Host-assigned key of the declaration this reference binds to, if known.
    pub symbol: Option<String>,
}

/// `new` expression: object creation or array creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpr {
    pub class_name: Option<TypeRef>,
    /// Array dimension expressions, `new int[n][m]`.
    #[serde(default)]
    pub dimensions: Vec<Expression>,
    /// Array initializer, `new int[] {1, 2}`.
    pub initializer: Option<Box<Expression>>,
    /// Outer instance, `outer.new Inner()`.
    pub qualifier: Option<Box<Expression>>,
    /// Constructor arguments; absent for array creation.
    pub arguments: Option<Vec<Expression>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExprKind {
    Literal {
        /// Raw token as written, e.g. `0x1F`.
        value: String,
    },
    This,
    Super,
    ClassLiteral {
        class_type: TypeRef,
    },
    Reference(ReferenceExpr),
    MethodCall {
        method: Box<Expression>,
        #[serde(default)]
        arguments: Vec<Expression>,
    },
    New(NewExpr),
    ArrayInit {
        #[serde(default)]
        elements: Vec<Expression>,
    },
    TypeCast {
        cast_type: Option<TypeRef>,
        operand: Option<Box<Expression>>,
    },
    ArrayAccess {
        array: Box<Expression>,
        index: Option<Box<Expression>>,
    },
    Prefix {
        operator: Operator,
        operand: Option<Box<Expression>>,
    },
    Postfix {
        operator: Operator,
        operand: Box<Expression>,
    },
    Binary {
        operator: Operator,
        lhs: Box<Expression>,
        rhs: Option<Box<Expression>>,
    },
    Assignment {
        operator: Operator,
        lhs: Box<Expression>,
        rhs: Option<Box<Expression>>,
    },
    Conditional {
        condition: Box<Expression>,
        then_expr: Option<Box<Expression>>,
        else_expr: Option<Box<Expression>>,
    },
    InstanceOf {
        operand: Box<Expression>,
        checked_type: Option<TypeRef>,
    },
    Parenthesized {
        inner: Option<Box<Expression>>,
    },
    /// Host extension kind the engine has no rule for.
    Other {
        name: String,
    },
}

impl Expression {
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Skip any nesting of parentheses. `()` with nothing inside yields `None`.
    pub fn strip_parentheses(&self) -> Option<&Expression> {
        let mut current = self;
        while let ExprKind::Parenthesized { inner } = &current.kind {
            current = inner.as_deref()?;
        }
        Some(current)
    }

    /// `this` or `super`, possibly parenthesized.
    pub fn is_this_or_super(&self) -> bool {
        matches!(
            self.strip_parentheses().map(|e| &e.kind),
            Some(ExprKind::This | ExprKind::Super)
        )
    }

    /// Direct sub-expressions in source order.
    pub fn children(&self) -> Vec<&Expression> {
        let mut out: Vec<&Expression> = Vec::new();
        match &self.kind {
            ExprKind::Literal { .. }
            | ExprKind::This
            | ExprKind::Super
            | ExprKind::ClassLiteral { .. }
            | ExprKind::Other { .. } => {}
            ExprKind::Reference(reference) => out.extend(reference.qualifier.as_deref()),
            ExprKind::MethodCall { method, arguments } => {
                out.push(method);
                out.extend(arguments.iter());
            }
            ExprKind::New(new) => {
                out.extend(new.qualifier.as_deref());
                out.extend(new.dimensions.iter());
                out.extend(new.arguments.iter().flatten());
                out.extend(new.initializer.as_deref());
            }
            ExprKind::ArrayInit { elements } => out.extend(elements.iter()),
            ExprKind::TypeCast { operand, .. } => out.extend(operand.as_deref()),
            ExprKind::ArrayAccess { array, index } => {
                out.push(array);
                out.extend(index.as_deref());
            }
            ExprKind::Prefix { operand, .. } => out.extend(operand.as_deref()),
            ExprKind::Postfix { operand, .. } => out.push(operand),
            ExprKind::Binary { lhs, rhs, .. } | ExprKind::Assignment { lhs, rhs, .. } => {
                out.push(lhs);
                out.extend(rhs.as_deref());
            }
            ExprKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                out.push(condition);
                out.extend(then_expr.as_deref());
                out.extend(else_expr.as_deref());
            }
            ExprKind::InstanceOf { operand, .. } => out.push(operand),
            ExprKind::Parenthesized { inner } => out.extend(inner.as_deref()),
        }
        out
    }

    /// Mutable counterpart of [`Expression::children`], same order.
    pub fn children_mut(&mut self) -> Vec<&mut Expression> {
        let mut out: Vec<&mut Expression> = Vec::new();
        match &mut self.kind {
            ExprKind::Literal { .. }
            | ExprKind::This
            | ExprKind::Super
            | ExprKind::ClassLiteral { .. }
            | ExprKind::Other { .. } => {}
            ExprKind::Reference(reference) => out.extend(reference.qualifier.as_deref_mut()),
            ExprKind::MethodCall { method, arguments } => {
                out.push(method);
                out.extend(arguments.iter_mut());
            }
            ExprKind::New(new) => {
                out.extend(new.qualifier.as_deref_mut());
                out.extend(new.dimensions.iter_mut());
                out.extend(new.arguments.iter_mut().flatten());
                out.extend(new.initializer.as_deref_mut());
            }
            ExprKind::ArrayInit { elements } => out.extend(elements.iter_mut()),
            ExprKind::TypeCast { operand, .. } => out.extend(operand.as_deref_mut()),
            ExprKind::ArrayAccess { array, index } => {
                out.push(array);
                out.extend(index.as_deref_mut());
            }
            ExprKind::Prefix { operand, .. } => out.extend(operand.as_deref_mut()),
            ExprKind::Postfix { operand, .. } => out.push(operand),
            ExprKind::Binary { lhs, rhs, .. } | ExprKind::Assignment { lhs, rhs, .. } => {
                out.push(lhs);
                out.extend(rhs.as_deref_mut());
            }
            ExprKind::Conditional {
                condition,
                then_expr,
                else_expr,
            } => {
                out.push(condition);
                out.extend(then_expr.as_deref_mut());
                out.extend(else_expr.as_deref_mut());
            }
            ExprKind::InstanceOf { operand, .. } => out.push(operand),
            ExprKind::Parenthesized { inner } => out.extend(inner.as_deref_mut()),
        }
        out
    }
}

impl ExprKind {
    /// Stable, lowercase name of the kind (matches the serialized tag).
    pub fn name(&self) -> &str {
        match self {
            ExprKind::Literal { .. } => "literal",
            ExprKind::This => "this",
            ExprKind::Super => "super",
            ExprKind::ClassLiteral { .. } => "class_literal",
            ExprKind::Reference(_) => "reference",
            ExprKind::MethodCall { .. } => "method_call",
            ExprKind::New(_) => "new",
            ExprKind::ArrayInit { .. } => "array_init",
            ExprKind::TypeCast { .. } => "type_cast",
            ExprKind::ArrayAccess { .. } => "array_access",
            ExprKind::Prefix { .. } => "prefix",
            ExprKind::Postfix { .. } => "postfix",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Assignment { .. } => "assignment",
            ExprKind::Conditional { .. } => "conditional",
            ExprKind::InstanceOf { .. } => "instance_of",
            ExprKind::Parenthesized { .. } => "parenthesized",
            ExprKind::Other { name } => name,
        }
    }
}

/// `{ ... }` body of blocks, switches, try/catch/finally and synchronized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// Loop variable of a for-each or the parameter of a catch section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<TypeRef>,
}

/// One variable of a local declaration, `int a = 1, b;` has two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalVariable {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<TypeRef>,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchSection {
    #[serde(default)]
    pub parameter: Parameter,
    pub block: Option<CodeBlock>,
}

/// A statement node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    #[serde(flatten)]
    pub kind: StmtKind,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StmtKind {
    Block(CodeBlock),
    If {
        condition: Option<Expression>,
        then_branch: Option<Box<Statement>>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Option<Expression>,
        body: Option<Box<Statement>>,
    },
    DoWhile {
        condition: Option<Expression>,
        body: Option<Box<Statement>>,
    },
    For {
        initialization: Option<Box<Statement>>,
        condition: Option<Expression>,
        update: Option<Box<Statement>>,
        body: Option<Box<Statement>>,
    },
    ForEach {
        #[serde(default)]
        variable: Parameter,
        iterated: Option<Expression>,
        body: Option<Box<Statement>>,
    },
    Switch {
        selector: Option<Expression>,
        body: Option<CodeBlock>,
    },
    SwitchLabel {
        #[serde(default)]
        is_default: bool,
        case_value: Option<Expression>,
    },
    Return {
        value: Option<Expression>,
    },
    Throw {
        exception: Option<Expression>,
    },
    Break {
        label: Option<String>,
    },
    Continue {
        label: Option<String>,
    },
    Labeled {
        label: String,
        body: Option<Box<Statement>>,
    },
    Try {
        try_block: Option<CodeBlock>,
        #[serde(default)]
        catch_sections: Vec<CatchSection>,
        finally_block: Option<CodeBlock>,
    },
    Synchronized {
        lock: Option<Expression>,
        body: Option<CodeBlock>,
    },
    Declaration {
        #[serde(default)]
        variables: Vec<LocalVariable>,
    },
    Expression {
        expression: Expression,
    },
    ExpressionList {
        #[serde(default)]
        expressions: Vec<Expression>,
    },
    Assert {
        condition: Option<Expression>,
        description: Option<Expression>,
    },
    Empty,
    /// Host extension kind; compared by source text only.
    Other {
        name: String,
    },
}

impl StmtKind {
    pub fn name(&self) -> &str {
        match self {
            StmtKind::Block(_) => "block",
            StmtKind::If { .. } => "if",
            StmtKind::While { .. } => "while",
            StmtKind::DoWhile { .. } => "do_while",
            StmtKind::For { .. } => "for",
            StmtKind::ForEach { .. } => "for_each",
            StmtKind::Switch { .. } => "switch",
            StmtKind::SwitchLabel { .. } => "switch_label",
            StmtKind::Return { .. } => "return",
            StmtKind::Throw { .. } => "throw",
            StmtKind::Break { .. } => "break",
            StmtKind::Continue { .. } => "continue",
            StmtKind::Labeled { .. } => "labeled",
            StmtKind::Try { .. } => "try",
            StmtKind::Synchronized { .. } => "synchronized",
            StmtKind::Declaration { .. } => "declaration",
            StmtKind::Expression { .. } => "expression",
            StmtKind::ExpressionList { .. } => "expression_list",
            StmtKind::Assert { .. } => "assert",
            StmtKind::Empty => "empty",
            StmtKind::Other { name } => name,
        }
    }
}

/// Child of a statement: either a nested statement or an expression.
#[derive(Debug, Clone, Copy)]
pub enum Child<'t> {
    Statement(&'t Statement),
    Expression(&'t Expression),
}

/// Mutable counterpart of [`Child`].
#[derive(Debug)]
pub enum ChildMut<'t> {
    Statement(&'t mut Statement),
    Expression(&'t mut Expression),
}

impl Statement {
    pub fn kind(&self) -> &StmtKind {
        &self.kind
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// Direct children in source order. Code block contents are flattened in.
    pub fn children(&self) -> Vec<Child<'_>> {
        fn block<'t>(out: &mut Vec<Child<'t>>, block: Option<&'t CodeBlock>) {
            out.extend(block.into_iter().flat_map(|b| b.statements.iter().map(Child::Statement)));
        }
        fn stmt<'t>(out: &mut Vec<Child<'t>>, s: &'t Option<Box<Statement>>) {
            out.extend(s.as_deref().map(Child::Statement));
        }
        fn expr<'t>(out: &mut Vec<Child<'t>>, e: &'t Option<Expression>) {
            out.extend(e.as_ref().map(Child::Expression));
        }

        let mut out = Vec::new();
        match &self.kind {
            StmtKind::Block(b) => block(&mut out, Some(b)),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                expr(&mut out, condition);
                stmt(&mut out, then_branch);
                stmt(&mut out, else_branch);
            }
            StmtKind::While { condition, body } => {
                expr(&mut out, condition);
                stmt(&mut out, body);
            }
            StmtKind::DoWhile { condition, body } => {
                stmt(&mut out, body);
                expr(&mut out, condition);
            }
            StmtKind::For {
                initialization,
                condition,
                update,
                body,
            } => {
                stmt(&mut out, initialization);
                expr(&mut out, condition);
                stmt(&mut out, update);
                stmt(&mut out, body);
            }
            StmtKind::ForEach { iterated, body, .. } => {
                expr(&mut out, iterated);
                stmt(&mut out, body);
            }
            StmtKind::Switch { selector, body } => {
                expr(&mut out, selector);
                block(&mut out, body.as_ref());
            }
            StmtKind::SwitchLabel { case_value, .. } => expr(&mut out, case_value),
            StmtKind::Return { value } => expr(&mut out, value),
            StmtKind::Throw { exception } => expr(&mut out, exception),
            StmtKind::Break { .. } | StmtKind::Continue { .. } => {}
            StmtKind::Labeled { body, .. } => stmt(&mut out, body),
            StmtKind::Try {
                try_block,
                catch_sections,
                finally_block,
            } => {
                block(&mut out, try_block.as_ref());
                for section in catch_sections {
                    block(&mut out, section.block.as_ref());
                }
                block(&mut out, finally_block.as_ref());
            }
            StmtKind::Synchronized { lock, body } => {
                expr(&mut out, lock);
                block(&mut out, body.as_ref());
            }
            StmtKind::Declaration { variables } => {
                for variable in variables {
                    expr(&mut out, &variable.initializer);
                }
            }
            StmtKind::Expression { expression } => out.push(Child::Expression(expression)),
            StmtKind::ExpressionList { expressions } => {
                out.extend(expressions.iter().map(Child::Expression))
            }
            StmtKind::Assert {
                condition,
                description,
            } => {
                expr(&mut out, condition);
                expr(&mut out, description);
            }
            StmtKind::Empty | StmtKind::Other { .. } => {}
        }
        out
    }

    /// Mutable counterpart of [`Statement::children`], same order.
    pub fn children_mut(&mut self) -> Vec<ChildMut<'_>> {
        fn block<'t>(out: &mut Vec<ChildMut<'t>>, block: Option<&'t mut CodeBlock>) {
            out.extend(
                block
                    .into_iter()
                    .flat_map(|b| b.statements.iter_mut().map(ChildMut::Statement)),
            );
        }
        fn stmt<'t>(out: &mut Vec<ChildMut<'t>>, s: &'t mut Option<Box<Statement>>) {
            out.extend(s.as_deref_mut().map(ChildMut::Statement));
        }
        fn expr<'t>(out: &mut Vec<ChildMut<'t>>, e: &'t mut Option<Expression>) {
            out.extend(e.as_mut().map(ChildMut::Expression));
        }

        let mut out = Vec::new();
        match &mut self.kind {
            StmtKind::Block(b) => block(&mut out, Some(b)),
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                expr(&mut out, condition);
                stmt(&mut out, then_branch);
                stmt(&mut out, else_branch);
            }
            StmtKind::While { condition, body } => {
                expr(&mut out, condition);
                stmt(&mut out, body);
            }
            StmtKind::DoWhile { condition, body } => {
                stmt(&mut out, body);
                expr(&mut out, condition);
            }
            StmtKind::For {
                initialization,
                condition,
                update,
                body,
            } => {
                stmt(&mut out, initialization);
                expr(&mut out, condition);
                stmt(&mut out, update);
                stmt(&mut out, body);
            }
            StmtKind::ForEach { iterated, body, .. } => {
                expr(&mut out, iterated);
                stmt(&mut out, body);
            }
            StmtKind::Switch { selector, body } => {
                expr(&mut out, selector);
                block(&mut out, body.as_mut());
            }
            StmtKind::SwitchLabel { case_value, .. } => expr(&mut out, case_value),
            StmtKind::Return { value } => expr(&mut out, value),
            StmtKind::Throw { exception } => expr(&mut out, exception),
            StmtKind::Break { .. } | StmtKind::Continue { .. } => {}
            StmtKind::Labeled { body, .. } => stmt(&mut out, body),
            StmtKind::Try {
                try_block,
                catch_sections,
                finally_block,
            } => {
                block(&mut out, try_block.as_mut());
                for section in catch_sections.iter_mut() {
                    block(&mut out, section.block.as_mut());
                }
                block(&mut out, finally_block.as_mut());
            }
            StmtKind::Synchronized { lock, body } => {
                expr(&mut out, lock);
                block(&mut out, body.as_mut());
            }
            StmtKind::Declaration { variables } => {
                for variable in variables.iter_mut() {
                    expr(&mut out, &mut variable.initializer);
                }
            }
            StmtKind::Expression { expression } => out.push(ChildMut::Expression(expression)),
            StmtKind::ExpressionList { expressions } => {
                out.extend(expressions.iter_mut().map(ChildMut::Expression))
            }
            StmtKind::Assert {
                condition,
                description,
            } => {
                expr(&mut out, condition);
                expr(&mut out, description);
            }
            StmtKind::Empty | StmtKind::Other { .. } => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(value: &str) -> Expression {
        Expression {
            kind: ExprKind::Literal {
                value: value.to_string(),
            },
            text: value.to_string(),
        }
    }

    #[test]
    fn test_strip_parentheses_nested() {
        let inner = literal("1");
        let once = Expression {
            kind: ExprKind::Parenthesized {
                inner: Some(Box::new(inner)),
            },
            text: "(1)".to_string(),
        };
        let twice = Expression {
            kind: ExprKind::Parenthesized {
                inner: Some(Box::new(once)),
            },
            text: "((1))".to_string(),
        };
        assert_eq!(twice.strip_parentheses().map(|e| e.source_text()), Some("1"));

        let empty = Expression {
            kind: ExprKind::Parenthesized { inner: None },
            text: "()".to_string(),
        };
        assert!(empty.strip_parentheses().is_none());
    }

    #[test]
    fn test_type_ref_ignores_whitespace() {
        assert!(TypeRef::new("Map<K, V>").same_as(&TypeRef::new("Map<K,V>")));
        assert!(TypeRef::new("int []").same_as(&TypeRef::new("int[]")));
        assert!(!TypeRef::new("int[]").same_as(&TypeRef::new("long[]")));
        assert!(!TypeRef::new("List").same_as(&TypeRef::new("List<T>")));
    }

    #[test]
    fn test_deserialize_tagged_expression() {
        let json = r#"{
            "kind": "binary",
            "operator": "+",
            "lhs": { "kind": "literal", "value": "1", "text": "1" },
            "rhs": { "kind": "literal", "value": "2", "text": "2" },
            "text": "1 + 2"
        }"#;
        let expr: Expression = serde_json::from_str(json).unwrap();
        assert_eq!(expr.kind().name(), "binary");
        assert_eq!(expr.children().len(), 2);
        assert_eq!(expr.source_text(), "1 + 2");
    }

    #[test]
    fn test_statement_children_flatten_blocks() {
        let json = r#"{
            "kind": "try",
            "try_block": { "statements": [ { "kind": "empty" }, { "kind": "empty" } ] },
            "catch_sections": [
                { "parameter": { "name": "e", "type": "Exception" },
                  "block": { "statements": [ { "kind": "empty" } ] } }
            ],
            "finally_block": null
        }"#;
        let stmt: Statement = serde_json::from_str(json).unwrap();
        assert_eq!(stmt.children().len(), 3);
    }
}
