//! Constructors for building trees by hand.
//!
//! Each constructor renders the node's source text from its children, so a tree
//! built here looks exactly like one a host recorded with canonical formatting.

use crate::domain::operator::Operator;
use crate::domain::render::{render_expression, render_statement};
use crate::domain::tree::{
    CatchSection, CodeBlock, ExprKind, Expression, LocalVariable, NewExpr, Parameter,
    ReferenceExpr, Statement, StmtKind, TypeRef,
};

impl Expression {
    /// Build a node from its kind, rendering the text.
    pub fn from_kind(kind: ExprKind) -> Self {
        let mut expr = Expression {
            kind,
            text: String::new(),
        };
        expr.text = render_expression(&expr);
        expr
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::from_kind(ExprKind::Literal {
            value: value.into(),
        })
    }

    pub fn this() -> Self {
        Self::from_kind(ExprKind::This)
    }

    pub fn super_() -> Self {
        Self::from_kind(ExprKind::Super)
    }

    pub fn class_literal(class_type: impl Into<String>) -> Self {
        Self::from_kind(ExprKind::ClassLiteral {
            class_type: TypeRef::new(class_type),
        })
    }

    /// Unqualified reference with no symbol binding.
    pub fn name(name: impl Into<String>) -> Self {
        Self::reference(None, name, None)
    }

    /// Qualified reference with no symbol binding, `qualifier.name`.
    pub fn field(qualifier: Expression, name: impl Into<String>) -> Self {
        Self::reference(Some(qualifier), name, None)
    }

    pub fn reference(
        qualifier: Option<Expression>,
        name: impl Into<String>,
        symbol: Option<&str>,
    ) -> Self {
        Self::from_kind(ExprKind::Reference(ReferenceExpr {
            qualifier: qualifier.map(Box::new),
            name: name.into(),
            symbol: symbol.map(str::to_string),
        }))
    }

    /// Attach a symbol key to a reference; other kinds are returned untouched.
    pub fn bound_to(mut self, symbol: &str) -> Self {
        if let ExprKind::Reference(reference) = &mut self.kind {
            reference.symbol = Some(symbol.to_string());
        }
        self
    }

    /// Unqualified call, `name(args)`.
    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self::method_call(Self::name(name), arguments)
    }

    pub fn method_call(method: Expression, arguments: Vec<Expression>) -> Self {
        Self::from_kind(ExprKind::MethodCall {
            method: Box::new(method),
            arguments,
        })
    }

    /// Object creation, `new Type(args)`.
    pub fn new_object(class_name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self::from_kind(ExprKind::New(NewExpr {
            class_name: Some(TypeRef::new(class_name)),
            dimensions: Vec::new(),
            initializer: None,
            qualifier: None,
            arguments: Some(arguments),
        }))
    }

    /// Array creation, `new Type[d1][d2]` or `new Type[] {..}`.
    pub fn new_array(
        element_type: impl Into<String>,
        dimensions: Vec<Expression>,
        initializer: Option<Expression>,
    ) -> Self {
        Self::from_kind(ExprKind::New(NewExpr {
            class_name: Some(TypeRef::new(element_type)),
            dimensions,
            initializer: initializer.map(Box::new),
            qualifier: None,
            arguments: None,
        }))
    }

    pub fn array_init(elements: Vec<Expression>) -> Self {
        Self::from_kind(ExprKind::ArrayInit { elements })
    }

    pub fn cast(cast_type: impl Into<String>, operand: Expression) -> Self {
        Self::from_kind(ExprKind::TypeCast {
            cast_type: Some(TypeRef::new(cast_type)),
            operand: Some(Box::new(operand)),
        })
    }

    pub fn index(array: Expression, index: Expression) -> Self {
        Self::from_kind(ExprKind::ArrayAccess {
            array: Box::new(array),
            index: Some(Box::new(index)),
        })
    }

    pub fn prefix(operator: Operator, operand: Expression) -> Self {
        Self::from_kind(ExprKind::Prefix {
            operator,
            operand: Some(Box::new(operand)),
        })
    }

    pub fn postfix(operand: Expression, operator: Operator) -> Self {
        Self::from_kind(ExprKind::Postfix {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(lhs: Expression, operator: Operator, rhs: Expression) -> Self {
        Self::from_kind(ExprKind::Binary {
            operator,
            lhs: Box::new(lhs),
            rhs: Some(Box::new(rhs)),
        })
    }

    pub fn assign(lhs: Expression, operator: Operator, rhs: Expression) -> Self {
        Self::from_kind(ExprKind::Assignment {
            operator,
            lhs: Box::new(lhs),
            rhs: Some(Box::new(rhs)),
        })
    }

    pub fn conditional(condition: Expression, then_expr: Expression, else_expr: Expression) -> Self {
        Self::from_kind(ExprKind::Conditional {
            condition: Box::new(condition),
            then_expr: Some(Box::new(then_expr)),
            else_expr: Some(Box::new(else_expr)),
        })
    }

    pub fn instance_of(operand: Expression, checked_type: impl Into<String>) -> Self {
        Self::from_kind(ExprKind::InstanceOf {
            operand: Box::new(operand),
            checked_type: Some(TypeRef::new(checked_type)),
        })
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Self::from_kind(ExprKind::Parenthesized {
            inner: Some(Box::new(inner)),
        })
    }

    /// Host extension kind with its recorded text.
    pub fn other(name: impl Into<String>, text: impl Into<String>) -> Self {
        Expression {
            kind: ExprKind::Other { name: name.into() },
            text: text.into(),
        }
    }
}

impl Statement {
    pub fn from_kind(kind: StmtKind) -> Self {
        let mut stmt = Statement {
            kind,
            text: String::new(),
        };
        stmt.text = render_statement(&stmt);
        stmt
    }

    pub fn block(statements: Vec<Statement>) -> Self {
        Self::from_kind(StmtKind::Block(CodeBlock { statements }))
    }

    pub fn if_(condition: Expression, then_branch: Statement, else_branch: Option<Statement>) -> Self {
        Self::from_kind(StmtKind::If {
            condition: Some(condition),
            then_branch: Some(Box::new(then_branch)),
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn while_(condition: Expression, body: Statement) -> Self {
        Self::from_kind(StmtKind::While {
            condition: Some(condition),
            body: Some(Box::new(body)),
        })
    }

    pub fn do_while(body: Statement, condition: Expression) -> Self {
        Self::from_kind(StmtKind::DoWhile {
            condition: Some(condition),
            body: Some(Box::new(body)),
        })
    }

    pub fn for_(
        initialization: Option<Statement>,
        condition: Option<Expression>,
        update: Option<Statement>,
        body: Statement,
    ) -> Self {
        Self::from_kind(StmtKind::For {
            initialization: initialization.map(Box::new),
            condition,
            update: update.map(Box::new),
            body: Some(Box::new(body)),
        })
    }

    pub fn for_each(
        variable_type: impl Into<String>,
        variable_name: impl Into<String>,
        iterated: Expression,
        body: Statement,
    ) -> Self {
        Self::from_kind(StmtKind::ForEach {
            variable: Parameter {
                name: Some(variable_name.into()),
                ty: Some(TypeRef::new(variable_type)),
            },
            iterated: Some(iterated),
            body: Some(Box::new(body)),
        })
    }

    pub fn switch(selector: Expression, body: Vec<Statement>) -> Self {
        Self::from_kind(StmtKind::Switch {
            selector: Some(selector),
            body: Some(CodeBlock { statements: body }),
        })
    }

    pub fn case_label(value: Expression) -> Self {
        Self::from_kind(StmtKind::SwitchLabel {
            is_default: false,
            case_value: Some(value),
        })
    }

    pub fn default_label() -> Self {
        Self::from_kind(StmtKind::SwitchLabel {
            is_default: true,
            case_value: None,
        })
    }

    pub fn return_(value: Option<Expression>) -> Self {
        Self::from_kind(StmtKind::Return { value })
    }

    pub fn throw(exception: Expression) -> Self {
        Self::from_kind(StmtKind::Throw {
            exception: Some(exception),
        })
    }

    pub fn break_(label: Option<&str>) -> Self {
        Self::from_kind(StmtKind::Break {
            label: label.map(str::to_string),
        })
    }

    pub fn continue_(label: Option<&str>) -> Self {
        Self::from_kind(StmtKind::Continue {
            label: label.map(str::to_string),
        })
    }

    pub fn labeled(label: impl Into<String>, body: Statement) -> Self {
        Self::from_kind(StmtKind::Labeled {
            label: label.into(),
            body: Some(Box::new(body)),
        })
    }

    /// `try` with `(type, name, block)` catch sections.
    pub fn try_(
        try_block: Vec<Statement>,
        catches: Vec<(&str, &str, Vec<Statement>)>,
        finally_block: Option<Vec<Statement>>,
    ) -> Self {
        let catch_sections = catches
            .into_iter()
            .map(|(ty, name, statements)| CatchSection {
                parameter: Parameter {
                    name: Some(name.to_string()),
                    ty: Some(TypeRef::new(ty)),
                },
                block: Some(CodeBlock { statements }),
            })
            .collect();
        Self::from_kind(StmtKind::Try {
            try_block: Some(CodeBlock {
                statements: try_block,
            }),
            catch_sections,
            finally_block: finally_block.map(|statements| CodeBlock { statements }),
        })
    }

    pub fn synchronized(lock: Expression, body: Vec<Statement>) -> Self {
        Self::from_kind(StmtKind::Synchronized {
            lock: Some(lock),
            body: Some(CodeBlock { statements: body }),
        })
    }

    /// Single-variable declaration, `type name = init;`.
    pub fn declare(ty: impl Into<String>, name: impl Into<String>, initializer: Option<Expression>) -> Self {
        Self::from_kind(StmtKind::Declaration {
            variables: vec![LocalVariable {
                name: Some(name.into()),
                ty: Some(TypeRef::new(ty)),
                initializer,
            }],
        })
    }

    pub fn declaration(variables: Vec<LocalVariable>) -> Self {
        Self::from_kind(StmtKind::Declaration { variables })
    }

    pub fn expression(expression: Expression) -> Self {
        Self::from_kind(StmtKind::Expression { expression })
    }

    pub fn expression_list(expressions: Vec<Expression>) -> Self {
        Self::from_kind(StmtKind::ExpressionList { expressions })
    }

    pub fn assert(condition: Expression, description: Option<Expression>) -> Self {
        Self::from_kind(StmtKind::Assert {
            condition: Some(condition),
            description,
        })
    }

    pub fn empty() -> Self {
        Self::from_kind(StmtKind::Empty)
    }

    /// Host extension kind with its recorded text.
    pub fn other(name: impl Into<String>, text: impl Into<String>) -> Self {
        Statement {
            kind: StmtKind::Other { name: name.into() },
            text: text.into(),
        }
    }
}
