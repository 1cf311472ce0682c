// Domain layer: the syntax tree model and the equivalence engine over it.

pub mod build;
pub mod equivalence;
pub mod fragment;
pub mod matching;
pub mod operator;
pub mod render;
pub mod symbol;
pub mod tree;

pub use equivalence::EquivalenceChecker;
pub use fragment::{Fragment, NamedFragment};
pub use matching::Match;
pub use operator::Operator;
pub use symbol::{NoResolver, QualifiedName, Resolver, SymbolKind, SymbolRef};
pub use tree::{
    CatchSection, Child, CodeBlock, ExprKind, Expression, LocalVariable, NewExpr, Parameter,
    ReferenceExpr, Statement, StmtKind, TypeRef,
};
