//! Symbol resolution
//!
//! The engine never builds symbol tables itself; the host injects a [`Resolver`]
//! that maps references to the declarations they bind to.

use crate::domain::tree::ReferenceExpr;
use serde::{Deserialize, Serialize};

/// What kind of declaration a symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Field,
    LocalVariable,
    Parameter,
    Method,
    Class,
}

/// Opaque identity of a resolved declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolRef {
    /// Host key of the declaration.
    pub key: String,
    pub name: String,
    pub kind: SymbolKind,
}

impl SymbolRef {
    pub fn is_field(&self) -> bool {
        self.kind == SymbolKind::Field
    }
}

/// Fully qualified name of a declaring container, e.g. `com.acme.Point`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(pub String);

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-provided resolution capability.
/// Implementations must be side-effect free and thread-safe (Send + Sync).
pub trait Resolver: Send + Sync {
    fn resolve(&self, reference: &ReferenceExpr) -> Option<SymbolRef>;
    fn declaring_container(&self, symbol: &SymbolRef) -> Option<QualifiedName>;
}

/// Resolver that knows nothing; every reference falls back to text comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl Resolver for NoResolver {
    fn resolve(&self, _reference: &ReferenceExpr) -> Option<SymbolRef> {
        None
    }

    fn declaring_container(&self, _symbol: &SymbolRef) -> Option<QualifiedName> {
        None
    }
}
