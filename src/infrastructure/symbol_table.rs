use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::symbol::{QualifiedName, Resolver, SymbolKind, SymbolRef};
use crate::domain::tree::ReferenceExpr;

/// A declaration as recorded by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: SymbolKind,
    /// Qualified name of the declaring class, for members.
    #[serde(default)]
    pub container: Option<QualifiedName>,
}

impl SymbolInfo {
    pub fn field(name: &str, container: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Field,
            container: Some(QualifiedName(container.to_string())),
        }
    }

    pub fn local(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::LocalVariable,
            container: None,
        }
    }
}

/// Thread-safe resolver over host-assigned symbol keys.
/// Reference nodes carry the key; the table maps it to the declaration.
pub struct SymbolTable {
    // Key: host symbol key, e.g. "com.acme.Point#x"
    symbols: DashMap<String, SymbolInfo>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            symbols: DashMap::new(),
        }
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, info: SymbolInfo) {
        self.symbols.insert(key.into(), info);
    }

    /// Returns a clone to avoid holding DashMap locks.
    pub fn get(&self, key: &str) -> Option<SymbolInfo> {
        self.symbols.get(key).map(|r| r.clone())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SymbolInfo)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, SymbolInfo)>>(iter: I) -> Self {
        let table = SymbolTable::default();
        for (key, info) in iter {
            table.insert(key, info);
        }
        table
    }
}

impl Resolver for SymbolTable {
    fn resolve(&self, reference: &ReferenceExpr) -> Option<SymbolRef> {
        let key = reference.symbol.as_deref()?;
        let Some(info) = self.symbols.get(key) else {
            trace!(key, name = %reference.name, "unknown symbol key");
            return None;
        };
        Some(SymbolRef {
            key: key.to_string(),
            name: info.name.clone(),
            kind: info.kind,
        })
    }

    fn declaring_container(&self, symbol: &SymbolRef) -> Option<QualifiedName> {
        self.symbols
            .get(&symbol.key)
            .and_then(|info| info.container.clone())
    }
}
