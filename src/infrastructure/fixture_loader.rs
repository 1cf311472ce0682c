use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::fragment::NamedFragment;
use crate::infrastructure::symbol_table::{SymbolInfo, SymbolTable};

/// Errors that can occur while loading a fixture file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read fixture {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fragment '{fragment}' has a '{kind}' node without source text")]
    MissingText { fragment: String, kind: String },

    #[error("duplicate fragment name '{0}'")]
    DuplicateFragment(String),

    #[error("unknown fragment '{0}'")]
    UnknownFragment(String),
}

/// Fragments to compare plus the symbol bindings their references use.
///
/// ```json
/// {
///   "symbols": { "Point#x": { "name": "x", "kind": "field", "container": "com.acme.Point" } },
///   "fragments": [
///     { "name": "first", "expression": { "kind": "reference", "name": "x", "symbol": "Point#x" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub symbols: HashMap<String, SymbolInfo>,
    #[serde(default)]
    pub fragments: Vec<NamedFragment>,
}

impl Fixture {
    pub fn fragment(&self, name: &str) -> Result<&NamedFragment, LoadError> {
        self.fragments
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| LoadError::UnknownFragment(name.to_string()))
    }

    pub fn symbol_table(&self) -> SymbolTable {
        self.symbols
            .iter()
            .map(|(key, info)| (key.clone(), info.clone()))
            .collect()
    }
}

pub struct FixtureLoader;

impl FixtureLoader {
    /// Read and validate a fixture file.
    pub fn load_file(path: &Path) -> Result<Fixture, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::parse(&content)?;
        info!(
            path = %path.display(),
            fragments = fixture.fragments.len(),
            symbols = fixture.symbols.len(),
            "loaded fixture"
        );
        Ok(fixture)
    }

    /// Parse fixture JSON, synthesize missing source text, and validate.
    pub fn parse(json: &str) -> Result<Fixture, LoadError> {
        let mut fixture: Fixture = serde_json::from_str(json)?;
        Self::prepare(&mut fixture.fragments)?;
        Ok(fixture)
    }

    /// Fill missing text and reject what cannot be compared.
    pub fn prepare(fragments: &mut [NamedFragment]) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for fragment in fragments.iter_mut() {
            if !seen.insert(fragment.name.clone()) {
                return Err(LoadError::DuplicateFragment(fragment.name.clone()));
            }
            if let Some(kind) = fragment.body.untexted_extension() {
                return Err(LoadError::MissingText {
                    fragment: fragment.name.clone(),
                    kind: kind.to_string(),
                });
            }
            fragment.body.fill_missing_text();
            debug!(
                name = %fragment.name,
                kind = fragment.body.kind_name(),
                text = fragment.body.source_text(),
                "prepared fragment"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fragment::Fragment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"{
        "symbols": {
            "Point#x": { "name": "x", "kind": "field", "container": "com.acme.Point" }
        },
        "fragments": [
            { "name": "implicit", "expression": { "kind": "reference", "name": "x", "symbol": "Point#x" } },
            { "name": "explicit", "expression": {
                "kind": "reference",
                "qualifier": { "kind": "this" },
                "name": "x",
                "symbol": "Point#x"
            } }
        ]
    }"#;

    #[test]
    fn test_parse_fills_text() {
        let fixture = FixtureLoader::parse(FIXTURE).unwrap();
        assert_eq!(fixture.fragments.len(), 2);
        assert_eq!(fixture.fragment("explicit").unwrap().body.source_text(), "this.x");
        assert_eq!(fixture.symbol_table().len(), 1);
    }

    #[test]
    fn test_unknown_fragment() {
        let fixture = FixtureLoader::parse(FIXTURE).unwrap();
        let err = fixture.fragment("missing").unwrap_err();
        assert!(matches!(err, LoadError::UnknownFragment(name) if name == "missing"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = r#"{ "fragments": [
            { "name": "a", "statement": { "kind": "empty" } },
            { "name": "a", "statement": { "kind": "empty" } }
        ] }"#;
        let err = FixtureLoader::parse(json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateFragment(_)));
    }

    #[test]
    fn test_extension_without_text_rejected() {
        let json = r#"{ "fragments": [
            { "name": "y", "statement": { "kind": "other", "name": "yield" } }
        ] }"#;
        let err = FixtureLoader::parse(json).unwrap_err();
        assert!(err.to_string().contains("'yield' node without source text"));
    }

    #[test]
    fn test_invalid_json() {
        let err = FixtureLoader::parse("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let fixture = FixtureLoader::load_file(file.path()).unwrap();
        assert!(matches!(
            fixture.fragment("implicit").unwrap().body,
            Fragment::Expression(_)
        ));

        let missing = FixtureLoader::load_file(Path::new("/nonexistent/fixture.json")).unwrap_err();
        assert!(matches!(missing, LoadError::Io { .. }));
    }
}
