use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::report::{Comparison, Difference};
use crate::domain::fragment::{Fragment, NamedFragment};
use crate::infrastructure::symbol_table::SymbolInfo;

/// Params of a `COMPARE` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompareRequest {
    pub left: Fragment,
    pub right: Fragment,
    #[serde(default)]
    pub symbols: HashMap<String, SymbolInfo>,
}

impl CompareRequest {
    pub fn into_fragments(self) -> (Vec<NamedFragment>, HashMap<String, SymbolInfo>) {
        let fragments = vec![
            NamedFragment {
                name: "left".to_string(),
                body: self.left,
            },
            NamedFragment {
                name: "right".to_string(),
                body: self.right,
            },
        ];
        (fragments, self.symbols)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompareResponse {
    pub equivalent: bool,
    pub difference: Option<DifferenceDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DifferenceDto {
    pub left: String,
    pub right: String,
}

impl From<Difference> for DifferenceDto {
    fn from(d: Difference) -> Self {
        DifferenceDto {
            left: d.left,
            right: d.right,
        }
    }
}

impl From<Comparison> for CompareResponse {
    fn from(c: Comparison) -> Self {
        CompareResponse {
            equivalent: c.equivalent,
            difference: c.difference.map(DifferenceDto::from),
        }
    }
}
