pub mod compare;
pub mod duplicates;
pub mod inspections;
pub mod report;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::domain::equivalence::EquivalenceChecker;
use crate::domain::fragment::NamedFragment;
use crate::ports::ReportExporter;

use self::report::Report;

pub struct AnalyzeUsecase<'a> {
    pub checker: EquivalenceChecker<'a>,
    pub exporter: &'a dyn ReportExporter,
}

impl<'a> AnalyzeUsecase<'a> {
    pub fn compare(&self, fragments: &[NamedFragment], left: &str, right: &str) -> Result<String> {
        let left = find(fragments, left)?;
        let right = find(fragments, right)?;
        let comparison = compare::compare(&self.checker, left, right);
        info!(
            left = %comparison.left,
            right = %comparison.right,
            equivalent = comparison.equivalent,
            "compared fragments"
        );
        self.exporter.export(&Report::Comparison(comparison))
    }

    pub fn duplicates(&self, fragments: &[NamedFragment]) -> Result<String> {
        let groups = duplicates::find_duplicates(&self.checker, fragments);
        info!(fragments = fragments.len(), groups = groups.len(), "duplicate scan done");
        self.exporter.export(&Report::Duplicates { groups })
    }

    pub fn inspect(&self, fragments: &[NamedFragment]) -> Result<String> {
        let findings = inspections::inspect_all(&self.checker, fragments);
        info!(fragments = fragments.len(), findings = findings.len(), "inspection done");
        self.exporter.export(&Report::Findings { findings })
    }
}

fn find<'f>(fragments: &'f [NamedFragment], name: &str) -> Result<&'f NamedFragment> {
    fragments
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| anyhow!("no fragment named '{}'", name))
}
