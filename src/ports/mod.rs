use crate::application::report::Report;

/// Turns a report into its output representation.
pub trait ReportExporter {
    fn export(&self, report: &Report) -> anyhow::Result<String>;
}
