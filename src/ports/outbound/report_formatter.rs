use crate::application::dto::RankReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a finished ranking report
///
/// Formatters are pure: they take the already-computed report and produce
/// the final output string for a presenter to write somewhere.
pub trait ReportFormatter {
    /// Renders the report.
    ///
    /// # Errors
    /// Returns an error if serialization fails (JSON only in practice).
    fn format(&self, report: &RankReport) -> Result<String>;
}
