use crate::application::dto::RankReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter - machine-readable report for scripting.
///
/// Wraps the report with tool identity so consumers can check what produced
/// a given file.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo,
    #[serde(flatten)]
    report: &'a RankReport,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RankReport) -> Result<String> {
        let wrapped = JsonReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            report,
        };
        let mut json = serde_json::to_string_pretty(&wrapped)?;
        json.push('\n');
        Ok(json)
    }
}
