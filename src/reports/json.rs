//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{Detail, DiffResult, DiffSummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let show_index = result.show_document_index();
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: Utc::now().to_rfc3339(),
                from: InputInfo {
                    location: config.metadata.from_location.clone(),
                    content_hash: config.metadata.from_hash.map(|hash| format!("{hash:016x}")),
                },
                to: InputInfo {
                    location: config.metadata.to_location.clone(),
                    content_hash: config.metadata.to_hash.map(|hash| format!("{hash:016x}")),
                },
                document_count: result.document_count,
            },
            summary: &result.summary,
            diffs: result
                .diffs
                .iter()
                .map(|diff| JsonDiff {
                    path: diff.path.to_go_patch_style(false),
                    document_index: show_index.then_some(diff.path.document_index),
                    details: &diff.details,
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;

        Ok(format!("{json}\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata,
    summary: &'a DiffSummary,
    diffs: Vec<JsonDiff<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    from: InputInfo,
    to: InputInfo,
    document_count: usize,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct InputInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_hash: Option<String>,
}

#[derive(Serialize)]
struct JsonDiff<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_index: Option<usize>,
    details: &'a [Detail],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::Diff;
    use crate::model::{Node, Path};

    #[test]
    fn test_json_structure() {
        let result = DiffResult::new(
            vec![Diff::single(
                Path::root().with_key("spec").with_identifier("name", "web"),
                Detail::modification(Node::Int(1), Node::from("two")),
            )],
            1,
        );
        let mut config = ReportConfig::between("from.yml", "to.yml");
        config.metadata.from_hash = Some(0xabc);

        let report = JsonReporter::new()
            .generate_diff_report(&result, &config)
            .expect("report");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");

        assert_eq!(value["metadata"]["tool"]["name"], "semdiff");
        assert_eq!(value["metadata"]["from"]["location"], "from.yml");
        assert_eq!(value["metadata"]["from"]["content_hash"], "0000000000000abc");
        assert_eq!(value["summary"]["total_diffs"], 1);
        assert_eq!(value["diffs"][0]["path"], "/spec/name=web");
        assert!(value["diffs"][0].get("document_index").is_none());
        assert_eq!(value["diffs"][0]["details"][0]["kind"], "modification");
        assert_eq!(value["diffs"][0]["details"][0]["from"], 1);
        assert_eq!(value["diffs"][0]["details"][0]["to"], "two");
    }

    #[test]
    fn test_addition_has_null_from() {
        let result = DiffResult::new(
            vec![Diff::single(Path::document(1), Detail::addition(Node::Bool(true)))],
            2,
        );
        let report = JsonReporter::new()
            .pretty(false)
            .generate_diff_report(&result, &ReportConfig::default())
            .expect("report");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");

        assert_eq!(value["diffs"][0]["document_index"], 1);
        assert!(value["diffs"][0]["details"][0]["from"].is_null());
        assert_eq!(value["diffs"][0]["details"][0]["to"], true);
    }
}
