//! Human-readable report generator.
//!
//! One block per changed path: the path on its own line, then one section per
//! detail with the affected values rendered as YAML.

use super::{ansi_color, plural, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{Detail, DetailKind, Diff, DiffResult};
use crate::model::Node;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "    ";

/// Human reporter for terminal output
pub struct HumanReporter {
    /// Use colored output
    colored: bool,
}

impl HumanReporter {
    /// Create a new human reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, result: &DiffResult, config: &ReportConfig) -> Vec<String> {
        let rows = [
            format!("between {}", config.from_label()),
            format!("    and {}", config.to_label()),
            format!("returned {}", plural(result.diffs.len(), "difference")),
        ];
        let width = rows.iter().map(|row| row.width()).max().unwrap_or(0);

        let mut lines = vec![
            self.color(&rows[0], "bold"),
            self.color(&rows[1], "bold"),
            rows[2].clone(),
            self.color(&"─".repeat(width), "dim"),
        ];
        lines.push(String::new());
        lines
    }

    fn render_path(&self, diff: &Diff, result: &DiffResult, config: &ReportConfig) -> String {
        let show_index = result.show_document_index();
        let path = if config.use_go_patch_paths {
            diff.path.to_go_patch_style(show_index)
        } else {
            diff.path.to_dot_style(show_index)
        };
        self.color(&path, "bold")
    }

    fn render_detail(
        &self,
        detail: &Detail,
        config: &ReportConfig,
        lines: &mut Vec<String>,
    ) -> Result<(), ReportError> {
        match detail.kind {
            DetailKind::Addition => {
                let value = detail.to.as_ref().unwrap_or(&Node::Null);
                let title = format!("{} {} added:", detail.kind.symbol(), describe_entries(value));
                lines.push(format!("  {}", self.color(&title, "yellow")));
                self.push_value(value, "green", lines)?;
            }
            DetailKind::Removal => {
                let value = detail.from.as_ref().unwrap_or(&Node::Null);
                let title = format!("{} {} removed:", detail.kind.symbol(), describe_entries(value));
                lines.push(format!("  {}", self.color(&title, "yellow")));
                self.push_value(value, "red", lines)?;
            }
            DetailKind::Modification => {
                let from = detail.from.as_ref().unwrap_or(&Node::Null);
                let to = detail.to.as_ref().unwrap_or(&Node::Null);
                let title = modification_title(from, to, config.minor_change_threshold);
                lines.push(format!(
                    "  {}",
                    self.color(&format!("{} {title}", detail.kind.symbol()), "yellow")
                ));
                self.push_prefixed(from, "- ", "red", lines)?;
                self.push_prefixed(to, "+ ", "green", lines)?;
            }
            DetailKind::OrderChange => {
                let title = format!("{} order changed", detail.kind.symbol());
                lines.push(format!("  {}", self.color(&title, "yellow")));
                for (prefix, value, color) in [("- ", &detail.from, "red"), ("+ ", &detail.to, "green")] {
                    let entries = value.as_ref().map(flow_entries).unwrap_or_default();
                    lines.push(format!("{INDENT}{}", self.color(&format!("{prefix}{entries}"), color)));
                }
            }
            DetailKind::Illegal | DetailKind::Attention => {
                let title = format!("{} {}", detail.kind.symbol(), detail.kind.label());
                lines.push(format!("  {}", self.color(&title, "red")));
            }
        }
        Ok(())
    }

    fn push_value(&self, value: &Node, color: &str, lines: &mut Vec<String>) -> Result<(), ReportError> {
        for line in value_lines(value)? {
            lines.push(format!("{INDENT}{}", self.color(&line, color)));
        }
        Ok(())
    }

    fn push_prefixed(
        &self,
        value: &Node,
        prefix: &str,
        color: &str,
        lines: &mut Vec<String>,
    ) -> Result<(), ReportError> {
        for line in value_lines(value)? {
            lines.push(format!("{INDENT}{}", self.color(&format!("{prefix}{line}"), color)));
        }
        Ok(())
    }
}

impl Default for HumanReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HumanReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        if !config.omit_header {
            lines.extend(self.header(result, config));
        }

        for diff in &result.diffs {
            lines.push(self.render_path(diff, result, config));
            for detail in &diff.details {
                self.render_detail(detail, config, &mut lines)?;
            }
            lines.push(String::new());
        }

        let mut report = lines.join("\n");
        if !report.ends_with('\n') {
            report.push('\n');
        }
        Ok(report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Human
    }
}

/// "one map entry", "3 list entries", or "value" for scalars.
fn describe_entries(value: &Node) -> String {
    match value {
        Node::Mapping(mapping) => plural(mapping.len(), "map entry"),
        Node::Sequence(items) => plural(items.len(), "list entry"),
        _ => "value".to_string(),
    }
}

fn modification_title(from: &Node, to: &Node, threshold: f64) -> String {
    if from.kind() != to.kind() {
        return format!("type change from {} to {}", from.kind(), to.kind());
    }

    match (from.as_str(), to.as_str()) {
        (Some(a), Some(b)) if is_minor_change(a, b, threshold) => "minor value change".to_string(),
        _ => "value change".to_string(),
    }
}

/// A change is minor when its edit distance is below `threshold` times the
/// length of the shorter string.
pub(crate) fn is_minor_change(from: &str, to: &str, threshold: f64) -> bool {
    let shorter = from.chars().count().min(to.chars().count());
    if shorter == 0 {
        return false;
    }
    let distance = strsim::levenshtein(from, to);
    (distance as f64) < threshold * shorter as f64
}

/// Render a value as YAML lines. Strings are shown verbatim, line by line.
fn value_lines(value: &Node) -> Result<Vec<String>, ReportError> {
    if let Node::String(s) = value {
        if s.is_empty() {
            return Ok(vec!["\"\"".to_string()]);
        }
        return Ok(s.lines().map(str::to_string).collect());
    }

    let yaml = value
        .to_yaml_string()
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;
    Ok(yaml.trim_end().lines().map(str::to_string).collect())
}

fn flow_entries(value: &Node) -> String {
    match value {
        Node::Sequence(items) => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mapping, Path};

    fn render(result: &DiffResult, config: &ReportConfig) -> String {
        HumanReporter::new()
            .no_color()
            .generate_diff_report(result, config)
            .expect("report")
    }

    fn sample() -> DiffResult {
        let mut added = Mapping::new();
        added.insert("release", "v1");
        DiffResult::new(
            vec![
                Diff::single(Path::root(), Detail::addition(Node::Mapping(added))),
                Diff::single(
                    Path::root().with_key("jobs").with_identifier("name", "web").with_key("instances"),
                    Detail::modification(Node::Int(1), Node::Int(2)),
                ),
            ],
            1,
        )
    }

    #[test]
    fn test_header_and_paths() {
        let report = render(&sample(), &ReportConfig::between("from.yml", "to.yml"));
        assert!(report.contains("between from.yml"), "{report}");
        assert!(report.contains("    and to.yml"), "{report}");
        assert!(report.contains("returned 2 differences"), "{report}");
        assert!(report.contains("(root level)"), "{report}");
        assert!(report.contains("jobs.web.instances"), "{report}");
        assert!(report.contains("+ one map entry added:"), "{report}");
        assert!(report.contains("    release: v1"), "{report}");
        assert!(report.contains("    - 1"), "{report}");
        assert!(report.contains("    + 2"), "{report}");
        assert!(!report.contains("\x1b["), "no ANSI codes without color");
    }

    #[test]
    fn test_go_patch_paths_and_omit_header() {
        let config = ReportConfig {
            use_go_patch_paths: true,
            omit_header: true,
            ..ReportConfig::default()
        };
        let report = render(&sample(), &config);
        assert!(report.contains("/jobs/name=web/instances"), "{report}");
        assert!(!report.contains("between"), "{report}");
    }

    #[test]
    fn test_document_suffix_for_multi_document_inputs() {
        let result = DiffResult::new(
            vec![Diff::single(
                Path::document(1).with_key("spec"),
                Detail::modification("a".into(), "b".into()),
            )],
            2,
        );
        let report = render(&result, &ReportConfig::default());
        assert!(report.contains("spec  (document #2)"), "{report}");
    }

    #[test]
    fn test_minor_change_detection() {
        assert!(is_minor_change("registry.example.com/app:1.2.3", "registry.example.com/app:1.2.4", 0.1));
        assert!(!is_minor_change("foobar", "fOObAr", 0.1));
        assert!(!is_minor_change("", "a", 0.1));
    }

    #[test]
    fn test_type_change_title() {
        let title = modification_title(&Node::from("x"), &Node::Mapping(Mapping::new()), 0.1);
        assert_eq!(title, "type change from string to mapping");
    }

    #[test]
    fn test_multiline_strings_render_line_by_line() {
        let lines = value_lines(&Node::from("first\nsecond\n")).expect("lines");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_order_change_rendering() {
        let result = DiffResult::new(
            vec![Diff::single(
                Path::root().with_key("list"),
                Detail::order_change(vec!["a".into(), "b".into()], vec!["b".into(), "a".into()]),
            )],
            1,
        );
        let report = render(&result, &ReportConfig::default());
        assert!(report.contains("⇆ order changed"), "{report}");
        assert!(report.contains("    - a, b"), "{report}");
        assert!(report.contains("    + b, a"), "{report}");
    }
}
