//! Brief report generator for shell output.

use super::{ansi_color, plural, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// One-line reporter: `between FROM and TO: N differences`
pub struct BriefReporter {
    /// Use colored output
    colored: bool,
}

impl BriefReporter {
    /// Create a new brief reporter
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
}

impl Default for BriefReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for BriefReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let count = plural(result.diffs.len(), "difference");
        Ok(format!(
            "between {} and {}: {}\n",
            config.from_label(),
            config.to_label(),
            ansi_color(&count, "bold", self.colored)
        ))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Brief
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{Detail, Diff};
    use crate::model::{Node, Path};

    #[test]
    fn test_brief_line() {
        let result = DiffResult::new(
            vec![
                Diff::single(Path::root().with_key("a"), Detail::addition(Node::Int(1))),
                Diff::single(Path::root().with_key("b"), Detail::removal(Node::Int(1))),
            ],
            1,
        );
        let report = BriefReporter::new()
            .no_color()
            .generate_diff_report(&result, &ReportConfig::between("a.yml", "b.yml"))
            .expect("report");
        assert_eq!(report, "between a.yml and b.yml: 2 differences\n");
    }

    #[test]
    fn test_no_differences() {
        let report = BriefReporter::new()
            .no_color()
            .generate_diff_report(&DiffResult::default(), &ReportConfig::between("a.yml", "b.yml"))
            .expect("report");
        assert_eq!(report, "between a.yml and b.yml: no differences\n");
    }
}
