//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → diff → report pipeline, error
//! handling paths, and the CLI command handlers with real fixture files.

use semdiff::cli::{run_between, BetweenConfig, ComparePaths};
use semdiff::config::AppConfig;
use semdiff::pipeline::{
    compute_diff, exit_codes, load_input, load_pair, output_report, PipelineError,
};
use semdiff::reports::ReportFormat;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture(name: &str) -> String {
    Path::new(FIXTURES_DIR).join(name).to_string_lossy().to_string()
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_multi_document_fixture() {
        let input = load_input(&fixture("kube/from.yml")).expect("load should succeed");
        assert_eq!(input.documents.len(), 2);
        assert_ne!(input.content_hash, 0);
    }

    #[test]
    fn load_json_fixture() {
        let input = load_input(&fixture("json/from.json")).expect("load should succeed");
        assert_eq!(input.documents.len(), 1);
    }

    #[test]
    fn load_pair_fails_on_missing_from() {
        let err = load_pair("/no/such/from.yml", &fixture("simple-to.yml")).expect_err("missing file");
        let pipeline = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert!(matches!(pipeline, PipelineError::LoadFailed { location, .. } if location == "/no/such/from.yml"));
    }

    #[test]
    fn load_pair_fails_on_invalid_to() {
        let tmp = TempDir::new().expect("temp dir");
        let bad = tmp.path().join("bad.yml");
        std::fs::write(&bad, "a: [unclosed\n").expect("write");

        let err = load_pair(&fixture("simple-from.yml"), &bad.to_string_lossy()).expect_err("invalid YAML");
        assert!(err.to_string().contains("bad.yml"));
    }
}

// ============================================================================
// Diff and Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    fn render(format: ReportFormat, from: &str, to: &str, config: AppConfig) -> String {
        let tmp = TempDir::new().expect("temp dir");
        let report_path = tmp.path().join("report.out");

        let mut config = config;
        config.output.format = format;
        config.output.file = Some(report_path.clone());

        let (from, to) = load_pair(&fixture(from), &fixture(to)).expect("load");
        let result = compute_diff(&config.compare, &from, &to).expect("diff");
        output_report(&config.output, &result, &from, &to).expect("report");

        std::fs::read_to_string(report_path).expect("read report")
    }

    #[test]
    fn human_report_lists_paths_and_values() {
        let config = AppConfig::builder().omit_header(true).build();
        let report = render(ReportFormat::Human, "simple-from.yml", "simple-to.yml", config);

        assert_eq!(
            report,
            "name\n  ± value change\n    - foobar\n    + fOObAr\n"
        );
    }

    #[test]
    fn human_report_header() {
        let report = render(ReportFormat::Human, "simple-from.yml", "simple-to.yml", AppConfig::default());
        let mut lines = report.lines();

        assert!(lines.next().expect("from line").starts_with("between "));
        assert!(lines.next().expect("to line").starts_with("    and "));
        assert_eq!(lines.next(), Some("returned one difference"));
    }

    #[test]
    fn human_report_multi_document_go_patch_paths() {
        let config = AppConfig::builder().omit_header(true).use_go_patch_paths(true).build();
        let report = render(ReportFormat::Human, "kube/from.yml", "kube/to.yml", config);

        assert!(report.contains("/spec/replicas  (document #1)\n"));
        assert!(report.contains("/spec/template/spec/containers/name=web/image  (document #1)\n"));
        assert!(report.contains("⇆ order changed"));
        assert!(report.contains("    - web, sidecar\n"));
        assert!(report.contains("    + sidecar, web\n"));
    }

    #[test]
    fn brief_report() {
        let report = render(ReportFormat::Brief, "bosh/from.yml", "bosh/to.yml", AppConfig::default());
        assert!(report.ends_with(": 4 differences\n"));
    }

    #[test]
    fn json_report_counts() {
        let report = render(ReportFormat::Json, "kube/from.yml", "kube/to.yml", AppConfig::default());
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");

        assert_eq!(value["summary"]["total_diffs"], 4);
        assert_eq!(value["summary"]["order_changes"], 1);
        assert_eq!(value["metadata"]["document_count"], 2);
        assert_eq!(value["diffs"][1]["path"], "/spec/replicas");
        assert_eq!(value["diffs"][1]["document_index"], 0);
    }

    #[test]
    fn ignore_order_changes_drops_order_only_diffs() {
        let config = AppConfig::builder().ignore_order_changes(true).build();
        let report = render(ReportFormat::Brief, "json/from.json", "json/to.yml", config);
        assert!(report.ends_with(": one difference\n"));
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    fn between(from: &str, to: &str, config: AppConfig, tmp: &TempDir) -> anyhow::Result<i32> {
        let mut config = config;
        config.output.file = Some(tmp.path().join("report.txt"));
        run_between(BetweenConfig::new(ComparePaths::new(fixture(from), fixture(to)), config))
    }

    #[test]
    fn exit_status_reflects_difference_count() {
        let tmp = TempDir::new().expect("temp dir");
        let config = AppConfig::builder().set_exit_status(true).build();
        assert_eq!(between("bosh/from.yml", "bosh/to.yml", config, &tmp).expect("run"), 4);
    }

    #[test]
    fn no_exit_status_without_flag() {
        let tmp = TempDir::new().expect("temp dir");
        assert_eq!(
            between("bosh/from.yml", "bosh/to.yml", AppConfig::default(), &tmp).expect("run"),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn swap_turns_additions_into_removals() {
        let tmp = TempDir::new().expect("temp dir");
        let config = AppConfig::builder()
            .swap(true)
            .omit_header(true)
            .output_format(ReportFormat::Json)
            .build();
        between("kube/from.yml", "kube/to.yml", config, &tmp).expect("run");

        let report = std::fs::read_to_string(tmp.path().join("report.txt")).expect("read");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(value["diffs"][0]["path"], "/metadata");
        assert_eq!(value["diffs"][0]["details"][0]["kind"], "removal");
    }

    #[test]
    fn document_count_mismatch_fails() {
        let tmp = TempDir::new().expect("temp dir");
        let err = between("kube/from.yml", "kube/single.yml", AppConfig::default(), &tmp)
            .expect_err("mismatch");
        assert!(err.to_string().contains("document count mismatch"));
    }
}

// ============================================================================
// Binary Tests
// ============================================================================

mod binary {
    use super::*;

    fn semdiff() -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_semdiff"));
        command.env("NO_COLOR", "1").env_remove("RUST_LOG");
        command
    }

    #[test]
    fn between_brief_with_exit_status() {
        let output = semdiff()
            .args(["between", "-o", "brief", "--set-exit-status"])
            .arg(fixture("simple-from.yml"))
            .arg(fixture("simple-to.yml"))
            .output()
            .expect("run semdiff");

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8(output.stdout).expect("utf8");
        assert!(stdout.ends_with(": one difference\n"));
    }

    #[test]
    fn bw_alias_and_identical_inputs() {
        let output = semdiff()
            .args(["bw", "-b", "--set-exit-status"])
            .arg(fixture("kube/from.yml"))
            .arg(fixture("kube/from.yml"))
            .output()
            .expect("run semdiff");

        assert_eq!(output.status.code(), Some(0));
    }

    #[test]
    fn missing_input_exits_with_error() {
        let output = semdiff()
            .args(["between", "/no/such/a.yml"])
            .arg(fixture("simple-to.yml"))
            .output()
            .expect("run semdiff");

        assert_eq!(output.status.code(), Some(exit_codes::ERROR));
        let stderr = String::from_utf8(output.stderr).expect("utf8");
        assert!(stderr.contains("/no/such/a.yml"));
    }
}
