//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use std::path::{Path, PathBuf};

use doccheck::core::models::{CoverageIssue, IssueKind, MarkupHit, Pairing};
use doccheck::core::services::CoverageOutcome;
use doccheck::output::{
    CheckSummary, CoverageReport, MarkupReport, OperationResult, OutputMode, PairingInfo,
};

fn outcome(issues: Vec<CoverageIssue>) -> CoverageOutcome {
    CoverageOutcome {
        pairing: "states".to_string(),
        modules_checked: 3,
        docs_checked: 2,
        issues,
        collisions: vec![],
    }
}

fn issue(kind: IssueKind, name: &str, dir: &str) -> CoverageIssue {
    CoverageIssue {
        pairing: "states".to_string(),
        kind,
        name: name.to_string(),
        expected_dir: PathBuf::from(dir),
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CoverageReport Tests
// =============================================================================

#[test]
fn coverage_report_splits_issue_kinds() {
    let report = CoverageReport::from_outcomes(&[outcome(vec![
        issue(IssueKind::MissingDoc, "zabbix_host", "doc/ref/states/all"),
        issue(IssueKind::OrphanDoc, "ghost", "salt/states"),
    ])]);

    assert!(!report.passed);
    assert_eq!(report.issue_count(), 2);
    let p = &report.pairings[0];
    assert_eq!(p.missing_docs, vec!["zabbix_host"]);
    assert_eq!(p.orphan_docs, vec!["ghost"]);
    assert_eq!(
        p.messages[0],
        "module file zabbix_host is missing documentation in doc/ref/states/all"
    );
}

#[test]
fn coverage_report_serialization() {
    let report = CoverageReport::from_outcomes(&[outcome(vec![])]);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"modules_checked\":3"));
    assert!(!json.contains("collisions"));
}

// =============================================================================
// MarkupReport Tests
// =============================================================================

#[test]
fn markup_report_groups_by_file() {
    let hits = vec![
        MarkupHit::new("doc/a.rst", Some(1), ":doc:`x`"),
        MarkupHit::new("doc/a.rst", Some(9), "  :doc:`y`  "),
        MarkupHit::new("salt/b.py", None, ":doc:`z`"),
    ];
    let report = MarkupReport::new(":doc:", &hits, vec![]);

    assert!(!report.passed);
    assert_eq!(report.hit_count, 3);
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files["doc/a.rst"][0].line, Some(1));
    assert_eq!(report.files["doc/a.rst"][1].fragment, ":doc:`y`");
    assert_eq!(report.files["salt/b.py"][0].line, None);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"line\":9"));
    assert!(!json.contains("unparsed"));
}

#[test]
fn markup_report_empty_passes() {
    let report = MarkupReport::new(":doc:", &[], vec![]);
    assert!(report.passed);
    assert!(report.files.is_empty());
}

// =============================================================================
// Summary and listing
// =============================================================================

#[test]
fn summary_fails_if_either_fails() {
    let coverage = CoverageReport::from_outcomes(&[outcome(vec![])]);
    let markup = MarkupReport::new(":doc:", &[MarkupHit::new("a.rst", Some(1), ":doc:")], vec![]);
    assert!(!CheckSummary::new(coverage.clone(), markup).passed);

    let clean = MarkupReport::new(":doc:", &[], vec![]);
    assert!(CheckSummary::new(coverage, clean).passed);
}

#[test]
fn pairing_info_resolves_paths() {
    let pairing = Pairing::new("auth", &["salt", "auth"], &["doc", "ref", "auth", "all"]);
    let info = PairingInfo::new(&pairing, Path::new("/repo"));
    assert_eq!(info.doc_prefix, "salt.auth.");
    assert!(info.module_dir.ends_with("auth"));
    assert_eq!(info.source_ext, "py");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created .doccheck.toml".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
}
