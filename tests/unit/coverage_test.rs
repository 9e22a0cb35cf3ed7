//! Tests for the coverage check against real directories

use doccheck::CheckError;
use doccheck::adapters::FsDirectoryListing;
use doccheck::core::models::{IssueKind, Pairing};
use doccheck::core::services::check_pairing;

use crate::common::TestProject;

fn states() -> Pairing {
    Pairing::new("states", &["salt", "states"], &["doc", "ref", "states", "all"])
        .with_module_skip(&["__init__"])
        .with_doc_skip(&["index", "all"])
        .with_doc_prefix("salt.states.")
}

#[test]
fn test_matching_tree_passes() {
    let project = TestProject::states();
    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();

    assert!(outcome.passed());
    assert_eq!(outcome.modules_checked, 1);
    assert_eq!(outcome.docs_checked, 1);
}

#[test]
fn test_removed_page_reports_missing_doc() {
    let project = TestProject::states();
    project.remove_file("doc/ref/states/all/salt.states.zabbix_host.rst");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    assert!(!outcome.passed());
    assert_eq!(outcome.issues.len(), 1);

    let issue = &outcome.issues[0];
    assert_eq!(issue.kind, IssueKind::MissingDoc);
    assert_eq!(issue.name, "zabbix_host");
    assert_eq!(issue.expected_dir, project.path().join("doc/ref/states/all"));
    assert!(issue.message().starts_with("module file zabbix_host is missing documentation in "));
}

#[test]
fn test_orphan_page_reports_module_dir() {
    let project = TestProject::states();
    project.add_file("doc/ref/states/all/salt.states.retired.rst", "");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    let orphans: Vec<_> = outcome.issues_of(IssueKind::OrphanDoc).collect();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].name, "retired");
    assert_eq!(orphans[0].expected_dir, project.path().join("salt/states"));
    assert!(orphans[0].message().starts_with("Doc file retired is missing associated module in "));
}

#[test]
fn test_unrelated_files_are_ignored() {
    let project = TestProject::states();
    project.add_file("salt/states/zabbix_host.pyc", "");
    project.add_file("salt/states/README", "");
    project.add_file("salt/states/helpers/__init__.py", "");
    project.add_file("doc/ref/states/all/notes.txt", "");
    project.add_file("doc/ref/states/all/all.rst", "");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    assert!(outcome.passed());
}

#[test]
fn test_unprefixed_page_still_matches() {
    let project = TestProject::states();
    project.add_file("salt/states/pkgrepo.py", "");
    project.add_file("doc/ref/states/all/pkgrepo.rst", "");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    assert!(outcome.passed());
}

#[test]
fn test_collision_is_noted_not_failed() {
    let project = TestProject::states();
    project.add_file("doc/ref/states/all/zabbix_host.rst", "");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    assert!(outcome.passed());
    assert_eq!(outcome.collisions.len(), 1);
    assert_eq!(outcome.collisions[0].name, "zabbix_host");
}

#[test]
fn test_every_issue_is_reported() {
    let project = TestProject::states();
    project.add_file("salt/states/etcd_mod.py", "");
    project.add_file("salt/states/s3.py", "");
    project.add_file("doc/ref/states/all/salt.states.ghost.rst", "");

    let outcome = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap();
    let names: Vec<_> = outcome.issues.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["etcd_mod", "s3", "ghost"]);
}

#[test]
fn test_missing_doc_dir_is_setup_error() {
    let project = TestProject::empty();
    project.add_file("salt/states/zabbix_host.py", "");

    let err = check_pairing(&FsDirectoryListing::new(), project.path(), &states()).unwrap_err();
    match err {
        CheckError::DirectoryNotFound(path) => {
            assert_eq!(path, project.path().join("doc/ref/states/all"));
        },
        other => panic!("unexpected error: {other}"),
    }
}
