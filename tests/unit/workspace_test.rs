//! Tests for Workspace, the entry point that wires adapters to services

use doccheck::adapters::toml::ConfigSource;
use doccheck::config::DocCheckConfig;
use doccheck::{CheckError, Workspace};

use crate::common::TestProject;

#[test]
fn test_open_reads_config() {
    let project = TestProject::states();
    let workspace = Workspace::open(project.path()).unwrap();

    assert!(matches!(workspace.source(), ConfigSource::File(_)));
    let outcomes = workspace.coverage(&[]).unwrap();
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].passed());
}

#[test]
fn test_open_missing_root() {
    let project = TestProject::empty();
    let err = Workspace::open(&project.path().join("absent")).unwrap_err();
    assert!(matches!(err, CheckError::DirectoryNotFound(_)));
}

#[test]
fn test_defaults_need_every_tree() {
    let project = TestProject::empty();
    let workspace = Workspace::open(project.path()).unwrap();
    assert_eq!(workspace.source(), &ConfigSource::Defaults);

    let err = workspace.coverage(&[]).unwrap_err();
    assert!(matches!(err, CheckError::DirectoryNotFound(_)));
}

#[test]
fn test_scan_root_limits_markup() {
    let project = TestProject::states();
    project.add_file("vendor/lib.rst", ":doc:`x`\n");
    project.add_file("salt/states/bad.py", "# :doc:`y`\n");

    let mut config = DocCheckConfig::default();
    config.markup.root = vec!["salt".to_string()];
    let workspace = Workspace::with_config(project.path(), config);

    let hits = workspace.markup().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "salt/states/bad.py");
}

#[test]
fn test_markup_from_grep_output() {
    let project = TestProject::states();
    let workspace = Workspace::open(project.path()).unwrap();

    let output = "\
/src/salt/salt/states/file.py:    :doc:`a`
/src/salt/doc/conf.py:':doc:'
Binary file /src/salt/salt/states/file.pyc matches
";
    let parsed = workspace.markup_from_grep(output);
    assert_eq!(parsed.hits.len(), 1);
    assert_eq!(parsed.hits[0].path, "/src/salt/salt/states/file.py");
    assert_eq!(parsed.binary, 1);
}
