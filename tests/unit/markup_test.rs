//! Tests for the markup scan over real trees and grep output

use doccheck::adapters::WalkdirSearch;
use doccheck::config::DocCheckConfig;
use doccheck::core::models::{Marker, MarkupHit};
use doccheck::core::ports::TreeSearch;
use doccheck::core::services::group_hits;

use crate::common::TestProject;

fn scan(project: &TestProject) -> Vec<MarkupHit> {
    let config = DocCheckConfig::default();
    let hits = WalkdirSearch::new()
        .search(project.path(), project.path(), &Marker::default())
        .unwrap();
    config.markup_rules().filter(hits)
}

#[test]
fn test_clean_tree_has_no_hits() {
    let project = TestProject::states();
    assert!(scan(&project).is_empty());
}

#[test]
fn test_hit_reports_file_and_fragment() {
    let project = TestProject::states();
    project.add_file(
        "salt/states/file.py",
        "'''\n    See :doc:`/topics/tutorials/states` for details.\n'''\n",
    );

    let hits = scan(&project);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "salt/states/file.py");
    assert_eq!(hits[0].line, Some(2));
    assert_eq!(hits[0].fragment, "See :doc:`/topics/tutorials/states` for details.");
}

#[test]
fn test_grandfathered_files_are_excluded() {
    let project = TestProject::empty();
    project.add_file("doc/conf.py", "rst_epilog = ':doc:'\n");
    project.add_file("doc/man/salt.7", ":doc:`x`\n");
    project.add_file("doc/topics/development/conventions/documentation.rst", "Avoid :doc:\n");
    project.add_file("doc/topics/releases/2016.11.2.rst", ":doc:`old`\n");
    project.add_file("tests/unit/test_doc.py", "':doc:'\n");
    project.add_file(".tox/py3/lib/pkg.py", ":doc:\n");
    project.add_file("artifacts/log.txt", ":doc:\n");

    assert!(scan(&project).is_empty());
}

#[test]
fn test_every_hit_kept_per_file() {
    let project = TestProject::empty();
    project.add_file("doc/topics/a.rst", ":doc:`one`\ntext\n:doc:`two`\n");
    project.add_file("doc/topics/b.rst", ":doc:`three`\n");

    let hits = scan(&project);
    let grouped = group_hits(&hits);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["doc/topics/a.rst"].len(), 2);
    assert_eq!(grouped["doc/topics/b.rst"][0].fragment, ":doc:`three`");
}

#[test]
fn test_binary_files_are_skipped() {
    let project = TestProject::empty();
    std::fs::create_dir_all(project.path().join("salt")).unwrap();
    std::fs::write(project.path().join("salt/mod.pyc"), b"\x00\x01:doc:\x00").unwrap();

    assert!(scan(&project).is_empty());
}
