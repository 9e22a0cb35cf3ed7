//! Coverage service - matches module files to documentation pages
//!
//! Both sides are reduced to bare names and compared as sets. Every
//! difference is reported; nothing short-circuits on the first failure.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::core::CheckError;
use crate::core::models::{CoverageIssue, IssueKind, Pairing};
use crate::core::ports::DirectoryListing;

/// Two or more page files that reduce to the same bare name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// The shared bare name
    pub name: String,
    /// The page files that produced it, sorted
    pub files: Vec<String>,
}

/// Result of checking one pairing
#[derive(Debug, Clone)]
pub struct CoverageOutcome {
    /// Pairing name
    pub pairing: String,
    /// Number of modules compared (after skip-list exclusion)
    pub modules_checked: usize,
    /// Number of pages compared (after prefix stripping and skip-list exclusion)
    pub docs_checked: usize,
    /// Missing docs first, then orphan docs, each sorted by name
    pub issues: Vec<CoverageIssue>,
    /// Page files that merged into one name
    pub collisions: Vec<Collision>,
}

impl CoverageOutcome {
    /// Whether every module has a page and every page has a module
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues of one kind
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &CoverageIssue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }
}

/// Strip `.{ext}` from a file name, if that is its final extension
///
/// A bare dotfile such as `.py` has no stem and is not a source file.
fn stem<'a>(file: &'a str, ext: &str) -> Option<&'a str> {
    let stem = file.strip_suffix(ext)?.strip_suffix('.')?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// Build the module set from the file names in a module directory
#[must_use]
pub fn module_names(files: &[String], pairing: &Pairing) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|f| stem(f, &pairing.source_ext))
        .filter(|name| !pairing.module_skip.contains(*name))
        .map(str::to_string)
        .collect()
}

/// Build the doc set from the file names in a documentation directory
///
/// The dotted prefix is stripped before the skip-list is consulted. Returns
/// the set plus any names that more than one file reduced to.
#[must_use]
pub fn doc_names(files: &[String], pairing: &Pairing) -> (BTreeSet<String>, Vec<Collision>) {
    let prefix = pairing.effective_doc_prefix();
    let mut sources: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for file in files {
        let Some(name) = stem(file, &pairing.doc_ext) else {
            continue;
        };
        let name = name.strip_prefix(prefix.as_str()).unwrap_or(name);
        if pairing.doc_skip.contains(name) {
            continue;
        }
        sources.entry(name.to_string()).or_default().push(file.clone());
    }

    let collisions = sources
        .iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(name, files)| {
            let mut files = files.clone();
            files.sort();
            Collision {
                name: name.clone(),
                files,
            }
        })
        .collect();

    (sources.into_keys().collect(), collisions)
}

/// Compare the two sets, labelling each difference with where its counterpart belongs
#[must_use]
pub fn compare(
    pairing: &Pairing,
    modules: &BTreeSet<String>,
    docs: &BTreeSet<String>,
    module_dir: &Path,
    doc_dir: &Path,
) -> Vec<CoverageIssue> {
    let missing = modules.difference(docs).map(|name| CoverageIssue {
        pairing: pairing.name.clone(),
        kind: IssueKind::MissingDoc,
        name: name.clone(),
        expected_dir: doc_dir.to_path_buf(),
    });

    let orphans = docs.difference(modules).map(|name| CoverageIssue {
        pairing: pairing.name.clone(),
        kind: IssueKind::OrphanDoc,
        name: name.clone(),
        expected_dir: module_dir.to_path_buf(),
    });

    missing.chain(orphans).collect()
}

/// Check one pairing under `root`
///
/// # Errors
///
/// Returns a [`CheckError`] if the pairing is invalid or either directory
/// cannot be listed. Mismatches are not errors; they are in the outcome.
pub fn check_pairing(
    listing: &dyn DirectoryListing,
    root: &Path,
    pairing: &Pairing,
) -> Result<CoverageOutcome, CheckError> {
    pairing.validate()?;

    let module_dir = pairing.module_path(root);
    let doc_dir = pairing.doc_path(root);

    let modules = module_names(&listing.list_files(&module_dir)?, pairing);
    let (docs, collisions) = doc_names(&listing.list_files(&doc_dir)?, pairing);

    for c in &collisions {
        log::warn!(
            "[{}] {} page files reduce to '{}': {}",
            pairing.name,
            c.files.len(),
            c.name,
            c.files.join(", ")
        );
    }

    let issues = compare(pairing, &modules, &docs, &module_dir, &doc_dir);
    log::debug!(
        "[{}] {} module(s), {} page(s), {} issue(s)",
        pairing.name,
        modules.len(),
        docs.len(),
        issues.len()
    );

    Ok(CoverageOutcome {
        pairing: pairing.name.clone(),
        modules_checked: modules.len(),
        docs_checked: docs.len(),
        issues,
        collisions,
    })
}
