//! Scan for deprecated cross-reference markup

use std::fs;
use std::io::Read;
use std::path::Path;

use doccheck::Workspace;
use doccheck::output::{MarkupReport, OutputMode};

use super::ChecksFailed;

/// Run the markup scan, walking the tree or reading grep output
pub fn markup(root: &Path, grep_output: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let workspace = Workspace::open(root)?;
    let marker = workspace.config().marker()?;

    let report = match grep_output {
        Some(source) => {
            let text = read_source(source)?;
            let parsed = workspace.markup_from_grep(&text);
            if parsed.binary > 0 {
                log::debug!("skipped {} binary match line(s)", parsed.binary);
            }
            MarkupReport::new(marker.as_str(), &parsed.hits, parsed.unparsed)
        },
        None => {
            let hits = workspace.markup()?;
            MarkupReport::new(marker.as_str(), &hits, Vec::new())
        },
    };

    report.render(mode);

    if !report.passed {
        return Err(ChecksFailed(format!(
            "{} occurrence(s) of '{}'",
            report.hit_count, report.marker
        ))
        .into());
    }
    Ok(())
}

fn read_source(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}
