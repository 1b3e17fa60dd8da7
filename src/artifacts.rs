//! Output artifacts consumed by later workflow steps.

use log::*;
use std::{fs, path::Path};

use crate::{error::Result, extractor::PullRequestRecord};

/// Complete PR information as JSON.
pub const PR_INFO_FILE: &str = "pr-info.json";
/// Extracted release notes in markdown format.
pub const RELEASE_NOTES_FILE: &str = "release-notes.md";
/// Labels to copy to the cherry-pick PR, one per line.
pub const COPYABLE_LABELS_FILE: &str = "copyable-labels.txt";

/// Write the three output artifacts, overwriting any existing files.
pub fn write_artifacts(
    record: &PullRequestRecord,
    dir: &Path,
) -> Result<()> {
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(record)?;
    fs::write(dir.join(PR_INFO_FILE), json)?;

    fs::write(dir.join(RELEASE_NOTES_FILE), &record.release_notes)?;

    let mut labels = String::new();
    for name in &record.copyable_labels {
        labels.push_str(name);
        labels.push('\n');
    }
    fs::write(dir.join(COPYABLE_LABELS_FILE), labels)?;

    debug!("wrote artifacts to {}", dir.display());

    Ok(())
}
