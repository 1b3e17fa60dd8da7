//! Parsing of release note source blocks embedded in PR descriptions.
//!
//! A source block is a fenced segment whose info string names a category and
//! a target audience group, e.g. a fence opened with `improvement user` as
//! its info string and the note message as its body.
//!
//! Fences whose info string does not have the two-token shape (ordinary code
//! fences) are ignored. Fences with the right shape but an unrecognized
//! category or target group are reported as malformed so callers can log
//! them without failing the extraction.

use regex::Regex;
use std::fmt;

use crate::error::Result;

/// Categories recognized in source block info strings.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "breaking",
    "feature",
    "bugfix",
    "doc",
    "improvement",
    "action",
    "noteworthy",
    "other",
];

/// Audience groups recognized in source block info strings.
pub const KNOWN_TARGET_GROUPS: &[&str] =
    &["user", "operator", "developer", "dependency"];

const SOURCE_BLOCK_PATTERN: &str = r"(?s)``` *(?P<category>\w+)[ \t]+(?P<target_group>\w+)[^\n]*\n(?P<note>.*?)\n?```";

#[derive(Debug, Clone, PartialEq)]
/// A recognized release note block.
pub struct SourceBlock {
    pub category: String,
    pub target_group: String,
    pub note_message: String,
}

impl SourceBlock {
    /// Whether the block carries an actual note. Authors leave "none" (any
    /// casing) or an empty message to opt out of release notes.
    pub fn has_content(&self) -> bool {
        let trimmed = self.note_message.trim();
        !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("none")
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A block matching the source block shape that failed validation.
pub struct MalformedBlock {
    /// The info string of the offending fence.
    pub header: String,
    pub reason: String,
}

impl fmt::Display for MalformedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "```{}: {}", self.header, self.reason)
    }
}

/// Scan PR body content for release note source blocks, partitioning them
/// into valid and malformed blocks.
pub fn iter_source_blocks(
    content: &str,
) -> Result<(Vec<SourceBlock>, Vec<MalformedBlock>)> {
    let re = Regex::new(SOURCE_BLOCK_PATTERN)?;

    let mut valid: Vec<SourceBlock> = vec![];
    let mut malformed: Vec<MalformedBlock> = vec![];

    for caps in re.captures_iter(content) {
        let category = caps["category"].to_string();
        let target_group = caps["target_group"].to_string();
        let note = caps["note"].to_string();

        if !KNOWN_CATEGORIES.contains(&category.as_str()) {
            malformed.push(MalformedBlock {
                header: format!("{category} {target_group}"),
                reason: format!("unknown category: {category}"),
            });
            continue;
        }

        if !KNOWN_TARGET_GROUPS.contains(&target_group.as_str()) {
            malformed.push(MalformedBlock {
                header: format!("{category} {target_group}"),
                reason: format!("unknown target group: {target_group}"),
            });
            continue;
        }

        valid.push(SourceBlock {
            category,
            target_group,
            note_message: note,
        });
    }

    Ok((valid, malformed))
}
