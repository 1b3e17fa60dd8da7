//! Pull request info extraction.
//!
//! Fetches a single PR through the forge, derives a normalized record, and
//! assembles release notes from the source blocks embedded in the PR body.

use log::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    forge::{traits::Forge, types::PrLabel},
    notes,
};

/// Label name prefixes that should be copied to a derived cherry-pick PR.
pub const COPYABLE_LABEL_PREFIXES: &[&str] = &["area", "kind"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A label attached to the pull request.
pub struct LabelInfo {
    pub name: String,
    pub color: String,
    pub description: String,
}

impl From<PrLabel> for LabelInfo {
    fn from(label: PrLabel) -> Self {
        Self {
            name: label.name,
            color: label.color,
            description: label.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Normalized pull request information written out for downstream workflow
/// steps.
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub html_url: String,
    pub head_sha: String,
    pub base_branch: String,
    pub head_branch: String,
    pub labels: Vec<LabelInfo>,
    pub copyable_labels: Vec<String>,
    pub release_notes: String,
}

/// Outcome of collecting release notes from a PR body. Parsing problems
/// degrade to `Empty` rather than failing the extraction.
enum ReleaseNotes {
    Found(String),
    Empty,
}

/// Extract comprehensive PR information including release notes.
pub async fn extract(
    forge: &dyn Forge,
    pr_number: u64,
) -> Result<PullRequestRecord> {
    let pr = forge.get_pull_request(pr_number).await?;

    let copyable_labels = copyable_label_names(&pr.labels);

    let release_notes = match collect_release_notes(pr_number, &pr.body) {
        ReleaseNotes::Found(formatted) => formatted,
        ReleaseNotes::Empty => String::new(),
    };

    Ok(PullRequestRecord {
        number: pr.number,
        title: pr.title,
        body: pr.body,
        html_url: pr.html_url,
        head_sha: pr.head_sha,
        base_branch: pr.base_branch,
        head_branch: pr.head_branch,
        labels: pr.labels.into_iter().map(LabelInfo::from).collect(),
        copyable_labels,
        release_notes,
    })
}

/// Names of labels that should be copied to the cherry-pick PR, in original
/// order. Prefix match is case-sensitive.
fn copyable_label_names(labels: &[PrLabel]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| {
            COPYABLE_LABEL_PREFIXES
                .iter()
                .any(|prefix| label.name.starts_with(prefix))
        })
        .map(|label| label.name.clone())
        .collect()
}

/// Collect and format release note blocks from the PR body. Malformed blocks
/// and parser failures are logged and never abort the extraction.
fn collect_release_notes(pr_number: u64, body: &str) -> ReleaseNotes {
    if body.is_empty() {
        warn!("PR #{pr_number} has no body content");
        return ReleaseNotes::Empty;
    }

    release_notes_from_blocks(pr_number, notes::iter_source_blocks(body))
}

/// Format the parse outcome into joined fenced blocks. A parse failure
/// degrades to `Empty` so extraction still returns a valid record.
fn release_notes_from_blocks(
    pr_number: u64,
    parsed: Result<(Vec<notes::SourceBlock>, Vec<notes::MalformedBlock>)>,
) -> ReleaseNotes {
    let (valid, malformed) = match parsed {
        Ok(blocks) => blocks,
        Err(err) => {
            warn!(
                "failed to extract release notes from PR #{pr_number}: {err}"
            );
            return ReleaseNotes::Empty;
        }
    };

    if !malformed.is_empty() {
        info!("found {} malformed release note block(s)", malformed.len());
        for block in &malformed {
            warn!("malformed release note block: {block}");
        }
    }

    if valid.is_empty() {
        info!("no release note blocks found in PR #{pr_number}");
        return ReleaseNotes::Empty;
    }

    info!("found {} release note block(s)", valid.len());

    let formatted = valid
        .iter()
        .filter(|block| block.has_content())
        .map(|block| {
            format!(
                "```{} {}\n{}\n```",
                block.category, block.target_group, block.note_message
            )
        })
        .collect::<Vec<String>>();

    if formatted.is_empty() {
        ReleaseNotes::Empty
    } else {
        ReleaseNotes::Found(formatted.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{traits::MockForge, types::PrData};

    fn pr_data(body: &str, labels: Vec<PrLabel>) -> PrData {
        PrData {
            number: 42,
            title: "Fix scheduling".to_string(),
            body: body.to_string(),
            html_url: "https://github.com/test/repo/pull/42".to_string(),
            head_sha: "abc123".to_string(),
            base_branch: "master".to_string(),
            head_branch: "fix/scheduling".to_string(),
            labels,
        }
    }

    fn label(name: &str) -> PrLabel {
        PrLabel {
            name: name.to_string(),
            color: "ededed".to_string(),
            description: "".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_body_yields_empty_release_notes() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(|_| Ok(pr_data("", vec![])));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(record.release_notes, "");
        assert_eq!(record.body, "");
    }

    #[tokio::test]
    async fn formats_single_release_note_block() {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_get_pull_request().returning(|_| {
            Ok(pr_data("```improvement user\nFaster startup\n```", vec![]))
        });

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(
            record.release_notes,
            "```improvement user\nFaster startup\n```"
        );
    }

    #[tokio::test]
    async fn joins_multiple_blocks_with_newlines() {
        let body = "intro\n\n```feature user\nNew thing\n```\n\n```bugfix operator\nLess breakage\n```";
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(move |_| Ok(pr_data(body, vec![])));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(
            record.release_notes,
            "```feature user\nNew thing\n```\n```bugfix operator\nLess breakage\n```"
        );
    }

    #[tokio::test]
    async fn skips_blocks_without_content() {
        let body = "```improvement user\nnone\n```\n```feature user\n\n```";
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(move |_| Ok(pr_data(body, vec![])));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(record.release_notes, "");
    }

    #[tokio::test]
    async fn malformed_blocks_do_not_abort_extraction() {
        let body = "```improvement customer\nbad target\n```\n```improvement user\ngood note\n```";
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(move |_| Ok(pr_data(body, vec![])));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(record.release_notes, "```improvement user\ngood note\n```");
    }

    #[tokio::test]
    async fn filters_copyable_labels_case_sensitively() {
        let labels = vec![
            label("areaFoo"),
            label("Area-Foo"),
            label("kind/bug"),
            label("cherry-pick"),
            label("area/networking"),
        ];
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(move |_| Ok(pr_data("", labels.clone())));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(
            record.copyable_labels,
            vec!["areaFoo", "kind/bug", "area/networking"]
        );
        assert_eq!(record.labels.len(), 5);
    }

    #[tokio::test]
    async fn copyable_labels_are_subset_of_labels() {
        let labels = vec![label("kindness"), label("other")];
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(move |_| Ok(pr_data("", labels.clone())));

        let record = extract(&mock_forge, 42).await.unwrap();

        // prefix match, not path match: "kindness" still qualifies
        assert_eq!(record.copyable_labels, vec!["kindness"]);
        let names: Vec<&str> =
            record.labels.iter().map(|l| l.name.as_str()).collect();
        for name in &record.copyable_labels {
            assert!(names.contains(&name.as_str()));
        }
    }

    #[test]
    fn parser_failure_degrades_to_empty_notes() {
        use crate::error::ExtractError;

        let bad_pattern = regex::Regex::new("(").unwrap_err();
        let outcome = release_notes_from_blocks(
            42,
            Err(ExtractError::Regex(bad_pattern)),
        );

        assert!(matches!(outcome, ReleaseNotes::Empty));
    }

    #[tokio::test]
    async fn forge_errors_propagate() {
        use crate::error::ExtractError;

        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(|_| Err(ExtractError::PrNotFound { number: 42 }));

        let result = extract(&mock_forge, 42).await;

        assert!(matches!(
            result,
            Err(ExtractError::PrNotFound { number: 42 })
        ));
    }

    #[tokio::test]
    async fn populates_basic_fields_from_forge_data() {
        let mut mock_forge = MockForge::new();
        mock_forge
            .expect_get_pull_request()
            .returning(|_| Ok(pr_data("a body", vec![])));

        let record = extract(&mock_forge, 42).await.unwrap();

        assert_eq!(record.number, 42);
        assert_eq!(record.title, "Fix scheduling");
        assert_eq!(record.head_sha, "abc123");
        assert_eq!(record.base_branch, "master");
        assert_eq!(record.head_branch, "fix/scheduling");
        assert_eq!(
            record.html_url,
            "https://github.com/test/repo/pull/42"
        );
    }
}
