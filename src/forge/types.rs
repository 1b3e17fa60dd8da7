//! Shared data types for pull request lookups.

#[derive(Debug, Clone, PartialEq)]
/// A label attached to a pull request, as returned by the forge.
pub struct PrLabel {
    pub name: String,
    pub color: String,
    /// Empty string when the label carries no description.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Normalized pull request data returned from the forge.
pub struct PrData {
    pub number: u64,
    /// Empty string when the PR has no title.
    pub title: String,
    /// Empty string when the PR has no body.
    pub body: String,
    pub html_url: String,
    pub head_sha: String,
    pub base_branch: String,
    pub head_branch: String,
    /// Labels in the order returned by the forge.
    pub labels: Vec<PrLabel>,
}
