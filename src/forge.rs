//! GitHub access behind a small forge abstraction.
//!
//! Provides token-based authentication and pull request lookup through a
//! common trait so the extractor can be tested without network access.

/// Configuration and authentication for the remote repository.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for pull request lookup.
pub mod traits;

/// Normalized pull request data returned by the forge.
pub mod types;
