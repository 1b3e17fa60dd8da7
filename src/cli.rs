//! CLI argument parsing and credential resolution.
use clap::Parser;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    error::{ExtractError, Result},
    forge::config::RemoteConfig,
};

/// Extract pull request metadata, labels, and release notes for cherry-pick
/// automation.
#[derive(Parser, Debug)]
#[command(name = "extract_pr_info", version, about, long_about = None)]
pub struct Args {
    /// Pull request number to extract info from.
    pub pr_number: u64,

    /// Repository owner.
    pub repo_owner: String,

    /// Repository name.
    pub repo_name: String,

    #[arg(long, default_value = "")]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value = ".")]
    /// Directory where output artifacts are written.
    pub output_dir: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the remote repository connection, resolving the token from
    /// the flag or the GITHUB_TOKEN environment variable.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let token = resolve_token(
            &self.github_token,
            env::var("GITHUB_TOKEN").ok(),
        )?;

        Ok(RemoteConfig {
            owner: self.repo_owner.clone(),
            repo: self.repo_name.clone(),
            token,
        })
    }
}

fn resolve_token(
    explicit: &str,
    env_token: Option<String>,
) -> Result<SecretString> {
    let mut token = explicit.to_string();

    if token.is_empty()
        && let Some(env_token) = env_token
    {
        token = env_token;
    }

    if token.is_empty() {
        return Err(ExtractError::MissingToken);
    }

    Ok(SecretString::from(token))
}
