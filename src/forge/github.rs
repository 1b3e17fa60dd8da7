//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::{
    error::{ExtractError, Result},
    forge::{
        config::RemoteConfig,
        traits::Forge,
        types::{PrData, PrLabel},
    },
};

/// GitHub forge implementation using Octocrab for pull request lookups.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let builder =
            Octocrab::builder().personal_token(config.token.clone());
        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_pull_request(&self, number: u64) -> Result<PrData> {
        let result = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await;

        let pr = match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                error!(
                    "PR #{number} not found for {}/{}",
                    self.config.owner, self.config.repo
                );
                return Err(ExtractError::PrNotFound { number });
            }
            Err(err) => {
                error!("error fetching PR #{number}: {err}");
                return Err(err.into());
            }
            Ok(pr) => pr,
        };

        info!(
            "processing PR #{number}: {}",
            pr.title.clone().unwrap_or_default()
        );

        let labels = pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| PrLabel {
                name: label.name,
                color: label.color,
                description: label.description.unwrap_or_default(),
            })
            .collect();

        Ok(PrData {
            number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            html_url: pr
                .html_url
                .map(|url| url.to_string())
                .unwrap_or_default(),
            head_sha: pr.head.sha,
            base_branch: pr.base.ref_field,
            head_branch: pr.head.ref_field,
            labels,
        })
    }
}
