//! Traits related to the remote git forge
use async_trait::async_trait;

use crate::{error::Result, forge::types::PrData};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// Fetch a pull request by number, normalizing missing fields to empty
    /// strings.
    async fn get_pull_request(&self, number: u64) -> Result<PrData>;
}
