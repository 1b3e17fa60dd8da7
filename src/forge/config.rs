//! Configuration for the remote repository connection.
use secrecy::SecretString;

/// Remote repository connection configuration for authenticating and
/// interacting with the GitHub API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_remote_config() {
        let remote = RemoteConfig::default();
        assert!(remote.owner.is_empty());
        assert!(remote.repo.is_empty());
    }
}
