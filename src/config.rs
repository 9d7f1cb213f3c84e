use std::env;

/// Placeholder value shipped in example env files; treated the same as an
/// absent token.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_GITHUB_TOKEN_HERE";

const FALLBACK_USERNAME: &str = "octocat";

#[derive(Debug, Clone)]
pub struct Config {
    /// Optional GitHub token. `None` disables the Authorization header only;
    /// everything else behaves identically (GraphQL queries will simply be
    /// rejected and fall back to their defaults).
    pub github_token: Option<String>,
    /// Username shown when the caller supplies none.
    pub default_username: String,
}

impl Config {
    pub fn from_env() -> Self {
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty() && t != TOKEN_PLACEHOLDER);

        let default_username = env::var("OCTOVIEW_DEFAULT_USER")
            .unwrap_or_else(|_| FALLBACK_USERNAME.to_string());

        Self {
            github_token,
            default_username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_token_is_ignored() {
        // from_env reads process env, so exercise the filter directly
        let token = Some(TOKEN_PLACEHOLDER.to_string()).filter(|t| !t.is_empty() && t != TOKEN_PLACEHOLDER);
        assert!(token.is_none());

        let token = Some("ghp_abc123".to_string()).filter(|t| !t.is_empty() && t != TOKEN_PLACEHOLDER);
        assert_eq!(token.as_deref(), Some("ghp_abc123"));
    }
}
