use std::path::PathBuf;

use grader_client::ClientSettings;
use grader_core::Identity;

/// Provider-hosted auth pages. Sign-in and sign-out are full-page flows on
/// the provider's domain; this app only opens them in the system browser.
#[derive(Debug, Clone, Default)]
pub struct AuthSettings {
    pub domain: String,
    pub client_id: String,
    pub site_url: String,
}

impl AuthSettings {
    pub fn sign_in_url(&self) -> String {
        format!(
            "{}/login?client_id={}&response_type=code&redirect_uri={}",
            self.domain,
            self.client_id,
            encode(&self.site_url)
        )
    }

    pub fn logout_url(&self) -> String {
        format!(
            "{}/logout?client_id={}&logout_uri={}",
            self.domain,
            self.client_id,
            encode(&self.site_url)
        )
    }
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub client: ClientSettings,
    pub auth: AuthSettings,
    /// Identity injected through the environment; stored on startup so the
    /// next launch resolves it from disk.
    pub bootstrap_identity: Option<Identity>,
    /// Directory holding the stored session file.
    pub session_dir: PathBuf,
}

impl AppSettings {
    /// Reads `GRADER_*` overrides on top of the defaults.
    pub fn from_env() -> Self {
        let mut client = ClientSettings::default();
        client.api_base = env_or("GRADER_API_ENDPOINT", client.api_base);
        client.tweet_api_base = env_or("GRADER_TWEET_API_ENDPOINT", client.tweet_api_base);
        client.score_base = env_or("GRADER_SCORE_ENDPOINT", client.score_base);
        client.score_public_key = env_or("GRADER_SCORE_PUBLIC_KEY", client.score_public_key);

        let auth = AuthSettings {
            domain: env_or("GRADER_COGNITO_DOMAIN", String::new()),
            client_id: env_or("GRADER_COGNITO_CLIENT_ID", String::new()),
            site_url: env_or("GRADER_SITE_URL", String::new()),
        };

        let bootstrap_identity = std::env::var("GRADER_ID_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .map(|id_token| Identity {
                id_token,
                email: std::env::var("GRADER_USER_EMAIL").ok().filter(|e| !e.is_empty()),
            });

        let session_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            client,
            auth,
            bootstrap_identity,
            session_dir,
        }
    }
}

fn env_or(name: &str, default: String) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::AuthSettings;

    fn auth() -> AuthSettings {
        AuthSettings {
            domain: "https://auth.example.com".to_string(),
            client_id: "client-1".to_string(),
            site_url: "https://grader.example.com/".to_string(),
        }
    }

    #[test]
    fn logout_url_encodes_the_return_target() {
        assert_eq!(
            auth().logout_url(),
            "https://auth.example.com/logout?client_id=client-1\
             &logout_uri=https%3A%2F%2Fgrader.example.com%2F"
        );
    }

    #[test]
    fn sign_in_url_carries_the_code_flow_parameters() {
        let url = auth().sign_in_url();
        assert!(url.starts_with("https://auth.example.com/login?client_id=client-1"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fgrader.example.com%2F"));
    }
}
