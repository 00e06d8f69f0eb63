//! Application Configuration
//!
//! Configuration for the Auth application layer. Secrets and TTLs are
//! loaded once at startup by the composition root.

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret for short-lived access tokens
    pub access_token_secret: Vec<u8>,
    /// Secret for long-lived refresh tokens
    pub refresh_token_secret: Vec<u8>,
    /// Secret for email confirmation tokens
    pub confirmation_token_secret: Vec<u8>,

    /// Access token TTL in seconds (15 minutes)
    pub access_token_ttl_secs: i64,
    /// Refresh token TTL in seconds (1 week)
    pub refresh_token_ttl_secs: i64,
    /// Confirmation token TTL in seconds (24 hours)
    pub confirmation_token_ttl_secs: i64,

    /// Access token cookie name
    pub access_cookie_name: String,
    /// Refresh token cookie name
    pub refresh_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,

    /// Base URL embedded in confirmation mail links
    pub verification_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: vec![0u8; 32],
            refresh_token_secret: vec![0u8; 32],
            confirmation_token_secret: vec![0u8; 32],
            access_token_ttl_secs: 15 * 60,
            refresh_token_ttl_secs: 7 * 24 * 3600,
            confirmation_token_ttl_secs: 24 * 3600,
            access_cookie_name: "access_token".to_string(),
            refresh_cookie_name: "refresh_token".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            verification_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with random secrets (for development)
    pub fn with_random_secrets() -> Self {
        use rand::RngCore;

        let mut rng = rand::rng();
        let mut secret = || {
            let mut bytes = vec![0u8; 32];
            rng.fill_bytes(&mut bytes);
            bytes
        };

        Self {
            access_token_secret: secret(),
            refresh_token_secret: secret(),
            confirmation_token_secret: secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secrets()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.access_token_ttl_secs, 900);
        assert_eq!(config.refresh_token_ttl_secs, 604800);
        assert_eq!(config.confirmation_token_ttl_secs, 86400);
        assert_eq!(config.access_cookie_name, "access_token");
        assert_eq!(config.refresh_cookie_name, "refresh_token");
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_with_random_secrets() {
        let config1 = AuthConfig::with_random_secrets();
        let config2 = AuthConfig::with_random_secrets();

        assert_ne!(config1.access_token_secret, config2.access_token_secret);
        assert_ne!(config1.access_token_secret, config1.refresh_token_secret);
        assert!(config1.access_token_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();

        assert!(!config.cookie_secure);
        assert!(config.access_token_secret.iter().any(|&b| b != 0));
    }
}
