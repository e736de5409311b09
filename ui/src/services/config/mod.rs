use crate::console_warn;

/// Backend URL baked in at build time, e.g. `BOOKING_BACKEND_URL=https://api.example.com dx build`
const BUILD_BACKEND_URL: Option<&str> = option_env!("BOOKING_BACKEND_URL");

const FALLBACK_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the booking backend, without trailing slash
    pub backend_url: String,
    /// Lifetime assumed for a freshly issued access token, in milliseconds
    pub access_token_expiry_offset_ms: u64,
    /// In-app route opened after a successful login or when already signed in
    pub post_login_route: String,
    /// Client-side minimum password length (not re-checked by the backend call)
    pub min_password_length: usize,
    pub product_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: FALLBACK_BACKEND_URL.to_string(),
            access_token_expiry_offset_ms: 60 * 1000,
            post_login_route: "/search".to_string(),
            min_password_length: 8,
            product_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    /// Create a configuration for the current environment.
    ///
    /// The backend URL is taken from `BOOKING_BACKEND_URL` at build time,
    /// otherwise from the origin the app is served from.
    pub fn new() -> Self {
        let backend_url = BUILD_BACKEND_URL
            .map(str::to_string)
            .or_else(window_origin)
            .unwrap_or_else(|| FALLBACK_BACKEND_URL.to_string());

        Self::default().with_backend_url(&backend_url)
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = backend_url.trim_end_matches('/').to_string();
        self
    }

    /// Join an API path onto the backend URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(format!(
                "backend_url must be an http(s) URL, got '{}'",
                self.backend_url
            ));
        }

        if self.access_token_expiry_offset_ms == 0 {
            return Err("access_token_expiry_offset_ms must be greater than 0".to_string());
        }

        if !self.post_login_route.starts_with('/') {
            return Err("post_login_route must be an absolute in-app path".to_string());
        }

        if self.min_password_length == 0 {
            return Err("min_password_length must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults if the environment is invalid
pub fn get_global_config() -> AppConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = AppConfig::new();
            if let Err(e) = config.validate() {
                console_warn!("Invalid configuration: {}", e);
                AppConfig::default()
            } else {
                config
            }
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.post_login_route, "/search");
        assert_eq!(config.min_password_length, 8);
    }

    #[test]
    fn test_backend_url_trailing_slash_is_trimmed() {
        let config = AppConfig::default().with_backend_url("https://book.example.com/");
        assert_eq!(config.backend_url, "https://book.example.com");
        assert_eq!(
            config.endpoint("/auth/preflight"),
            "https://book.example.com/auth/preflight"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig::default().with_backend_url("book.example.com");
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.access_token_expiry_offset_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.post_login_route = "search".to_string();
        assert!(config.validate().is_err());
    }
}
