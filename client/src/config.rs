//! Backend endpoint configuration.
//!
//! The users API origin is fixed at build time: WASM bundles have no process
//! environment, so `SIGNUP_API_BASE_URL` is captured by `option_env!` when the
//! crate is compiled and falls back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Where the users backend lives and where to go after a successful signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), login_path: DEFAULT_LOGIN_PATH.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `SIGNUP_API_BASE_URL`: users backend origin (default `http://localhost:8000`)
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("SIGNUP_API_BASE_URL"))
    }

    /// Build config from an optional base URL override. Blank overrides are
    /// ignored and a trailing `/` is trimmed so paths join cleanly.
    #[must_use]
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, ..Self::default() }
    }
}
