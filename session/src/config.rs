//! Backend API location and endpoint paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const ME_PATH: &str = "/me";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

/// Base URL shared by all three session endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base URL. Surrounding whitespace and trailing
    /// slashes are dropped; an empty value means same-origin requests.
    pub fn new(raw: &str) -> Self {
        Self { base_url: raw.trim().trim_end_matches('/').to_owned() }
    }

    /// Build from an optional value such as `option_env!("AUTH_GATE_API_URL")`.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    /// Absolute (or same-origin) URL for `path`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    #[must_use]
    pub fn me_url(&self) -> String {
        self.endpoint(ME_PATH)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        self.endpoint(LOGOUT_PATH)
    }
}
