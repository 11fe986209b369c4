//! Application Configuration
//!
//! Tunables for storage, session and toast lifetimes.

use std::time::Duration;

/// Storage slot holding the serialized item collection
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_millis(5_000);

/// Fixed session window, measured from login (not sliding)
pub const SESSION_LIFETIME: Duration = Duration::from_secs(30 * 60);

/// Placeholder credential check for login
pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub toast_lifetime: Duration,
    pub session_lifetime: Duration,
    pub min_login_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_lifetime: TOAST_LIFETIME,
            session_lifetime: SESSION_LIFETIME,
            min_login_password_len: MIN_LOGIN_PASSWORD_LEN,
        }
    }
}
