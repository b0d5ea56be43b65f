//! Credentials and endpoint settings
//!
//! Settings are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Required
//! - `PETFRIENDS_EMAIL`, `PETFRIENDS_PASSWORD`: a registered account
//!
//! ## Optional
//! - `PETFRIENDS_BASE_URL` (default [`DEFAULT_BASE_URL`])
//! - `PETFRIENDS_INVALID_EMAIL`, `PETFRIENDS_INVALID_PASSWORD`: an unregistered pair
//! - `PETFRIENDS_TIMEOUT_SECS`: per-request timeout (default 30)

use crate::errors::{SharedError, SharedResult};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru/";
pub const DEFAULT_INVALID_EMAIL: &str = "invalid@x.com";
pub const DEFAULT_INVALID_PASSWORD: &str = "wrongpass";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "PETFRIENDS_BASE_URL";
pub const ENV_EMAIL: &str = "PETFRIENDS_EMAIL";
pub const ENV_PASSWORD: &str = "PETFRIENDS_PASSWORD";
pub const ENV_INVALID_EMAIL: &str = "PETFRIENDS_INVALID_EMAIL";
pub const ENV_INVALID_PASSWORD: &str = "PETFRIENDS_INVALID_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "PETFRIENDS_TIMEOUT_SECS";

/// Email/password pair sent to `GET api/key`
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Pair that the service must not recognise
    pub fn unregistered() -> Self {
        Self::new(DEFAULT_INVALID_EMAIL, DEFAULT_INVALID_PASSWORD)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub base_url: String,
    pub valid: Credentials,
    pub invalid: Credentials,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn new(valid: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            valid,
            invalid: Credentials::unregistered(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load settings from the process environment, reading `.env` first
    pub fn from_env() -> SharedResult<Self> {
        // Silently ignored when no .env file exists
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let email = get(ENV_EMAIL);
        let password = get(ENV_PASSWORD);
        let (email, password) = match (email, password) {
            (Some(email), Some(password)) => (email, password),
            (email, password) => {
                let mut missing = Vec::new();
                if email.is_none() {
                    missing.push(ENV_EMAIL);
                }
                if password.is_none() {
                    missing.push(ENV_PASSWORD);
                }
                return Err(SharedError::MissingSetting {
                    names: missing.join(", "),
                });
            }
        };

        let mut settings = Self::new(Credentials::new(email, password));

        if let Some(base_url) = get(ENV_BASE_URL) {
            settings.base_url = base_url;
        }
        if let Some(invalid_email) = get(ENV_INVALID_EMAIL) {
            settings.invalid.email = invalid_email;
        }
        if let Some(invalid_password) = get(ENV_INVALID_PASSWORD) {
            settings.invalid.password = invalid_password;
        }
        if let Some(timeout) = get(ENV_TIMEOUT_SECS) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| SharedError::InvalidConfig {
                    field: ENV_TIMEOUT_SECS.to_string(),
                    value: timeout.clone(),
                })?;
            settings.request_timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
