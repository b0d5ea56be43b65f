//! Suite Configuration Builder

use super::SuiteConfig;
use shared::Settings;
use std::path::PathBuf;
use std::time::Duration;

pub struct SuiteConfigBuilder {
    config: SuiteConfig,
}

impl SuiteConfigBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            config: SuiteConfig {
                settings,
                images_dir: SuiteConfig::default_images_dir(),
                skip_known_defects: false,
                max_duration: Duration::from_secs(120), // Whole-suite budget
            },
        }
    }

    /// Point the client at another deployment
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.settings.base_url = base_url.into();
        self
    }

    /// Per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.settings.request_timeout = timeout;
        self
    }

    /// Directory holding the photo fixtures
    pub fn images_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.images_dir = dir.into();
        self
    }

    pub fn skip_known_defects(mut self, skip: bool) -> Self {
        self.config.skip_known_defects = skip;
        self
    }

    /// Set maximum duration of the whole run
    pub fn max_duration(mut self, duration: Duration) -> Self {
        self.config.max_duration = duration;
        self
    }

    pub fn build(self) -> SuiteConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Credentials;

    #[test]
    fn test_builder_defaults_and_overrides() {
        let settings = Settings::new(Credentials::new("user@example.com", "secret"));

        let defaults = SuiteConfigBuilder::new(settings.clone()).build();
        assert_eq!(defaults.settings.base_url, shared::settings::DEFAULT_BASE_URL);
        assert!(defaults.images_dir.ends_with("images"));
        assert!(!defaults.skip_known_defects);

        let custom = SuiteConfigBuilder::new(settings)
            .base_url("http://127.0.0.1:3000")
            .request_timeout(Duration::from_secs(3))
            .images_dir("/tmp/fixtures")
            .skip_known_defects(true)
            .max_duration(Duration::from_secs(10))
            .build();
        assert_eq!(custom.settings.base_url, "http://127.0.0.1:3000");
        assert_eq!(custom.settings.request_timeout, Duration::from_secs(3));
        assert_eq!(custom.images_dir, PathBuf::from("/tmp/fixtures"));
        assert!(custom.skip_known_defects);
        assert_eq!(custom.max_duration, Duration::from_secs(10));
    }
}
