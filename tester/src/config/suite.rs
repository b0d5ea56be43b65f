//! Suite Configuration
//!
//! Everything a run needs besides the scenario selection

use shared::Settings;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub settings: Settings,
    pub images_dir: PathBuf,
    /// Report known-defect scenarios as skipped instead of running them
    pub skip_known_defects: bool,
    pub max_duration: Duration,
}

impl SuiteConfig {
    /// Create a new builder
    pub fn builder(settings: Settings) -> crate::config::builder::SuiteConfigBuilder {
        crate::config::builder::SuiteConfigBuilder::new(settings)
    }

    /// Fixture images shipped with this crate
    pub fn default_images_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("images")
    }
}
