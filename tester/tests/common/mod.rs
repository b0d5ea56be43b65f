//! Shared test utilities for suite integration tests

pub mod fake_backend;
pub mod http;

use std::time::Duration;

use shared::{Credentials, Settings};
use tester::{Session, SuiteConfig, TestScenarios};

use fake_backend::{EMAIL, FakeBackend, PASSWORD};

/// Settings pointing at a running fake backend
#[allow(dead_code)]
pub fn settings_for(backend: &FakeBackend) -> Settings {
    Settings::new(Credentials::new(EMAIL, PASSWORD))
        .with_base_url(backend.base_url())
        .with_request_timeout(Duration::from_secs(5))
}

/// Scenario runner wired to a fake backend
#[allow(dead_code)]
pub fn scenarios_for(backend: &FakeBackend, skip_known_defects: bool) -> TestScenarios {
    let config = SuiteConfig::builder(settings_for(backend))
        .skip_known_defects(skip_known_defects)
        .build();
    TestScenarios::new(
        Session::from_config(&config).expect("session should build"),
        config.skip_known_defects,
    )
}
