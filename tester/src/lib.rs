//! PetFriends Contract Suite
//!
//! End-to-end checks of the PetFriends REST service. Each scenario is a short,
//! linear sequence of client calls followed by status and body assertions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tester::*;
//!
//! # async fn run() -> Result<(), TesterError> {
//! let settings = shared::Settings::from_env()?;
//! let config = SuiteConfig::builder(settings).skip_known_defects(true).build();
//!
//! let session = Session::from_config(&config)?;
//! let scenarios = TestScenarios::new(session, config.skip_known_defects);
//!
//! let report = scenarios.run_named("auth").await?;
//! report.log_summary();
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! Scenarios tied to a documented backend defect still assert the documented
//! contract; their failures are reported as known defects rather than
//! silently accepted.

// Core modules
pub mod config;
pub mod error;
pub mod runtime;
pub mod scenarios;
pub mod testing;

// Main interfaces - re-exported at crate root for convenience
pub use config::{SuiteConfig, SuiteConfigBuilder};
pub use error::{TesterError, TesterResult};
pub use runtime::{Fixtures, PetSeed, Session};
pub use scenarios::{Scenario, ScenarioGroup, TestScenarios};

// Supporting types
pub use testing::{KnownDefect, Outcome, ScenarioReport, SuiteReport};
