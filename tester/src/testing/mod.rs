//! Testing Framework
//!
//! Response assertions and the outcome/report model of a suite run.

pub mod assertions;
pub mod outcome;

// Re-export main types
pub use outcome::{KnownDefect, Outcome, ScenarioReport, SuiteReport};
