//! Configuration Management
//!
//! This module provides the suite configuration and its builder.

pub mod builder;
pub mod suite;

// Re-export main types
pub use builder::SuiteConfigBuilder;
pub use suite::SuiteConfig;
