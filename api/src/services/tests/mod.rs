//! Tests for client services
//!
//! The transport tests run against a local wiremock server and check the
//! exact HTTP shape the service expects.

pub mod photo;
