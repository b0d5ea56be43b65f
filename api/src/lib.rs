//! PetFriends API client
//!
//! A thin client over the PetFriends REST service. Every operation issues a
//! single request and returns an [`ApiResponse`] holding the raw status and
//! decoded body; HTTP is isolated behind the [`Transport`] trait so the client
//! can be driven by a mock.

pub mod error;
pub mod types;
pub mod traits;
pub mod client;
pub mod services;

// Re-export main types
pub use error::{ApiError, ApiResult};
pub use types::*;
pub use traits::*;
pub use client::PetFriends;
pub use services::*;
