//! Transport trait definition for dependency injection

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{ApiRequest, ApiResponse};

/// Sends one request and returns the raw `(status, body)` pair
///
/// Implementations must not turn non-2xx statuses into errors; only a failure
/// to complete the exchange at all is an `Err`.
#[mockall::automock]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}
