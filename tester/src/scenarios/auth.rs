//! Authentication Scenarios
//!
//! `GET api/key` with valid and invalid credential combinations

use api::Transport;

use crate::error::TesterResult;
use crate::runtime::Session;
use crate::testing::assertions::{expect_field, expect_no_field, expect_status};

/// Valid credentials get status 200 and a `key`
pub async fn valid_user<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let valid = &session.settings().valid;
    let response = session.client().get_api_key(&valid.email, &valid.password).await?;

    expect_status(&response, 200)?;
    expect_field(&response, "key")
}

/// Unregistered email and wrong password
pub async fn unregistered_user<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let invalid = &session.settings().invalid;
    expect_rejected(session, &invalid.email, &invalid.password).await
}

/// Unregistered email with a real password
pub async fn invalid_email<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let settings = session.settings();
    expect_rejected(session, &settings.invalid.email, &settings.valid.password).await
}

/// Registered email with a wrong password
pub async fn invalid_password<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let settings = session.settings();
    expect_rejected(session, &settings.valid.email, &settings.invalid.password).await
}

async fn expect_rejected<T: Transport>(
    session: &Session<T>,
    email: &str,
    password: &str,
) -> TesterResult<()> {
    let response = session.client().get_api_key(email, password).await?;

    expect_status(&response, 403)?;
    expect_no_field(&response, "key")
}
