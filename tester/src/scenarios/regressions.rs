//! Regression Scenarios
//!
//! Contracts the backend currently violates. They assert the documented
//! status and stay red until the service is fixed.

use std::path::Path;

use api::Transport;

use crate::error::TesterResult;
use crate::runtime::Session;
use crate::testing::assertions::expect_status;

const NAMELESS_TYPE: &str = "корги";
const NAMELESS_AGE: &str = "7";

const BAD_PHOTO_NAME: &str = "Шарик";
const BAD_PHOTO_TYPE: &str = "дворняга";
const BAD_PHOTO_AGE: &str = "10";

/// `create_pet_simple` without `name` must be rejected
pub async fn simple_without_name<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let auth_key = session.login().await?;
    let response = session
        .client()
        .create_pet_simple(&auth_key, None, NAMELESS_TYPE, NAMELESS_AGE)
        .await?;
    expect_status(&response, 400)
}

pub async fn oversized_photo<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().oversized_photo()?;
    add_pet_with_bad_photo(session, &photo).await
}

pub async fn wrong_photo_format<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().wrong_format_photo()?;
    add_pet_with_bad_photo(session, &photo).await
}

async fn add_pet_with_bad_photo<T: Transport>(session: &Session<T>, photo: &Path) -> TesterResult<()> {
    let auth_key = session.login().await?;
    let response = session
        .client()
        .add_new_pet(&auth_key, BAD_PHOTO_NAME, BAD_PHOTO_TYPE, BAD_PHOTO_AGE, photo)
        .await?;
    expect_status(&response, 400)
}
