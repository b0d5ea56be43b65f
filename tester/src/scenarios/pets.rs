//! Pet Lifecycle Scenarios
//!
//! Listing, creation, update and deletion of pets

use api::Transport;
use shared::PetFilter;

use crate::error::TesterResult;
use crate::runtime::{PetSeed, Session, first_pet_id};
use crate::testing::assertions::{expect_absent, expect_name, expect_non_empty, expect_status};

const PHOTO_PET: PetSeed = PetSeed::with_photo("Барбоскин", "двортерьер", "4");
const SIMPLE_PET: PetSeed = PetSeed::simple("Кефир", "кот", "3");
const DELETE_SEED: PetSeed = PetSeed::with_photo("Суперкот", "кот", "3");

const UPDATED_NAME: &str = "Мурзик";
const UPDATED_TYPE: &str = "Котэ";
const UPDATED_AGE: &str = "5";

/// The full listing is non-empty for a valid key
pub async fn list_all<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let auth_key = session.login().await?;
    let response = session.client().get_list_of_pets(&auth_key, PetFilter::All).await?;

    expect_status(&response, 200)?;
    expect_non_empty(&response.pets()?)
}

pub async fn add_with_photo<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().valid_photo()?;
    let auth_key = session.login().await?;

    let response = session
        .client()
        .add_new_pet(&auth_key, PHOTO_PET.name, PHOTO_PET.animal_type, PHOTO_PET.age, &photo)
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, PHOTO_PET.name)
}

pub async fn add_simple<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let auth_key = session.login().await?;

    let response = session
        .client()
        .create_pet_simple(&auth_key, Some(SIMPLE_PET.name), SIMPLE_PET.animal_type, SIMPLE_PET.age)
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, SIMPLE_PET.name)
}

/// Update the first own pet; an empty listing is a precondition failure
pub async fn update_own<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let auth_key = session.login().await?;
    let my_pets = session.my_pets(&auth_key).await?;
    let pet_id = first_pet_id(&my_pets)?;

    let response = session
        .client()
        .update_pet_info(&auth_key, &pet_id, UPDATED_NAME, UPDATED_TYPE, UPDATED_AGE)
        .await?;

    expect_status(&response, 200)?;
    expect_name(&response, UPDATED_NAME)
}

/// Delete the first own pet and check it is gone from the listing
pub async fn delete_own<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let auth_key = session.login().await?;
    let my_pets = session.ensure_own_pet(&auth_key, &DELETE_SEED).await?;
    let pet_id = first_pet_id(&my_pets)?;

    let response = session.client().delete_pet(&auth_key, &pet_id).await?;
    let remaining = session.my_pets(&auth_key).await?;

    expect_status(&response, 200)?;
    expect_absent(&remaining, &pet_id)
}
