//! Photo Upload Scenarios
//!
//! `POST api/pets/set_photo/{id}` with valid and invalid payloads

use std::path::Path;

use api::{ApiResponse, Transport};

use crate::error::TesterResult;
use crate::runtime::{PetSeed, Session, first_pet_id};
use crate::testing::assertions::{expect_field, expect_status};

const PHOTO_SEED: PetSeed = PetSeed::simple("Феликс", "Бегемот", "2");
const WRONG_FORMAT_PET: PetSeed = PetSeed::simple("Мурчик", "Кошак", "2");
const OVERSIZED_PET: PetSeed = PetSeed::simple("Арчи", "Собака", "2");

/// Set the valid photo on the first own pet, creating one if needed
pub async fn add_to_own_pet<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().valid_photo()?;
    let auth_key = session.login().await?;
    let my_pets = session.ensure_own_pet(&auth_key, &PHOTO_SEED).await?;
    let pet_id = first_pet_id(&my_pets)?;

    let response = session.client().add_photo_of_pet(&auth_key, &pet_id, &photo).await?;

    expect_status(&response, 200)?;
    expect_field(&response, "pet_photo")
}

/// A text file set as photo must be rejected with 400
///
/// Only the status is asserted. Older runs of this check also required a
/// `pet_photo` field in the reply, but a 400 carries no pet record; the field
/// would only show up if the service stored the bad upload.
pub async fn wrong_format<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().wrong_format_photo()?;
    let response = upload_to_fresh_pet(session, &WRONG_FORMAT_PET, &photo).await?;
    expect_status(&response, 400)
}

pub async fn oversized<T: Transport>(session: &Session<T>) -> TesterResult<()> {
    let photo = session.fixtures().oversized_photo()?;
    let response = upload_to_fresh_pet(session, &OVERSIZED_PET, &photo).await?;
    expect_status(&response, 400)
}

/// Create `seed`, then upload `photo` to the newest own pet
async fn upload_to_fresh_pet<T: Transport>(
    session: &Session<T>,
    seed: &PetSeed,
    photo: &Path,
) -> TesterResult<ApiResponse> {
    let auth_key = session.login().await?;
    session.create_pet(&auth_key, seed).await?;

    let my_pets = session.my_pets(&auth_key).await?;
    let pet_id = first_pet_id(&my_pets)?;

    Ok(session.client().add_photo_of_pet(&auth_key, &pet_id, photo).await?)
}
