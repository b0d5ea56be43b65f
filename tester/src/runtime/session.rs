//! Authenticated session over one client
//!
//! Scenarios never hold state between runs; each one logs in again and reads
//! the remote listing it needs.

use api::{PetFriends, ReqwestTransport, Transport};
use shared::{AuthKey, PetFilter, PetId, PetList, Settings};

use crate::config::SuiteConfig;
use crate::error::{TesterError, TesterResult};
use crate::runtime::Fixtures;
use crate::testing::assertions::expect_status;

/// Pet created when a scenario needs "my pets" to be non-empty
#[derive(Debug, Clone, Copy)]
pub struct PetSeed {
    pub name: &'static str,
    pub animal_type: &'static str,
    pub age: &'static str,
    /// Create through `add_new_pet` with the valid photo instead of `create_pet_simple`
    pub with_photo: bool,
}

impl PetSeed {
    pub const fn simple(name: &'static str, animal_type: &'static str, age: &'static str) -> Self {
        Self { name, animal_type, age, with_photo: false }
    }

    pub const fn with_photo(name: &'static str, animal_type: &'static str, age: &'static str) -> Self {
        Self { name, animal_type, age, with_photo: true }
    }
}

pub struct Session<T = ReqwestTransport> {
    client: PetFriends<T>,
    settings: Settings,
    fixtures: Fixtures,
}

impl Session<ReqwestTransport> {
    pub fn from_config(config: &SuiteConfig) -> TesterResult<Self> {
        let client = PetFriends::from_settings(&config.settings)?;
        Ok(Self::new(
            client,
            config.settings.clone(),
            Fixtures::new(config.images_dir.clone()),
        ))
    }
}

impl<T: Transport> Session<T> {
    pub fn new(client: PetFriends<T>, settings: Settings, fixtures: Fixtures) -> Self {
        Self { client, settings, fixtures }
    }

    pub fn client(&self) -> &PetFriends<T> {
        &self.client
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    /// Obtain a key with the valid credentials
    pub async fn login(&self) -> TesterResult<AuthKey> {
        match self.client.login(&self.settings.valid).await {
            Ok(key) => Ok(key),
            Err(api::ApiError::MissingKey { status }) => Err(TesterError::Precondition(format!(
                "valid credentials for {} were rejected (status {})",
                self.settings.valid.email, status
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Current "my pets" listing
    pub async fn my_pets(&self, auth_key: &AuthKey) -> TesterResult<PetList> {
        let response = self.client.get_list_of_pets(auth_key, PetFilter::MyPets).await?;
        expect_status(&response, 200)?;
        Ok(response.pets()?)
    }

    /// "My pets", creating `seed` first when the listing is empty
    pub async fn ensure_own_pet(&self, auth_key: &AuthKey, seed: &PetSeed) -> TesterResult<PetList> {
        let pets = self.my_pets(auth_key).await?;
        if !pets.is_empty() {
            return Ok(pets);
        }

        tracing::info!("🐾 No own pets yet, creating '{}'", seed.name);
        self.create_pet(auth_key, seed).await?;
        self.my_pets(auth_key).await
    }

    /// Create a pet and ignore the response; callers re-read the listing
    pub async fn create_pet(&self, auth_key: &AuthKey, seed: &PetSeed) -> TesterResult<()> {
        let response = if seed.with_photo {
            let photo = self.fixtures.valid_photo()?;
            self.client
                .add_new_pet(auth_key, seed.name, seed.animal_type, seed.age, &photo)
                .await?
        } else {
            self.client
                .create_pet_simple(auth_key, Some(seed.name), seed.animal_type, seed.age)
                .await?
        };
        tracing::debug!("Seed pet '{}' -> {}", seed.name, response.status);
        Ok(())
    }
}

/// Id of the first pet in a listing
pub fn first_pet_id(pets: &PetList) -> TesterResult<PetId> {
    pets.first()
        .map(|pet| pet.id.clone())
        .ok_or_else(|| TesterError::Precondition("There is no my pets".to_string()))
}
