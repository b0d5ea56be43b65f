//! PetFriends client
//!
//! One method per backend operation. Each issues exactly one HTTP request and
//! hands back the `(status, body)` pair untouched, so callers assert on the
//! status themselves.

use std::path::Path;

use shared::{AuthKey, Credentials, PetFilter, PetId, Settings};

use crate::error::{ApiError, ApiResult};
use crate::services::photo::load_photo;
use crate::services::reqwest_transport::ReqwestTransport;
use crate::traits::Transport;
use crate::types::{ApiRequest, ApiResponse};

pub struct PetFriends<T = ReqwestTransport> {
    transport: T,
}

impl PetFriends<ReqwestTransport> {
    /// Client for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: std::time::Duration) -> ApiResult<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(base_url, timeout)?))
    }

    pub fn from_settings(settings: &Settings) -> ApiResult<Self> {
        Self::new(&settings.base_url, settings.request_timeout)
    }
}

impl<T: Transport> PetFriends<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// `GET api/key` with `email`/`password` headers
    ///
    /// 200 carries `key` in the body; unknown users get 403 and no `key`.
    pub async fn get_api_key(&self, email: &str, password: &str) -> ApiResult<ApiResponse> {
        let request = ApiRequest::get("api/key")
            .header("email", email)
            .header("password", password);
        self.transport.send(request).await
    }

    /// Request a key and extract it, failing when the body has none
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<AuthKey> {
        let response = self
            .get_api_key(&credentials.email, &credentials.password)
            .await?;
        response.auth_key().ok_or(ApiError::MissingKey {
            status: response.status,
        })
    }

    /// `GET api/pets?filter=<filter>`
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> ApiResult<ApiResponse> {
        let request = ApiRequest::get("api/pets")
            .authorized(auth_key)
            .query("filter", filter.as_query_value());
        self.transport.send(request).await
    }

    /// `POST api/pets` as multipart, with the photo read from `pet_photo`
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        pet_photo: &Path,
    ) -> ApiResult<ApiResponse> {
        let photo = load_photo(pet_photo).await?;
        let request = ApiRequest::post("api/pets")
            .authorized(auth_key)
            .multipart(pet_fields(Some(name), animal_type, age), Some(photo));
        self.transport.send(request).await
    }

    /// `POST api/create_pet_simple` as a url-encoded form
    ///
    /// With `name` set to `None` the field is left out of the form entirely.
    pub async fn create_pet_simple(
        &self,
        auth_key: &AuthKey,
        name: Option<&str>,
        animal_type: &str,
        age: &str,
    ) -> ApiResult<ApiResponse> {
        let request = ApiRequest::post("api/create_pet_simple")
            .authorized(auth_key)
            .form(pet_fields(name, animal_type, age));
        self.transport.send(request).await
    }

    /// `PUT api/pets/{pet_id}`
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &PetId,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> ApiResult<ApiResponse> {
        let request = ApiRequest::put(format!("api/pets/{}", pet_id))
            .authorized(auth_key)
            .form(pet_fields(Some(name), animal_type, age));
        self.transport.send(request).await
    }

    /// `DELETE api/pets/{pet_id}`
    pub async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &PetId) -> ApiResult<ApiResponse> {
        let request = ApiRequest::delete(format!("api/pets/{}", pet_id)).authorized(auth_key);
        self.transport.send(request).await
    }

    /// `POST api/pets/set_photo/{pet_id}` with a single `pet_photo` part
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &PetId,
        pet_photo: &Path,
    ) -> ApiResult<ApiResponse> {
        let photo = load_photo(pet_photo).await?;
        let request = ApiRequest::post(format!("api/pets/set_photo/{}", pet_id))
            .authorized(auth_key)
            .multipart(Vec::new(), Some(photo));
        self.transport.send(request).await
    }
}

fn pet_fields(name: Option<&str>, animal_type: &str, age: &str) -> Vec<(String, String)> {
    let mut fields = Vec::with_capacity(3);
    if let Some(name) = name {
        fields.push(("name".to_string(), name.to_string()));
    }
    fields.push(("animal_type".to_string(), animal_type.to_string()));
    fields.push(("age".to_string(), age.to_string()));
    fields
}
