//! In-process PetFriends stand-in
//!
//! `Conforming` answers the way the documented contract says; `Defective`
//! reproduces the known backend bugs (nameless pets and bad photos accepted,
//! photo upload crashing with 500).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Form, Json, Router,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use serde_json::json;

use super::http::{TestServer, spawn_router};

pub const EMAIL: &str = "owner@example.com";
pub const PASSWORD: &str = "correct-horse";
pub const AUTH_TOKEN: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";
pub const MAX_PHOTO_BYTES: usize = 100 * 1024;

const OWNER_ID: &str = "owner";
const STRANGER_ID: &str = "stranger";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendMode {
    Conforming,
    Defective,
}

#[derive(Clone, Debug, Serialize)]
pub struct StoredPet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    pub pet_photo: String,
    pub created_at: String,
    pub user_id: String,
}

impl StoredPet {
    fn new(name: &str, animal_type: &str, age: &str, user_id: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            name: name.to_string(),
            animal_type: animal_type.to_string(),
            age: age.to_string(),
            pet_photo: String::new(),
            created_at: created_timestamp(),
            user_id: user_id.to_string(),
        }
    }
}

struct BackendState {
    mode: BackendMode,
    /// Newest first, like the real listing
    pets: Mutex<Vec<StoredPet>>,
}

impl BackendState {
    fn insert(&self, pet: StoredPet) -> StoredPet {
        self.pets.lock().unwrap().insert(0, pet.clone());
        pet
    }
}

pub struct FakeBackend {
    server: TestServer,
    state: Arc<BackendState>,
}

#[allow(dead_code)]
impl FakeBackend {
    /// Backend holding one foreign pet and one pet owned by the test account
    pub async fn start(mode: BackendMode) -> Self {
        let backend = Self::start_without_own_pets(mode).await;
        backend
            .state
            .insert(StoredPet::new("Бобик", "пёс", "6", OWNER_ID));
        backend
    }

    /// Backend whose "my pets" listing starts empty
    pub async fn start_without_own_pets(mode: BackendMode) -> Self {
        let state = Arc::new(BackendState {
            mode,
            pets: Mutex::new(Vec::new()),
        });
        state.insert(StoredPet::new("Соседский", "кот", "9", STRANGER_ID));

        let router = Router::new()
            .route("/api/key", get(get_key))
            .route("/api/pets", get(list_pets).post(add_pet))
            .route("/api/create_pet_simple", post(create_pet_simple))
            .route("/api/pets/:pet_id", put(update_pet).delete(delete_pet))
            .route("/api/pets/set_photo/:pet_id", post(set_photo))
            .with_state(state.clone());

        Self {
            server: spawn_router(router).await,
            state,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    pub fn own_pets(&self) -> Vec<StoredPet> {
        self.state
            .pets
            .lock()
            .unwrap()
            .iter()
            .filter(|pet| pet.user_id == OWNER_ID)
            .cloned()
            .collect()
    }

    pub fn all_pets(&self) -> Vec<StoredPet> {
        self.state.pets.lock().unwrap().clone()
    }
}

fn created_timestamp() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Html("<h1>Forbidden</h1><p>Please provide 'auth_key' Header</p>"),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({"message": message}))).into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html("<title>500 Internal Server Error</title><h1>Internal Server Error</h1>"),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("auth_key")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|key| key == AUTH_TOKEN)
}

struct Upload {
    fields: HashMap<String, String>,
    photo: Option<(String, usize)>,
}

async fn read_multipart(mut multipart: Multipart) -> Upload {
    let mut upload = Upload {
        fields: HashMap::new(),
        photo: None,
    };
    while let Some(field) = multipart.next_field().await.ok().flatten() {
        let name = field.name().unwrap_or("").to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let size = field.bytes().await.map(|bytes| bytes.len()).unwrap_or(0);
                if name == "pet_photo" {
                    upload.photo = Some((file_name, size));
                }
            }
            None => {
                let text = field.text().await.unwrap_or_default();
                upload.fields.insert(name, text);
            }
        }
    }
    upload
}

fn photo_is_acceptable(file_name: &str, size: usize) -> bool {
    let extension = file_name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    matches!(extension.as_str(), "jpg" | "jpeg" | "png") && size <= MAX_PHOTO_BYTES
}

fn photo_uri(file_name: &str, size: usize) -> String {
    format!("data:image/jpeg;name={file_name};size={size}")
}

fn non_empty(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields.get(name).filter(|value| !value.is_empty()).cloned()
}

async fn get_key(headers: HeaderMap) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string()
    };

    if header("email") == EMAIL && header("password") == PASSWORD {
        Json(json!({"key": AUTH_TOKEN})).into_response()
    } else {
        (
            StatusCode::FORBIDDEN,
            Html("<h1>Forbidden</h1><p>This user wasn't found in database</p>"),
        )
            .into_response()
    }
}

async fn list_pets(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    let only_mine = match query.get("filter").map(String::as_str) {
        None | Some("") => false,
        Some("my_pets") => true,
        Some(_) => return bad_request("Filter value is incorrect"),
    };

    let pets: Vec<StoredPet> = state
        .pets
        .lock()
        .unwrap()
        .iter()
        .filter(|pet| !only_mine || pet.user_id == OWNER_ID)
        .cloned()
        .collect();

    Json(json!({"pets": pets})).into_response()
}

async fn add_pet(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    let upload = read_multipart(multipart).await;
    let name = non_empty(&upload.fields, "name");
    let (file_name, size) = upload.photo.clone().unwrap_or_default();

    if state.mode == BackendMode::Conforming {
        if name.is_none() {
            return bad_request("Field 'name' is required");
        }
        if upload.photo.is_none() || !photo_is_acceptable(&file_name, size) {
            return bad_request("Photo must be a JPG/PNG image up to 100 KB");
        }
    }

    let mut pet = StoredPet::new(
        &name.unwrap_or_default(),
        &upload.fields.get("animal_type").cloned().unwrap_or_default(),
        &upload.fields.get("age").cloned().unwrap_or_default(),
        OWNER_ID,
    );
    pet.pet_photo = photo_uri(&file_name, size);

    Json(state.insert(pet)).into_response()
}

async fn create_pet_simple(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    let name = non_empty(&fields, "name");
    if state.mode == BackendMode::Conforming && name.is_none() {
        return bad_request("Field 'name' is required");
    }

    let pet = StoredPet::new(
        &name.unwrap_or_default(),
        &fields.get("animal_type").cloned().unwrap_or_default(),
        &fields.get("age").cloned().unwrap_or_default(),
        OWNER_ID,
    );

    Json(state.insert(pet)).into_response()
}

async fn update_pet(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(pet_id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    let mut pets = state.pets.lock().unwrap();
    let Some(pet) = pets
        .iter_mut()
        .find(|pet| pet.id == pet_id && pet.user_id == OWNER_ID)
    else {
        return bad_request("Pet with this id wasn't found!");
    };

    if let Some(name) = non_empty(&fields, "name") {
        pet.name = name;
    }
    if let Some(animal_type) = non_empty(&fields, "animal_type") {
        pet.animal_type = animal_type;
    }
    if let Some(age) = non_empty(&fields, "age") {
        pet.age = age;
    }

    Json(pet.clone()).into_response()
}

async fn delete_pet(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(pet_id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    state
        .pets
        .lock()
        .unwrap()
        .retain(|pet| !(pet.id == pet_id && pet.user_id == OWNER_ID));

    StatusCode::OK.into_response()
}

async fn set_photo(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(pet_id): Path<String>,
    multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return forbidden();
    }

    let upload = read_multipart(multipart).await;
    let Some((file_name, size)) = upload.photo else {
        return bad_request("Field 'pet_photo' is required");
    };

    if !photo_is_acceptable(&file_name, size) {
        return match state.mode {
            BackendMode::Conforming => bad_request("Photo must be a JPG/PNG image up to 100 KB"),
            BackendMode::Defective => server_error(),
        };
    }

    let mut pets = state.pets.lock().unwrap();
    let Some(pet) = pets
        .iter_mut()
        .find(|pet| pet.id == pet_id && pet.user_id == OWNER_ID)
    else {
        return bad_request("Pet with this id wasn't found!");
    };
    pet.pet_photo = photo_uri(&file_name, size);

    Json(pet.clone()).into_response()
}
