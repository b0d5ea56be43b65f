//! Wire-level data model of the PetFriends service

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque session token returned by `GET api/key`
///
/// The token is only ever attached to outgoing requests; it is never persisted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthKey(String);

impl AuthKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Extract the `key` field from a decoded `GET api/key` body
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("key")
            .and_then(Value::as_str)
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens end up in log lines; only the prefix is ever printed.
impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "AuthKey({prefix}…)")
    }
}

/// Identifier of a remote pet record
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(String);

impl PetId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Pet record as returned by the service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    /// The service echoes age back as either a string or a number
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub pet_photo: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub user_id: Option<String>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|photo| !photo.is_empty())
    }
}

/// Response envelope of `GET api/pets`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn first(&self) -> Option<&Pet> {
        self.pets.first()
    }

    pub fn ids(&self) -> impl Iterator<Item = &PetId> {
        self.pets.iter().map(|pet| &pet.id)
    }

    pub fn contains(&self, id: &PetId) -> bool {
        self.ids().any(|candidate| candidate == id)
    }
}

/// Listing filter accepted by `GET api/pets`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PetFilter {
    /// Full public listing (`filter=`)
    #[default]
    All,
    /// Only pets owned by the authenticated user (`filter=my_pets`)
    MyPets,
}

impl PetFilter {
    /// Value sent in the `filter` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "" => Some(PetFilter::All),
            "my_pets" => Some(PetFilter::MyPets),
            _ => None,
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetFilter::All => write!(f, "all"),
            PetFilter::MyPets => write!(f, "my_pets"),
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
