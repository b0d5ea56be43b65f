//! Shared error types for the PetFriends client and test suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Missing required settings: {names}")]
    MissingSetting { names: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
