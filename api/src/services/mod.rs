//! Client service implementations

pub mod photo;
pub mod reqwest_transport;

#[cfg(test)]
pub mod tests;

pub use photo::{PHOTO_FIELD, load_photo, mime_for};
pub use reqwest_transport::ReqwestTransport;
