//! Request and response model shared by the client and its transports

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{AuthKey, PetList};

use crate::error::{ApiError, ApiResult};

/// HTTP verbs used by the service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Binary file part of a multipart submission
#[derive(Clone, Debug, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// `multipart/form-data`
    Multipart {
        fields: Vec<(String, String)>,
        file: Option<FilePart>,
    },
}

/// One HTTP call, relative to the transport's base URL
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new<P: Into<String>>(method: HttpMethod, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach the `auth_key` header
    pub fn authorized(self, auth_key: &AuthKey) -> Self {
        self.header("auth_key", auth_key.as_str())
    }

    pub fn query<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn multipart(mut self, fields: Vec<(String, String)>, file: Option<FilePart>) -> Self {
        self.body = RequestBody::Multipart { fields, file };
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Decoded response body
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    /// Anything that is not JSON; the service answers some errors with HTML
    Text(String),
}

impl ResponseBody {
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

/// `(status, body)` pair returned by every client operation
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn json(status: u16, value: Value) -> Self {
        Self::new(status, ResponseBody::Json(value))
    }

    pub fn text<S: Into<String>>(status: u16, text: S) -> Self {
        Self::new(status, ResponseBody::Text(text.into()))
    }

    /// Build from a raw status and body text, decoding JSON when possible
    pub fn from_raw(status: u16, raw: String) -> Self {
        Self::new(status, ResponseBody::parse(raw))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the body is a JSON object carrying `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.body
            .as_json()
            .and_then(Value::as_object)
            .is_some_and(|object| object.contains_key(field))
    }

    pub fn field(&self, field: &str) -> Option<&Value> {
        self.body.as_json().and_then(|value| value.get(field))
    }

    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.field(field).and_then(Value::as_str)
    }

    pub fn auth_key(&self) -> Option<AuthKey> {
        self.body.as_json().and_then(AuthKey::from_body)
    }

    /// Decode the JSON body into `T`
    pub fn decode<T: DeserializeOwned>(&self) -> ApiResult<T> {
        match &self.body {
            ResponseBody::Json(value) => {
                serde_json::from_value(value.clone()).map_err(|e| ApiError::UnexpectedBody {
                    status: self.status,
                    message: e.to_string(),
                })
            }
            ResponseBody::Text(text) => Err(ApiError::UnexpectedBody {
                status: self.status,
                message: format!("expected JSON, got {} bytes of text", text.len()),
            }),
        }
    }

    pub fn pets(&self) -> ApiResult<PetList> {
        self.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_falls_back_to_text() {
        let html = "<html><body>Forbidden</body></html>".to_string();
        let response = ApiResponse::from_raw(403, html.clone());
        assert_eq!(response.body, ResponseBody::Text(html));
        assert!(!response.has_field("key"));
        assert!(response.auth_key().is_none());
        assert!(matches!(
            response.pets(),
            Err(ApiError::UnexpectedBody { status: 403, .. })
        ));
    }

    #[test]
    fn test_json_field_helpers() {
        let response = ApiResponse::from_raw(200, r#"{"name": "Кефир", "age": "3"}"#.to_string());
        assert!(response.is_success());
        assert!(response.has_field("name"));
        assert!(!response.has_field("pet_photo"));
        assert_eq!(response.str_field("name"), Some("Кефир"));
    }

    #[test]
    fn test_has_field_requires_object() {
        let response = ApiResponse::json(200, json!(["key"]));
        assert!(!response.has_field("key"));
    }

    #[test]
    fn test_request_builder_collects_parts() {
        let request = ApiRequest::get("api/pets")
            .authorized(&AuthKey::new("token"))
            .query("filter", "my_pets");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.header_value("AUTH_KEY"), Some("token"));
        assert_eq!(request.query, vec![("filter".to_string(), "my_pets".to_string())]);
        assert_eq!(request.body, RequestBody::Empty);
    }
}
