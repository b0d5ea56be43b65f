//! HTTP transport backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::traits::Transport;
use crate::types::{ApiRequest, ApiResponse, HttpMethod, RequestBody};

/// Production transport talking to a PetFriends base URL
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport for `base_url`
    ///
    /// A bare `host:port` is treated as plain HTTP, and a trailing slash is
    /// added so request paths join below the given prefix.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let has_scheme = base_url.starts_with("http://") || base_url.starts_with("https://");
        let mut normalized = if has_scheme {
            base_url.to_string()
        } else {
            format!("http://{}", base_url)
        };
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base_url = Url::parse(&normalized).map_err(|source| ApiError::InvalidBaseUrl {
            url: normalized.clone(),
            source,
        })?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path against the base URL
    pub fn url_for(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidPath {
                path: path.to_string(),
                source,
            })
    }

    fn build(&self, request: ApiRequest) -> ApiResult<reqwest::RequestBuilder> {
        let url = self.url_for(&request.path)?;

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart { fields, file } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                if let Some(file) = file {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)?;
                    form = form.part(file.field, part);
                }
                builder.multipart(form)
            }
        };

        Ok(builder)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!("➡️ {} {}", method.as_str(), path);

        let response = self.build(request)?.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        tracing::debug!("⬅️ {} {} -> {}", method.as_str(), path, status);
        Ok(ApiResponse::from_raw(status, raw))
    }
}
