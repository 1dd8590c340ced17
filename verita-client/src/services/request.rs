//! Replayable description of an outbound API call.

use crate::error::ApiError;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const REGISTER_PATH: &str = "/api/v1/auth/register";
pub const REFRESH_PATH: &str = "/api/v1/auth/refresh";

/// Everything needed to send a request, captured up front so the identical
/// request can be sent again after a token refresh.
///
/// The bearer token is deliberately not part of the description: it is read
/// from the client at dispatch time, so a replay picks up the refreshed token.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: RequestBody,
    request_id: String,
}

#[derive(Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    /// `application/x-www-form-urlencoded` fields, in order.
    Form(Vec<(String, String)>),
    Multipart(FilePart),
}

/// A single file field of a multipart upload. The bytes are kept so the form
/// can be rebuilt, since a reqwest multipart form is consumed on send.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PendingRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: RequestBody::Empty,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Encode `params` as the query string. Fields serializing to nothing
    /// (e.g. skipped `None`s) leave no trace in the URL.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self, ApiError> {
        let encoded = serde_urlencoded::to_string(params)?;
        self.query = (!encoded.is_empty()).then_some(encoded);
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.body = RequestBody::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }

    /// Correlation ID shared by the initial attempt, the refresh and the replay.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub(crate) fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }

    pub fn url(&self, base_url: &str) -> String {
        match &self.query {
            Some(query) => format!("{}{}?{}", base_url, self.path, query),
            None => format!("{}{}", base_url, self.path),
        }
    }

    /// Credential endpoints answer 401 for bad credentials, which a token
    /// refresh cannot fix.
    pub fn is_auth_exempt(&self) -> bool {
        self.path == LOGIN_PATH || self.path == REGISTER_PATH
    }
}

impl RequestBody {
    pub(crate) fn apply(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let builder = match self {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime)?;
                builder.multipart(Form::new().part(file.field.clone(), part))
            }
        };
        Ok(builder)
    }
}

impl std::fmt::Debug for RequestBody {
    // Form bodies carry passwords; only the shape is printed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Json(_) => write!(f, "Json(..)"),
            RequestBody::Form(fields) => f
                .debug_list()
                .entries(fields.iter().map(|(k, _)| k))
                .finish(),
            RequestBody::Multipart(file) => f
                .debug_struct("Multipart")
                .field("field", &file.field)
                .field("file_name", &file.file_name)
                .field("len", &file.bytes.len())
                .finish(),
        }
    }
}
