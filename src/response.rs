// src/response.rs

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The uniform `{status, message, ...extra}` response body.
///
/// Extra fields are flattened next to `status` and `message`, so
/// `Envelope::success("ok").with("ongoing", list)` serializes as
/// `{"status":"success","message":"ok","ongoing":[...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            extra: Map::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// Attaches an extra field. `status` and `message` cannot be overridden.
    ///
    /// A value that fails to serialize is logged and left out of the body.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        if key == "status" || key == "message" {
            return self;
        }
        match serde_json::to_value(value) {
            Ok(value) => {
                self.extra.insert(key.to_string(), value);
            }
            Err(e) => tracing::error!(key, "Failed to serialize response field: {}", e),
        }
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
