use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::RegistryError;
use crate::core::models::nurse::{Nurse, NurseFields};
use crate::core::models::profile::UserProfile;

/// Accepts `30` as well as `"30"`.
#[derive(Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl Scalar {
    pub fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

// Request structs for JSON payloads. Every field is optional so presence is
// checked by the service rather than rejected by the extractor.
#[derive(Deserialize, ToSchema, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NurseRequest {
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub dob: Option<String>,
    pub age: Option<Scalar>,
}

impl From<NurseRequest> for NurseFields {
    fn from(req: NurseRequest) -> Self {
        NurseFields {
            name: req.name,
            license_number: req.license_number,
            dob: req.dob,
            age: req.age.map(Scalar::into_text),
        }
    }
}

#[derive(Deserialize, ToSchema, Default, Debug)]
pub struct GetProfileRequest {
    pub uid: Option<Scalar>,
}

/// Envelope around every successful response.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub response: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, response: T, message: &str) -> Self {
        ApiResponse {
            status: status.as_u16(),
            response,
            message: message.to_string(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct NurseListPayload {
    pub nurses: Vec<Nurse>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct NursePayload {
    pub nurse: Nurse,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UpdatedNursePayload {
    #[serde(rename = "updatedNurse")]
    pub updated_nurse: Nurse,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Default)]
pub struct EmptyPayload {}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ProfilePayload {
    pub user: UserProfile,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundResponse {
    pub message: String,
    pub resource_path: String,
    pub method: String,
}

// Newtype wrapper for RegistryError to implement IntoResponse
pub struct ApiError(pub RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        if status.is_server_error() {
            match &self.0 {
                RegistryError::Unhandled(source) => error!("Unhandled error: {}", source),
                other => error!("Request failed: {}", other),
            }
        }
        let body = ErrorResponse {
            status: status.as_u16(),
            message: self.0.to_string(),
            data: self.0.details().cloned(),
        };
        (status, Json(body)).into_response()
    }
}
