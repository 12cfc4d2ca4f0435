use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile document as returned by the identity provider. Passed through untouched.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct UserProfile(pub serde_json::Value);
