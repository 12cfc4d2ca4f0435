use crate::api::models::{ApiResponse, ErrorResponse};
use crate::client::ClientError;
use crate::config::CONFIG;
use crate::core::models::nurse::{Nurse, calendar_date};
use crate::core::models::profile::UserProfile;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Field values sent on create and update.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NurseDraft {
    pub name: String,
    pub license_number: String,
    #[serde(with = "calendar_date")]
    pub dob: NaiveDate,
    pub age: i32,
}

/// The union of every `response` shape the server sends.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct ResponsePayload {
    nurses: Option<Vec<Nurse>>,
    nurse: Option<Nurse>,
    #[serde(rename = "updatedNurse")]
    updated_nurse: Option<Nurse>,
    user: Option<UserProfile>,
}

#[async_trait]
pub trait NurseGateway: Send + Sync {
    async fn list_nurses(&self) -> Result<Vec<Nurse>, ClientError>;
    async fn get_nurse(&self, id: i64) -> Result<Nurse, ClientError>;
    async fn create_nurse(&self, draft: &NurseDraft) -> Result<Nurse, ClientError>;
    async fn update_nurse(&self, id: i64, draft: &NurseDraft) -> Result<Nurse, ClientError>;
    async fn delete_nurse(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Clone)]
pub struct HttpNurseClient {
    client: Client,
    base_url: String,
}

impl HttpNurseClient {
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(HttpNurseClient {
            client,
            base_url: api_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for the backend named by `API_BASE_URL`.
    pub fn from_config() -> Result<Self, ClientError> {
        Self::new(CONFIG.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn nurses_url(&self) -> String {
        format!("{}/nurses/", self.base_url)
    }

    fn nurse_url(&self, id: i64) -> String {
        format!("{}/nurses/{}", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<ResponsePayload, ClientError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorResponse>().await {
                Ok(body) => body.message,
                Err(_) => status.to_string(),
            };
            warn!("Request failed with status {}: {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let envelope = resp.json::<ApiResponse<ResponsePayload>>().await?;
        debug!("{} ({})", envelope.message, envelope.status);
        Ok(envelope.response)
    }

    /// Looks up a user profile through the backend's `/auth/getProfile` proxy.
    pub async fn get_profile(&self, uid: &str) -> Result<UserProfile, ClientError> {
        let url = format!("{}/auth/getProfile", self.base_url);
        let payload = self.send(self.client.post(url).json(&json!({ "uid": uid }))).await?;
        payload.user.ok_or(ClientError::MissingPayload("user"))
    }
}

#[async_trait]
impl NurseGateway for HttpNurseClient {
    async fn list_nurses(&self) -> Result<Vec<Nurse>, ClientError> {
        let payload = self.send(self.client.get(self.nurses_url())).await?;
        Ok(payload.nurses.unwrap_or_default())
    }

    async fn get_nurse(&self, id: i64) -> Result<Nurse, ClientError> {
        let payload = self.send(self.client.get(self.nurse_url(id))).await?;
        payload.nurse.ok_or(ClientError::MissingPayload("nurse"))
    }

    async fn create_nurse(&self, draft: &NurseDraft) -> Result<Nurse, ClientError> {
        let payload = self.send(self.client.post(self.nurses_url()).json(draft)).await?;
        payload.nurse.ok_or(ClientError::MissingPayload("nurse"))
    }

    async fn update_nurse(&self, id: i64, draft: &NurseDraft) -> Result<Nurse, ClientError> {
        let payload = self.send(self.client.put(self.nurse_url(id)).json(draft)).await?;
        payload.updated_nurse.ok_or(ClientError::MissingPayload("updatedNurse"))
    }

    async fn delete_nurse(&self, id: i64) -> Result<(), ClientError> {
        self.send(self.client.delete(self.nurse_url(id))).await?;
        Ok(())
    }
}
