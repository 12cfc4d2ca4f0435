use crate::core::errors::RegistryError;
use crate::core::models::profile::UserProfile;
use crate::infrastructure::profile::ProfileProvider;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

pub struct HttpProfileProvider {
    client: Client,
    base_url: String,
}

impl HttpProfileProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RegistryError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(HttpProfileProvider {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProfileProvider for HttpProfileProvider {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, RegistryError> {
        let url = format!("{}/users/{}", self.base_url, uid);
        debug!("Fetching profile from {}", url);
        let resp = self.client.get(&url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let profile = resp.error_for_status()?.json::<UserProfile>().await?;
        Ok(Some(profile))
    }
}
