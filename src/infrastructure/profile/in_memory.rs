use crate::core::errors::RegistryError;
use crate::core::models::profile::UserProfile;
use crate::infrastructure::profile::ProfileProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryProfileProvider {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryProfileProvider {
    pub fn new() -> Self {
        InMemoryProfileProvider {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert(&self, uid: impl Into<String>, profile: UserProfile) {
        let mut profiles = self.profiles.write().await;
        profiles.insert(uid.into(), profile);
    }
}

#[async_trait]
impl ProfileProvider for InMemoryProfileProvider {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, RegistryError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(uid).cloned())
    }
}
