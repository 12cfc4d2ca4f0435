pub mod http;
pub mod in_memory;

use crate::core::errors::RegistryError;
use crate::core::models::profile::UserProfile;
use async_trait::async_trait;
use std::sync::Arc;

/// Lookup against the external identity provider.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, RegistryError>;
}

#[async_trait]
impl<T: ProfileProvider + ?Sized> ProfileProvider for Arc<T> {
    async fn get_profile(&self, uid: &str) -> Result<Option<UserProfile>, RegistryError> {
        (**self).get_profile(uid).await
    }
}
