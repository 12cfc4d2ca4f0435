use crate::core::errors::StorageError;
use crate::core::models::nurse::{NewNurse, Nurse, NurseUpdate};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait NurseStorage: Send + Sync {
    /// All records, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Nurse>, StorageError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Nurse>, StorageError>;
    async fn create(&self, nurse: NewNurse) -> Result<Nurse, StorageError>;
    /// `Ok(None)` when no row has this id.
    async fn update(&self, id: i64, changes: NurseUpdate) -> Result<Option<Nurse>, StorageError>;
    /// Whether a row existed.
    async fn delete(&self, id: i64) -> Result<bool, StorageError>;
}

#[async_trait]
impl<T: NurseStorage + ?Sized> NurseStorage for Arc<T> {
    async fn list(&self) -> Result<Vec<Nurse>, StorageError> {
        (**self).list().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Nurse>, StorageError> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, nurse: NewNurse) -> Result<Nurse, StorageError> {
        (**self).create(nurse).await
    }

    async fn update(&self, id: i64, changes: NurseUpdate) -> Result<Option<Nurse>, StorageError> {
        (**self).update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        (**self).delete(id).await
    }
}

pub mod in_memory;
pub mod sql;
