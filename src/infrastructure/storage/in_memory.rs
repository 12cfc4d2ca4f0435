use crate::core::errors::StorageError;
use crate::core::models::nurse::{NewNurse, Nurse, NurseUpdate, next_update_timestamp};
use crate::infrastructure::storage::NurseStorage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: HashMap<i64, Nurse>,
    last_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    nurses: Arc<RwLock<Table>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            nurses: Arc::new(RwLock::new(Table::default())),
        }
    }
}

#[async_trait]
impl NurseStorage for InMemoryStorage {
    async fn list(&self) -> Result<Vec<Nurse>, StorageError> {
        let table = self.nurses.read().await;
        let mut nurses: Vec<Nurse> = table.rows.values().cloned().collect();
        nurses.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(nurses)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Nurse>, StorageError> {
        let table = self.nurses.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, nurse: NewNurse) -> Result<Nurse, StorageError> {
        let mut table = self.nurses.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let created = Nurse {
            id: table.last_id,
            name: nurse.name,
            license_number: nurse.license_number,
            dob: nurse.dob,
            age: nurse.age,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, changes: NurseUpdate) -> Result<Option<Nurse>, StorageError> {
        let mut table = self.nurses.write().await;
        let Some(nurse) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(nurse);
        nurse.updated_at = next_update_timestamp(nurse.updated_at);
        Ok(Some(nurse.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let mut table = self.nurses.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
