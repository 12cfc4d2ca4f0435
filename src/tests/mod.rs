mod edit_form_tests;
mod service_tests;

use crate::api::{AppState, build_app};
use crate::client::fetcher::{NurseDraft, NurseGateway};
use crate::client::ClientError;
use crate::core::models::nurse::{NewNurse, Nurse, NurseFields, NurseUpdate};
use crate::core::models::profile::UserProfile;
use crate::core::services::RegistryService;
use crate::infrastructure::profile::in_memory::InMemoryProfileProvider;
use crate::infrastructure::storage::{NurseStorage, in_memory::InMemoryStorage, sql::SqlStorage};
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

pub fn create_test_service() -> AppState {
    let storage: Arc<dyn NurseStorage> = Arc::new(InMemoryStorage::new());
    Arc::new(RegistryService::new(storage, Arc::new(InMemoryProfileProvider::new())))
}

pub async fn create_test_service_with_profile(uid: &str) -> AppState {
    let profiles = InMemoryProfileProvider::new();
    profiles
        .insert(uid, UserProfile(json!({ "id": 1, "firstName": "Emily", "lastName": "Johnson" })))
        .await;
    let storage: Arc<dyn NurseStorage> = Arc::new(InMemoryStorage::new());
    Arc::new(RegistryService::new(storage, Arc::new(profiles)))
}

/// A service whose database can never be opened.
pub fn create_unreachable_service() -> AppState {
    let storage: Arc<dyn NurseStorage> = Arc::new(SqlStorage::new("sqlite:///nonexistent-dir/nested/nurses.db"));
    Arc::new(RegistryService::new(storage, Arc::new(InMemoryProfileProvider::new())))
}

/// Serves the full app on an ephemeral port and returns its base URL.
pub async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn fields(name: &str, license_number: &str, dob: &str, age: &str) -> NurseFields {
    NurseFields {
        name: Some(name.to_string()),
        license_number: Some(license_number.to_string()),
        dob: Some(dob.to_string()),
        age: Some(age.to_string()),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn draft(name: &str, license_number: &str, age: i32) -> NurseDraft {
    NurseDraft {
        name: name.to_string(),
        license_number: license_number.to_string(),
        dob: date(1990, 5, 1),
        age,
    }
}

/// A fixed record; `seq` orders `created_at`.
pub fn nurse(id: i64, name: &str, license_number: &str, dob: NaiveDate, age: i32, seq: i64) -> Nurse {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(seq);
    Nurse {
        id,
        name: name.to_string(),
        license_number: license_number.to_string(),
        dob,
        age,
        created_at,
        updated_at: created_at,
    }
}

/// Gateway over a local store, for view tests that must not touch the network.
#[derive(Clone, Default)]
pub struct LocalGateway {
    pub storage: InMemoryStorage,
}

#[async_trait]
impl NurseGateway for LocalGateway {
    async fn list_nurses(&self) -> Result<Vec<Nurse>, ClientError> {
        Ok(self.storage.list().await.unwrap())
    }

    async fn get_nurse(&self, id: i64) -> Result<Nurse, ClientError> {
        self.storage.get_by_id(id).await.unwrap().ok_or(ClientError::Api {
            status: 404,
            message: "Nurse not found".to_string(),
        })
    }

    async fn create_nurse(&self, draft: &NurseDraft) -> Result<Nurse, ClientError> {
        Ok(self
            .storage
            .create(NewNurse {
                name: draft.name.clone(),
                license_number: draft.license_number.clone(),
                dob: draft.dob,
                age: draft.age,
            })
            .await
            .unwrap())
    }

    async fn update_nurse(&self, id: i64, draft: &NurseDraft) -> Result<Nurse, ClientError> {
        let changes = NurseUpdate {
            name: Some(draft.name.clone()),
            license_number: Some(draft.license_number.clone()),
            dob: Some(draft.dob),
            age: Some(draft.age),
        };
        self.storage.update(id, changes).await.unwrap().ok_or(ClientError::Api {
            status: 404,
            message: "Nurse not found".to_string(),
        })
    }

    async fn delete_nurse(&self, id: i64) -> Result<(), ClientError> {
        if self.storage.delete(id).await.unwrap() {
            Ok(())
        } else {
            Err(ClientError::Api {
                status: 404,
                message: "Nurse not found".to_string(),
            })
        }
    }
}

/// Gateway whose every call fails.
pub struct FailingGateway;

#[async_trait]
impl NurseGateway for FailingGateway {
    async fn list_nurses(&self) -> Result<Vec<Nurse>, ClientError> {
        Err(ClientError::MissingPayload("nurses"))
    }

    async fn get_nurse(&self, _id: i64) -> Result<Nurse, ClientError> {
        Err(ClientError::MissingPayload("nurse"))
    }

    async fn create_nurse(&self, _draft: &NurseDraft) -> Result<Nurse, ClientError> {
        Err(ClientError::MissingPayload("nurse"))
    }

    async fn update_nurse(&self, _id: i64, _draft: &NurseDraft) -> Result<Nurse, ClientError> {
        Err(ClientError::MissingPayload("updatedNurse"))
    }

    async fn delete_nurse(&self, _id: i64) -> Result<(), ClientError> {
        Err(ClientError::Api {
            status: 500,
            message: "Something went wrong. Please try again".to_string(),
        })
    }
}
