pub mod api;
pub mod client;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::api::{AppState, build_app};
pub use crate::client::fetcher::{HttpNurseClient, NurseGateway};
pub use crate::client::list_view::NurseListView;
pub use crate::core::errors::{RegistryError, StorageError};
pub use crate::core::services::RegistryService;
pub use crate::infrastructure::storage::{NurseStorage, in_memory::InMemoryStorage, sql::SqlStorage};

#[cfg(test)]
mod tests; // Include integration tests
