pub mod nurse;
pub mod profile;
