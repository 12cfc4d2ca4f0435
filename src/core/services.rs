use crate::core::errors::{FieldError, RegistryError};
use crate::core::models::nurse::{
    LICENSE_NUMBER_MAX_LENGTH, NAME_MAX_LENGTH, NewNurse, Nurse, NurseFields, NurseUpdate, parse_calendar_date,
};
use crate::core::models::profile::UserProfile;
use crate::infrastructure::profile::ProfileProvider;
use crate::infrastructure::storage::NurseStorage;
use chrono::NaiveDate;
use tracing::{debug, info};

pub const NURSE_NOT_FOUND: &str = "Nurse not found";
pub const MISSING_NURSE_FIELDS: &str = "All fields (name, licenseNumber, dob, age) are required";
pub const INVALID_NURSE_FIELDS: &str = "Invalid nurse data";

pub struct RegistryService<S: NurseStorage, P: ProfileProvider> {
    storage: S,
    profiles: P,
}

impl<S: NurseStorage, P: ProfileProvider> RegistryService<S, P> {
    pub fn new(storage: S, profiles: P) -> Self {
        RegistryService { storage, profiles }
    }

    pub async fn list_nurses(&self) -> Result<Vec<Nurse>, RegistryError> {
        let nurses = self.storage.list().await?;
        debug!("Fetched {} nurses", nurses.len());
        Ok(nurses)
    }

    pub async fn get_nurse(&self, id: i64) -> Result<Nurse, RegistryError> {
        self.storage
            .get_by_id(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(NURSE_NOT_FOUND))
    }

    pub async fn create_nurse(&self, fields: NurseFields) -> Result<Nurse, RegistryError> {
        let (Some(name), Some(license_number), Some(dob), Some(age)) =
            (fields.name, fields.license_number, fields.dob, fields.age)
        else {
            return Err(RegistryError::client(MISSING_NURSE_FIELDS));
        };
        if name.is_empty() || license_number.is_empty() || dob.is_empty() {
            return Err(RegistryError::client(MISSING_NURSE_FIELDS));
        }

        let mut errors = Vec::new();
        let name = collect(&mut errors, validate_string_input("name", &name, NAME_MAX_LENGTH));
        let license_number = collect(
            &mut errors,
            validate_string_input("licenseNumber", &license_number, LICENSE_NUMBER_MAX_LENGTH),
        );
        let dob = collect(&mut errors, validate_date_input("dob", &dob));
        let age = collect(&mut errors, validate_age_input("age", &age));

        let (Some(name), Some(license_number), Some(dob), Some(age)) = (name, license_number, dob, age) else {
            return Err(RegistryError::invalid_fields(INVALID_NURSE_FIELDS, errors));
        };

        let nurse = self
            .storage
            .create(NewNurse {
                name,
                license_number,
                dob,
                age,
            })
            .await?;
        info!("Created nurse {}", nurse.id);
        Ok(nurse)
    }

    pub async fn update_nurse(&self, id: i64, fields: NurseFields) -> Result<Nurse, RegistryError> {
        let mut errors = Vec::new();
        let changes = NurseUpdate {
            name: fields
                .name
                .and_then(|v| collect(&mut errors, validate_string_input("name", &v, NAME_MAX_LENGTH))),
            license_number: fields.license_number.and_then(|v| {
                collect(
                    &mut errors,
                    validate_string_input("licenseNumber", &v, LICENSE_NUMBER_MAX_LENGTH),
                )
            }),
            dob: fields
                .dob
                .and_then(|v| collect(&mut errors, validate_date_input("dob", &v))),
            age: fields
                .age
                .and_then(|v| collect(&mut errors, validate_age_input("age", &v))),
        };
        if !errors.is_empty() {
            return Err(RegistryError::invalid_fields(INVALID_NURSE_FIELDS, errors));
        }

        let updated = self
            .storage
            .update(id, changes)
            .await?
            .ok_or_else(|| RegistryError::not_found(NURSE_NOT_FOUND))?;
        info!("Updated nurse {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_nurse(&self, id: i64) -> Result<(), RegistryError> {
        if !self.storage.delete(id).await? {
            return Err(RegistryError::not_found(NURSE_NOT_FOUND));
        }
        info!("Deleted nurse {}", id);
        Ok(())
    }

    pub async fn get_profile(&self, uid: Option<&str>) -> Result<UserProfile, RegistryError> {
        let uid = uid
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .ok_or_else(|| RegistryError::client("UID is required"))?;
        self.profiles
            .get_profile(uid)
            .await?
            .ok_or_else(|| RegistryError::not_found("User not found"))
    }
}

fn collect<T>(errors: &mut Vec<FieldError>, result: Result<T, FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn validate_string_input(field: &str, value: &str, max_length: usize) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError {
            field: field.to_string(),
            title: format!("Invalid {}", field),
            description: format!("{} cannot be empty", field),
        });
    }
    if value.chars().count() > max_length {
        return Err(FieldError {
            field: field.to_string(),
            title: format!("{} Too Long", field),
            description: format!("{} cannot exceed {} characters", field, max_length),
        });
    }
    Ok(value.to_string())
}

fn validate_date_input(field: &str, value: &str) -> Result<NaiveDate, FieldError> {
    parse_calendar_date(value).ok_or_else(|| FieldError {
        field: field.to_string(),
        title: "Invalid Date".to_string(),
        description: format!("{} must be a date in YYYY-MM-DD format", field),
    })
}

fn validate_age_input(field: &str, value: &str) -> Result<i32, FieldError> {
    let age: i32 = value.trim().parse().map_err(|_| FieldError {
        field: field.to_string(),
        title: "Invalid Age".to_string(),
        description: format!("{} must be a whole number", field),
    })?;
    if age <= 0 {
        return Err(FieldError {
            field: field.to_string(),
            title: "Invalid Age".to_string(),
            description: "Age must be greater than 0".to_string(),
        });
    }
    Ok(age)
}
