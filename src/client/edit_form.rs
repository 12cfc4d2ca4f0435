use crate::client::fetcher::NurseDraft;
use crate::core::models::nurse::{Nurse, parse_calendar_date};
use std::collections::BTreeMap;
use std::future::Future;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    LicenseNumber,
    Dob,
    Age,
}

impl FormField {
    /// Maps an input's `name` attribute to its field.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "licenseNumber" => Some(FormField::LicenseNumber),
            "dob" => Some(FormField::Dob),
            "age" => Some(FormField::Age),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub license_number: String,
    /// `YYYY-MM-DD`, as a date input holds it.
    pub dob: String,
    pub age: i32,
}

impl From<&Nurse> for FormValues {
    fn from(nurse: &Nurse) -> Self {
        FormValues {
            name: nurse.name.clone(),
            license_number: nurse.license_number.clone(),
            dob: nurse.dob.format("%Y-%m-%d").to_string(),
            age: nurse.age,
        }
    }
}

#[derive(Debug, Default)]
pub struct NurseForm {
    values: FormValues,
    errors: BTreeMap<FormField, &'static str>,
    editing: Option<i64>,
}

impl NurseForm {
    pub fn new() -> Self {
        NurseForm::default()
    }

    /// A form pre-populated from `nurse`, or blank when creating.
    pub fn open(nurse: Option<&Nurse>) -> Self {
        match nurse {
            Some(nurse) => NurseForm {
                values: FormValues::from(nurse),
                errors: BTreeMap::new(),
                editing: Some(nurse.id),
            },
            None => NurseForm::new(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<FormField, &'static str> {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Nurse"
        } else {
            "Add New Nurse"
        }
    }

    /// Records raw input for one field and clears that field's error.
    /// Age input that does not parse becomes 0.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.values.name = value.to_string(),
            FormField::LicenseNumber => self.values.license_number = value.to_string(),
            FormField::Dob => self.values.dob = value.to_string(),
            FormField::Age => self.values.age = value.trim().parse().unwrap_or(0),
        }
        self.errors.remove(&field);
    }

    /// Replaces the error set. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        if self.values.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required");
        }
        if self.values.license_number.trim().is_empty() {
            errors.insert(FormField::LicenseNumber, "License number is required");
        }
        if self.values.dob.trim().is_empty() {
            errors.insert(FormField::Dob, "Date of birth is required");
        } else if parse_calendar_date(&self.values.dob).is_none() {
            errors.insert(FormField::Dob, "Date of birth must be a valid date");
        }
        if self.values.age <= 0 {
            errors.insert(FormField::Age, "Age must be greater than 0");
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    fn draft(&self) -> Option<NurseDraft> {
        Some(NurseDraft {
            name: self.values.name.trim().to_string(),
            license_number: self.values.license_number.trim().to_string(),
            dob: parse_calendar_date(&self.values.dob)?,
            age: self.values.age,
        })
    }

    /// Validates, then hands the draft to `on_submit` exactly once and resets.
    /// Returns `None` without calling `on_submit` when validation fails.
    pub async fn submit<F, Fut, T>(&mut self, on_submit: F) -> Option<T>
    where
        F: FnOnce(NurseDraft) -> Fut,
        Fut: Future<Output = T>,
    {
        if !self.validate() {
            return None;
        }
        let draft = self.draft()?;
        let outcome = on_submit(draft).await;
        self.reset();
        Some(outcome)
    }

    pub fn reset(&mut self) {
        *self = NurseForm::new();
    }
}
