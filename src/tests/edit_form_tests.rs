use crate::client::edit_form::{FormField, NurseForm};
use crate::tests::{date, nurse};
use std::cell::Cell;

fn filled_form() -> NurseForm {
    let mut form = NurseForm::new();
    form.set_field(FormField::Name, "Jane Doe");
    form.set_field(FormField::LicenseNumber, "RN-1");
    form.set_field(FormField::Dob, "1990-05-01");
    form.set_field(FormField::Age, "30");
    form
}

#[tokio::test]
async fn test_invalid_age_blocks_submission() {
    let mut form = filled_form();
    form.set_field(FormField::Age, "0");
    let calls = Cell::new(0);
    let counter = &calls;

    let outcome = form
        .submit(move |_draft| async move {
            counter.set(counter.get() + 1);
        })
        .await;
    assert!(outcome.is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(FormField::Age), Some("Age must be greater than 0"));
    assert_eq!(form.values().name, "Jane Doe");
}

#[tokio::test]
async fn test_submit_calls_back_once_and_resets() {
    let mut form = filled_form();
    let calls = Cell::new(0);
    let counter = &calls;

    let outcome = form
        .submit(move |draft| async move {
            counter.set(counter.get() + 1);
            draft
        })
        .await
        .unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(outcome.name, "Jane Doe");
    assert_eq!(outcome.dob, date(1990, 5, 1));
    assert_eq!(outcome.age, 30);

    assert_eq!(form.values().name, "");
    assert_eq!(form.values().age, 0);
    assert!(form.errors().is_empty());
}

#[test]
fn test_validate_reports_each_field() {
    let mut form = NurseForm::new();
    assert!(!form.validate());
    assert_eq!(form.error(FormField::Name), Some("Name is required"));
    assert_eq!(form.error(FormField::LicenseNumber), Some("License number is required"));
    assert_eq!(form.error(FormField::Dob), Some("Date of birth is required"));
    assert_eq!(form.error(FormField::Age), Some("Age must be greater than 0"));

    form.set_field(FormField::Dob, "05/01/1990");
    assert_eq!(form.error(FormField::Dob), None);
    assert!(!form.validate());
    assert_eq!(form.error(FormField::Dob), Some("Date of birth must be a valid date"));
}

#[test]
fn test_editing_clears_only_that_error() {
    let mut form = NurseForm::new();
    form.validate();
    form.set_field(FormField::Name, "Jane");
    assert_eq!(form.error(FormField::Name), None);
    assert_eq!(form.errors().len(), 3);
}

#[test]
fn test_non_numeric_age_becomes_zero() {
    let mut form = filled_form();
    form.set_field(FormField::Age, "thirty");
    assert_eq!(form.values().age, 0);
    assert!(!form.validate());
}

#[test]
fn test_open_for_edit_normalizes_dob() {
    let existing = nurse(5, "Jane Doe", "RN-1", date(1990, 5, 1), 30, 0);
    let form = NurseForm::open(Some(&existing));
    assert_eq!(form.title(), "Edit Nurse");
    assert_eq!(form.editing(), Some(5));
    assert_eq!(form.values().dob, "1990-05-01");
    assert_eq!(form.values().license_number, "RN-1");

    let blank = NurseForm::open(None);
    assert_eq!(blank.title(), "Add New Nurse");
    assert_eq!(blank.editing(), None);
}

#[test]
fn test_input_names_map_to_fields() {
    assert_eq!(FormField::from_input_name("licenseNumber"), Some(FormField::LicenseNumber));
    assert_eq!(FormField::from_input_name("dob"), Some(FormField::Dob));
    assert_eq!(FormField::from_input_name("email"), None);
}
