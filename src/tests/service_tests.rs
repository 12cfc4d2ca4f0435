use crate::core::errors::RegistryError;
use crate::core::models::nurse::NurseFields;
use crate::core::services::{INVALID_NURSE_FIELDS, MISSING_NURSE_FIELDS};
use crate::tests::{create_test_service, create_test_service_with_profile, date, fields};
use http::StatusCode;

#[tokio::test]
async fn test_create_nurse() {
    let service = create_test_service();
    let nurse = service
        .create_nurse(fields("  Jane Doe ", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap();
    assert_eq!(nurse.name, "Jane Doe");
    assert_eq!(nurse.license_number, "RN-1");
    assert_eq!(nurse.dob, date(1990, 5, 1));
    assert_eq!(nurse.age, 30);
    assert_eq!(nurse.created_at, nurse.updated_at);

    let second = service
        .create_nurse(fields("John Roe", "RN-2", "1985-02-03", "40"))
        .await
        .unwrap();
    assert_ne!(second.id, nurse.id);
}

#[tokio::test]
async fn test_create_nurse_accepts_timestamped_dob() {
    let service = create_test_service();
    let nurse = service
        .create_nurse(fields("Jane Doe", "RN-1", "2020-05-01T00:00:00Z", "30"))
        .await
        .unwrap();
    assert_eq!(nurse.dob, date(2020, 5, 1));
}

#[tokio::test]
async fn test_create_nurse_missing_fields() {
    let service = create_test_service();
    let result = service
        .create_nurse(NurseFields {
            name: Some("Jane Doe".to_string()),
            license_number: Some("RN-1".to_string()),
            dob: None,
            age: Some("30".to_string()),
        })
        .await;
    match result {
        Err(err @ RegistryError::Client { .. }) => {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.to_string(), MISSING_NURSE_FIELDS);
        }
        other => panic!("expected a client error, got {:?}", other),
    }

    let result = service.create_nurse(fields("", "RN-1", "1990-05-01", "30")).await;
    assert!(matches!(result, Err(RegistryError::Client { .. })));
    assert!(service.list_nurses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_nurse_rejects_non_positive_age() {
    let service = create_test_service();
    for age in ["0", "-3", "abc"] {
        let err = service
            .create_nurse(fields("Jane Doe", "RN-1", "1990-05-01", age))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), INVALID_NURSE_FIELDS);
        let details = err.details().unwrap();
        assert_eq!(details[0]["field"], "age");
    }
    assert!(service.list_nurses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_nurse_reports_every_invalid_field() {
    let service = create_test_service();
    let long_license = "L".repeat(51);
    let err = service
        .create_nurse(fields("Jane Doe", &long_license, "not-a-date", "30"))
        .await
        .unwrap_err();
    let details = err.details().unwrap().as_array().unwrap().clone();
    let names: Vec<_> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["licenseNumber", "dob"]);
}

#[tokio::test]
async fn test_get_nurse_not_found() {
    let service = create_test_service();
    let err = service.get_nurse(42).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
    assert_eq!(err.to_string(), "Nurse not found");
}

#[tokio::test]
async fn test_update_nurse_is_partial() {
    let service = create_test_service();
    let nurse = service
        .create_nurse(fields("Jane Doe", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap();

    let updated = service
        .update_nurse(
            nurse.id,
            NurseFields {
                age: Some("31".to_string()),
                ..NurseFields::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, nurse.id);
    assert_eq!(updated.age, 31);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.created_at, nurse.created_at);
    assert!(updated.updated_at > nurse.updated_at);

    let again = service.update_nurse(nurse.id, NurseFields::default()).await.unwrap();
    assert!(again.updated_at > updated.updated_at);
    assert_eq!(service.get_nurse(nurse.id).await.unwrap(), again);
}

#[tokio::test]
async fn test_update_nurse_validation() {
    let service = create_test_service();
    let nurse = service
        .create_nurse(fields("Jane Doe", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap();
    let err = service
        .update_nurse(
            nurse.id,
            NurseFields {
                name: Some("   ".to_string()),
                age: Some("0".to_string()),
                ..NurseFields::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.details().unwrap().as_array().unwrap().len(), 2);
    assert_eq!(service.get_nurse(nurse.id).await.unwrap(), nurse);
}

#[tokio::test]
async fn test_update_nurse_not_found() {
    let service = create_test_service();
    let err = service
        .update_nurse(7, fields("Jane Doe", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_nurse_twice() {
    let service = create_test_service();
    let nurse = service
        .create_nurse(fields("Jane Doe", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap();
    service.delete_nurse(nurse.id).await.unwrap();
    assert!(matches!(service.get_nurse(nurse.id).await, Err(RegistryError::NotFound(_))));

    let err = service.delete_nurse(nurse.id).await.unwrap_err();
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_are_not_reused() {
    let service = create_test_service();
    let first = service
        .create_nurse(fields("Jane Doe", "RN-1", "1990-05-01", "30"))
        .await
        .unwrap();
    service.delete_nurse(first.id).await.unwrap();
    let second = service
        .create_nurse(fields("John Roe", "RN-2", "1985-02-03", "40"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_list_nurses_newest_first() {
    let service = create_test_service();
    let mut ids = Vec::new();
    for (name, license) in [("A", "RN-1"), ("B", "RN-2"), ("C", "RN-3")] {
        let nurse = service
            .create_nurse(fields(name, license, "1990-05-01", "30"))
            .await
            .unwrap();
        ids.push(nurse.id);
    }
    let listed: Vec<i64> = service.list_nurses().await.unwrap().iter().map(|n| n.id).collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_get_profile() {
    let service = create_test_service_with_profile("1").await;
    let profile = service.get_profile(Some("1")).await.unwrap();
    assert_eq!(profile.0["firstName"], "Emily");

    let err = service.get_profile(Some("2")).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
    assert_eq!(err.to_string(), "User not found");

    for uid in [None, Some(""), Some("  ")] {
        let err = service.get_profile(uid).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "UID is required");
    }
}
