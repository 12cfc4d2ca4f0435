use crate::{
    api::models::*,
    core::{errors::RegistryError, services::RegistryService},
    infrastructure::{profile::ProfileProvider, storage::NurseStorage},
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
};

use std::sync::Arc;

pub type AppState = Arc<RegistryService<Arc<dyn NurseStorage>, Arc<dyn ProfileProvider>>>;

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/nurses", get(list_nurses).post(create_nurse))
        .route("/nurses/", get(list_nurses).post(create_nurse))
        .route(
            "/nurses/{id}",
            get(get_nurse).put(update_nurse).delete(delete_nurse),
        )
        .route("/auth/getProfile", post(get_profile))
        .fallback(route_not_found)
        .with_state(service)
}

fn parse_nurse_id(raw: &str) -> Result<i64, RegistryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RegistryError::client("Nurse ID is required"))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, RegistryError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| RegistryError::client(rejection.body_text()))
}

#[utoipa::path(
    get,
    path = "/nurses",
    responses(
        (status = 200, description = "Nurses retrieved successfully", body = ApiResponse<NurseListPayload>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_nurses(State(service): State<AppState>) -> Result<ApiResponse<NurseListPayload>, ApiError> {
    let nurses = service.list_nurses().await?;
    Ok(ApiResponse::new(
        StatusCode::OK,
        NurseListPayload { nurses },
        "Nurses retrieved successfully",
    ))
}

#[utoipa::path(
    get,
    path = "/nurses/{id}",
    params(
        ("id" = i64, Path, description = "ID of the nurse to retrieve")
    ),
    responses(
        (status = 200, description = "Nurse retrieved successfully", body = ApiResponse<NursePayload>),
        (status = 400, description = "Invalid nurse ID", body = ErrorResponse),
        (status = 404, description = "Nurse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_nurse(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<NursePayload>, ApiError> {
    let id = parse_nurse_id(&id)?;
    let nurse = service.get_nurse(id).await?;
    Ok(ApiResponse::new(
        StatusCode::OK,
        NursePayload { nurse },
        "Nurse retrieved successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/nurses",
    request_body = NurseRequest,
    responses(
        (status = 201, description = "Nurse created successfully", body = ApiResponse<NursePayload>),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_nurse(
    State(service): State<AppState>,
    body: Result<Json<NurseRequest>, JsonRejection>,
) -> Result<ApiResponse<NursePayload>, ApiError> {
    let req = json_body(body)?;
    let nurse = service.create_nurse(req.into()).await?;
    Ok(ApiResponse::new(
        StatusCode::CREATED,
        NursePayload { nurse },
        "Nurse created successfully",
    ))
}

#[utoipa::path(
    put,
    path = "/nurses/{id}",
    request_body = NurseRequest,
    params(
        ("id" = i64, Path, description = "ID of the nurse to update")
    ),
    responses(
        (status = 200, description = "Nurse updated successfully", body = ApiResponse<UpdatedNursePayload>),
        (status = 400, description = "Invalid nurse ID or field", body = ErrorResponse),
        (status = 404, description = "Nurse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_nurse(
    State(service): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NurseRequest>, JsonRejection>,
) -> Result<ApiResponse<UpdatedNursePayload>, ApiError> {
    let id = parse_nurse_id(&id)?;
    let req = json_body(body)?;
    let updated_nurse = service.update_nurse(id, req.into()).await?;
    Ok(ApiResponse::new(
        StatusCode::OK,
        UpdatedNursePayload { updated_nurse },
        "Nurse updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/nurses/{id}",
    params(
        ("id" = i64, Path, description = "ID of the nurse to delete")
    ),
    responses(
        (status = 200, description = "Nurse deleted successfully", body = ApiResponse<EmptyPayload>),
        (status = 400, description = "Invalid nurse ID", body = ErrorResponse),
        (status = 404, description = "Nurse not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_nurse(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<EmptyPayload>, ApiError> {
    let id = parse_nurse_id(&id)?;
    service.delete_nurse(id).await?;
    Ok(ApiResponse::new(
        StatusCode::OK,
        EmptyPayload::default(),
        "Nurse deleted successfully",
    ))
}

#[utoipa::path(
    post,
    path = "/auth/getProfile",
    request_body = GetProfileRequest,
    responses(
        (status = 200, description = "User data retrieved successfully", body = ApiResponse<ProfilePayload>),
        (status = 400, description = "UID is required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_profile(
    State(service): State<AppState>,
    body: Result<Json<GetProfileRequest>, JsonRejection>,
) -> Result<ApiResponse<ProfilePayload>, ApiError> {
    let req = json_body(body)?;
    let uid = req.uid.map(Scalar::into_text);
    let user = service.get_profile(uid.as_deref()).await?;
    Ok(ApiResponse::new(
        StatusCode::OK,
        ProfilePayload { user },
        "User data retrieved successfully",
    ))
}

async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundResponse {
            message: "Requested resource could not be found".to_string(),
            resource_path: uri.path().to_string(),
            method: method.to_string(),
        }),
    )
}
