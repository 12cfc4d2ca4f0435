use utoipa::OpenApi;

use crate::{
    api::models::{
        EmptyPayload, ErrorResponse, GetProfileRequest, NurseListPayload, NursePayload, NurseRequest, ProfilePayload,
        Scalar, UpdatedNursePayload,
    },
    core::models::{nurse::Nurse, profile::UserProfile},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_nurses,
        super::handlers::get_nurse,
        super::handlers::create_nurse,
        super::handlers::update_nurse,
        super::handlers::delete_nurse,
        super::handlers::get_profile
    ),
    components(schemas(
        NurseRequest,
        GetProfileRequest,
        Scalar,
        NurseListPayload,
        NursePayload,
        UpdatedNursePayload,
        EmptyPayload,
        ProfilePayload,
        ErrorResponse,
        Nurse,
        UserProfile
    )),
    info(
        title = "Nurse Registry API",
        description = "API for managing nurse staff records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
