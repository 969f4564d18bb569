use super::dto::{CreateVehicleTypeDto, UpdateVehicleTypeDto};
use crate::{
    modules::common::{extractors::ValidatedJson, responses::SimpleError},
    server::controller::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle_type))
        .route("/", get(list_vehicle_types))
        .route("/:vehicle_type_id", put(update_vehicle_type))
}

/// Creates a new vehicle type
#[utoipa::path(
    post,
    tag = "vehicle-type",
    path = "/vehicle-type",
    request_body = CreateVehicleTypeDto,
    responses(
        (
            status = OK,
            description = "the created vehicle type",
            content_type = "application/json",
            body = entity::vehicle_type::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_vehicle_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateVehicleTypeDto>,
) -> Result<Json<entity::vehicle_type::Model>, (StatusCode, SimpleError)> {
    let created_vehicle_type = state.vehicle_types.add(dto).await?;

    Ok(Json(created_vehicle_type))
}

/// Updates a vehicle type
///
/// The body is a full replacement of the record, its id must
/// match the id on the request path.
#[utoipa::path(
    put,
    tag = "vehicle-type",
    path = "/vehicle-type/{vehicle_type_id}",
    params(
        ("vehicle_type_id" = i32, Path, description = "id of the vehicle type to update"),
    ),
    request_body = UpdateVehicleTypeDto,
    responses(
        (
            status = OK,
            description = "the updated vehicle type",
            content_type = "application/json",
            body = entity::vehicle_type::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / id mismatch",
            body = SimpleError,
        ),
        (
            status = NOT_FOUND,
            description = "vehicle type not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn update_vehicle_type(
    Path(vehicle_type_id): Path<i32>,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateVehicleTypeDto>,
) -> Result<Json<entity::vehicle_type::Model>, (StatusCode, SimpleError)> {
    let updated_vehicle_type = state.vehicle_types.update(vehicle_type_id, dto).await?;

    Ok(Json(updated_vehicle_type))
}

/// Lists all vehicle types
#[utoipa::path(
    get,
    tag = "vehicle-type",
    path = "/vehicle-type",
    responses(
        (
            status = OK,
            description = "all registered vehicle types",
            content_type = "application/json",
            body = Vec<entity::vehicle_type::Model>,
        ),
        (
            status = NOT_FOUND,
            description = "no vehicle types registered",
            body = SimpleError,
        ),
    ),
)]
pub async fn list_vehicle_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<entity::vehicle_type::Model>>, (StatusCode, SimpleError)> {
    let vehicle_types = state.vehicle_types.list_all().await?;

    if vehicle_types.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            SimpleError::from("no vehicle types registered"),
        ));
    }

    Ok(Json(vehicle_types))
}
