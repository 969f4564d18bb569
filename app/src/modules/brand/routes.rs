use super::dto::{CreateBrandDto, UpdateBrandDto};
use crate::{
    modules::common::{
        extractors::ValidatedJson,
        responses::{internal_error_res, SimpleError},
    },
    server::controller::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_brand))
        .route("/:brand_id", put(update_brand))
        .route("/:brand_id", delete(delete_brand))
        .route(
            "/by-vehicle-type/:vehicle_type_id",
            get(list_brands_by_vehicle_type),
        )
}

/// Creates a new brand
///
/// The vehicle type the brand belongs to must exist.
#[utoipa::path(
    post,
    tag = "brand",
    path = "/brand",
    request_body = CreateBrandDto,
    responses(
        (
            status = OK,
            description = "the created brand",
            content_type = "application/json",
            body = entity::brand::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / Id not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateBrandDto>,
) -> Result<Json<entity::brand::Model>, (StatusCode, SimpleError)> {
    if !state.vehicle_types.exists(dto.vehicle_type_id).await? {
        return Err((StatusCode::BAD_REQUEST, SimpleError::from("Id not found")));
    }

    let created_brand = state.brands.add(dto).await?;

    Ok(Json(created_brand))
}

/// Updates a brand
///
/// The body is a full replacement of the record, its id must match the
/// id on the request path and its vehicle type must exist.
#[utoipa::path(
    put,
    tag = "brand",
    path = "/brand/{brand_id}",
    params(
        ("brand_id" = i32, Path, description = "id of the brand to update"),
    ),
    request_body = UpdateBrandDto,
    responses(
        (
            status = OK,
            description = "the updated brand",
            content_type = "application/json",
            body = entity::brand::Model,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message / id mismatch / Id not found",
            body = SimpleError,
        ),
        (
            status = NOT_FOUND,
            description = "brand not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn update_brand(
    Path(brand_id): Path<i32>,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateBrandDto>,
) -> Result<Json<entity::brand::Model>, (StatusCode, SimpleError)> {
    // the existence check is keyed on the vehicle type the brand is being
    // moved to, not on the brand id
    if !state.vehicle_types.exists(dto.vehicle_type_id).await? {
        return Err((StatusCode::BAD_REQUEST, SimpleError::from("Id not found")));
    }

    let updated_brand = state.brands.update(brand_id, dto).await?;

    Ok(Json(updated_brand))
}

/// Deletes a brand
#[utoipa::path(
    delete,
    tag = "brand",
    path = "/brand/{brand_id}",
    params(
        ("brand_id" = i32, Path, description = "id of the brand to delete"),
    ),
    responses(
        (
            status = OK,
            description = "success message",
            body = String,
            content_type = "application/json",
            example = json!("Deleted"),
        ),
        (
            status = BAD_REQUEST,
            description = "Something Went Wrong",
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_brand(
    Path(brand_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<&'static str>, (StatusCode, SimpleError)> {
    if !state.brands.exists(brand_id).await? {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("Something Went Wrong"),
        ));
    }

    if !state.brands.delete(brand_id).await? {
        // the row vanished between the existence check and the delete
        return Err(internal_error_res());
    }

    Ok(Json("Deleted"))
}

/// Lists the brands of a vehicle type
///
/// The vehicle type existence is checked before the brand listing is
/// queried, an unknown id is a bad request even when no brand would
/// match it.
#[utoipa::path(
    get,
    tag = "brand",
    path = "/brand/by-vehicle-type/{vehicle_type_id}",
    params(
        ("vehicle_type_id" = i32, Path, description = "id of the vehicle type to list brands of"),
    ),
    responses(
        (
            status = OK,
            description = "the brands of the vehicle type, possibly empty",
            content_type = "application/json",
            body = Vec<entity::brand::Model>,
        ),
        (
            status = BAD_REQUEST,
            description = "Id not found",
            body = SimpleError,
        ),
    ),
)]
pub async fn list_brands_by_vehicle_type(
    Path(vehicle_type_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Vec<entity::brand::Model>>, (StatusCode, SimpleError)> {
    if !state.vehicle_types.exists(vehicle_type_id).await? {
        return Err((StatusCode::BAD_REQUEST, SimpleError::from("Id not found")));
    }

    let brands = state.brands.list_by_vehicle_type(vehicle_type_id).await?;

    Ok(Json(brands))
}
