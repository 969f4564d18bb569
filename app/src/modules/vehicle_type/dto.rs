use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

fn default_is_active() -> bool {
    true
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleTypeDto {
    #[validate(length(min = 1, max = 255))]
    pub type_name: String,

    pub description: Option<String>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Full replacement of a vehicle type, `id` must match the id
/// of the record being updated.
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleTypeDto {
    pub id: i32,

    #[validate(length(min = 1, max = 255))]
    pub type_name: String,

    pub description: Option<String>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}
