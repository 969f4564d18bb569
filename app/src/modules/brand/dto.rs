use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

fn default_is_active() -> bool {
    true
}

#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandDto {
    /// id of the vehicle type the brand belongs to
    pub vehicle_type_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub brand_name: String,

    pub description: Option<String>,

    pub sort_order: Option<i32>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Full replacement of a brand, `id` must match the id of the
/// record being updated.
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandDto {
    pub id: i32,

    /// id of the vehicle type the brand belongs to
    pub vehicle_type_id: i32,

    #[validate(length(min = 1, max = 255))]
    pub brand_name: String,

    pub description: Option<String>,

    pub sort_order: Option<i32>,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}
