use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// A brand always belongs to a single vehicle type, the column
/// has no foreign key constraint on the database, the parent row
/// existence is checked by the HTTP layer instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::brand::Model)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub vehicle_type_id: i32,
    pub brand_name: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::vehicle_type::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    VehicleType,
}

impl Related<super::vehicle_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
