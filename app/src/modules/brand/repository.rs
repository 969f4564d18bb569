use super::dto::{CreateBrandDto, UpdateBrandDto};
use crate::database::error::GatewayError;
use axum::async_trait;
use entity::brand;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use std::sync::Arc;

/// Persistence gateway for the `brand` table.
///
/// Same shape as the vehicle type gateway plus deletion and the
/// listing filtered by the owning vehicle type.
#[async_trait]
pub trait BrandGateway: Send + Sync {
    /// Inserts a new brand, the id is assigned by the store.
    async fn add(&self, dto: CreateBrandDto) -> Result<brand::Model, GatewayError>;

    /// Persists `dto` as a full replacement of the row identified by `id`.
    ///
    /// Fails with [`GatewayError::IdMismatch`] when `id` disagrees with the
    /// id embedded in the payload, and [`GatewayError::NotFound`] when no
    /// row has that id.
    async fn update(&self, id: i32, dto: UpdateBrandDto) -> Result<brand::Model, GatewayError>;

    async fn list_all(&self) -> Result<Vec<brand::Model>, GatewayError>;

    /// All brands whose `vehicle_type_id` equals the given id.
    async fn list_by_vehicle_type(
        &self,
        vehicle_type_id: i32,
    ) -> Result<Vec<brand::Model>, GatewayError>;

    async fn exists(&self, id: i32) -> Result<bool, GatewayError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<brand::Model>, GatewayError>;

    /// Removes the row, reporting whether any row was affected.
    async fn delete(&self, id: i32) -> Result<bool, GatewayError>;
}

pub struct SeaOrmBrandGateway {
    // shared because `DatabaseConnection` is not Clone under
    // sea-orm's mock feature, enabled by the test builds
    db: Arc<DatabaseConnection>,
}

impl SeaOrmBrandGateway {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandGateway for SeaOrmBrandGateway {
    async fn add(&self, dto: CreateBrandDto) -> Result<brand::Model, GatewayError> {
        let created = brand::ActiveModel {
            vehicle_type_id: Set(dto.vehicle_type_id),
            brand_name: Set(dto.brand_name),
            description: Set(dto.description),
            sort_order: Set(dto.sort_order),
            is_active: Set(dto.is_active),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(created)
    }

    async fn update(&self, id: i32, dto: UpdateBrandDto) -> Result<brand::Model, GatewayError> {
        if id != dto.id {
            return Err(GatewayError::IdMismatch);
        }

        let updated = brand::ActiveModel {
            id: Set(dto.id),
            vehicle_type_id: Set(dto.vehicle_type_id),
            brand_name: Set(dto.brand_name),
            description: Set(dto.description),
            sort_order: Set(dto.sort_order),
            is_active: Set(dto.is_active),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await?;

        Ok(updated)
    }

    async fn list_all(&self) -> Result<Vec<brand::Model>, GatewayError> {
        Ok(brand::Entity::find().all(self.db.as_ref()).await?)
    }

    async fn list_by_vehicle_type(
        &self,
        vehicle_type_id: i32,
    ) -> Result<Vec<brand::Model>, GatewayError> {
        let brands = brand::Entity::find()
            .filter(brand::Column::VehicleTypeId.eq(vehicle_type_id))
            .all(self.db.as_ref())
            .await?;

        Ok(brands)
    }

    async fn exists(&self, id: i32) -> Result<bool, GatewayError> {
        let count = brand::Entity::find()
            .filter(brand::Column::Id.eq(id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<brand::Model>, GatewayError> {
        Ok(brand::Entity::find_by_id(id).one(self.db.as_ref()).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, GatewayError> {
        let result = brand::Entity::delete_by_id(id).exec(self.db.as_ref()).await?;

        Ok(result.rows_affected > 0)
    }
}
