use super::dto::{CreateVehicleTypeDto, UpdateVehicleTypeDto};
use crate::database::error::GatewayError;
use axum::async_trait;
use entity::vehicle_type;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use std::sync::Arc;

/// Persistence gateway for the `vehicle_type` table.
///
/// Route handlers depend on this trait rather than on a live database
/// connection, so unit tests can swap in a in-memory implementation.
#[async_trait]
pub trait VehicleTypeGateway: Send + Sync {
    /// Inserts a new vehicle type, the id is assigned by the store.
    async fn add(&self, dto: CreateVehicleTypeDto) -> Result<vehicle_type::Model, GatewayError>;

    /// Persists `dto` as a full replacement of the row identified by `id`.
    ///
    /// Fails with [`GatewayError::IdMismatch`] when `id` disagrees with the
    /// id embedded in the payload, and [`GatewayError::NotFound`] when no
    /// row has that id.
    async fn update(
        &self,
        id: i32,
        dto: UpdateVehicleTypeDto,
    ) -> Result<vehicle_type::Model, GatewayError>;

    async fn list_all(&self) -> Result<Vec<vehicle_type::Model>, GatewayError>;

    async fn exists(&self, id: i32) -> Result<bool, GatewayError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<vehicle_type::Model>, GatewayError>;
}

pub struct SeaOrmVehicleTypeGateway {
    // shared because `DatabaseConnection` is not Clone under
    // sea-orm's mock feature, enabled by the test builds
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVehicleTypeGateway {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleTypeGateway for SeaOrmVehicleTypeGateway {
    async fn add(&self, dto: CreateVehicleTypeDto) -> Result<vehicle_type::Model, GatewayError> {
        let created = vehicle_type::ActiveModel {
            type_name: Set(dto.type_name),
            description: Set(dto.description),
            is_active: Set(dto.is_active),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        dto: UpdateVehicleTypeDto,
    ) -> Result<vehicle_type::Model, GatewayError> {
        if id != dto.id {
            return Err(GatewayError::IdMismatch);
        }

        // single UPDATE statement, a missing row surfaces as
        // DbErr::RecordNotUpdated and is mapped to NotFound
        let updated = vehicle_type::ActiveModel {
            id: Set(dto.id),
            type_name: Set(dto.type_name),
            description: Set(dto.description),
            is_active: Set(dto.is_active),
            ..Default::default()
        }
        .update(self.db.as_ref())
        .await?;

        Ok(updated)
    }

    async fn list_all(&self) -> Result<Vec<vehicle_type::Model>, GatewayError> {
        Ok(vehicle_type::Entity::find().all(self.db.as_ref()).await?)
    }

    async fn exists(&self, id: i32) -> Result<bool, GatewayError> {
        let count = vehicle_type::Entity::find()
            .filter(vehicle_type::Column::Id.eq(id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<vehicle_type::Model>, GatewayError> {
        Ok(vehicle_type::Entity::find_by_id(id).one(self.db.as_ref()).await?)
    }
}
