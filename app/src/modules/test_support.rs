//! In-memory gateway implementations for handler unit tests.

use crate::{
    database::error::GatewayError,
    modules::{
        brand::{
            dto::{CreateBrandDto, UpdateBrandDto},
            repository::BrandGateway,
        },
        common::responses::SimpleError,
        vehicle_type::{
            dto::{CreateVehicleTypeDto, UpdateVehicleTypeDto},
            repository::VehicleTypeGateway,
        },
    },
    server::controller::AppState,
};
use axum::async_trait;
use entity::{brand, vehicle_type};
use sea_orm::DbErr;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

fn storage_failure() -> GatewayError {
    GatewayError::Db(DbErr::Custom(String::from("connection reset")))
}

pub fn state_with(vehicle_types: FakeVehicleTypeGateway, brands: FakeBrandGateway) -> AppState {
    AppState {
        vehicle_types: Arc::new(vehicle_types),
        brands: Arc::new(brands),
    }
}

/// Extracts the `error` field of a [`SimpleError`] through its JSON form.
pub fn error_message_of(error: &SimpleError) -> String {
    serde_json::to_value(error).unwrap()["error"]
        .as_str()
        .unwrap()
        .to_owned()
}

#[derive(Default)]
pub struct FakeVehicleTypeGateway {
    rows: Mutex<Vec<vehicle_type::Model>>,
    fail: bool,
    persisted_updates: AtomicUsize,
}

impl FakeVehicleTypeGateway {
    pub fn with_rows(rows: Vec<vehicle_type::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    /// A gateway where every operation fails with a storage error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// How many update calls reached the store.
    pub fn persisted_updates(&self) -> usize {
        self.persisted_updates.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> i32 {
        self.rows.lock().unwrap().iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl VehicleTypeGateway for FakeVehicleTypeGateway {
    async fn add(&self, dto: CreateVehicleTypeDto) -> Result<vehicle_type::Model, GatewayError> {
        if self.fail {
            return Err(storage_failure());
        }

        let created = vehicle_type::Model {
            id: self.next_id(),
            created_at: chrono::Utc::now().into(),
            type_name: dto.type_name,
            description: dto.description,
            is_active: dto.is_active,
        };

        self.rows.lock().unwrap().push(created.clone());

        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        dto: UpdateVehicleTypeDto,
    ) -> Result<vehicle_type::Model, GatewayError> {
        if self.fail {
            return Err(storage_failure());
        }

        if id != dto.id {
            return Err(GatewayError::IdMismatch);
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GatewayError::NotFound)?;

        row.type_name = dto.type_name;
        row.description = dto.description;
        row.is_active = dto.is_active;

        self.persisted_updates.fetch_add(1, Ordering::SeqCst);

        Ok(row.clone())
    }

    async fn list_all(&self) -> Result<Vec<vehicle_type::Model>, GatewayError> {
        if self.fail {
            return Err(storage_failure());
        }

        Ok(self.rows.lock().unwrap().clone())
    }

    async fn exists(&self, id: i32) -> Result<bool, GatewayError> {
        if self.fail {
            return Err(storage_failure());
        }

        Ok(self.rows.lock().unwrap().iter().any(|r| r.id == id))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<vehicle_type::Model>, GatewayError> {
        if self.fail {
            return Err(storage_failure());
        }

        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }
}

#[derive(Default)]
pub struct FakeBrandGateway {
    rows: Mutex<Vec<brand::Model>>,
    fail_delete: bool,
    list_by_vehicle_type_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl FakeBrandGateway {
    pub fn with_rows(rows: Vec<brand::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    /// A gateway where the delete operation fails with a storage error.
    pub fn failing_delete(rows: Vec<brand::Model>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_delete: true,
            ..Default::default()
        }
    }

    pub fn list_by_vehicle_type_calls(&self) -> usize {
        self.list_by_vehicle_type_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn next_id(&self) -> i32 {
        self.rows.lock().unwrap().iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl BrandGateway for FakeBrandGateway {
    async fn add(&self, dto: CreateBrandDto) -> Result<brand::Model, GatewayError> {
        let created = brand::Model {
            id: self.next_id(),
            created_at: chrono::Utc::now().into(),
            vehicle_type_id: dto.vehicle_type_id,
            brand_name: dto.brand_name,
            description: dto.description,
            sort_order: dto.sort_order,
            is_active: dto.is_active,
        };

        self.rows.lock().unwrap().push(created.clone());

        Ok(created)
    }

    async fn update(&self, id: i32, dto: UpdateBrandDto) -> Result<brand::Model, GatewayError> {
        if id != dto.id {
            return Err(GatewayError::IdMismatch);
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GatewayError::NotFound)?;

        row.vehicle_type_id = dto.vehicle_type_id;
        row.brand_name = dto.brand_name;
        row.description = dto.description;
        row.sort_order = dto.sort_order;
        row.is_active = dto.is_active;

        Ok(row.clone())
    }

    async fn list_all(&self) -> Result<Vec<brand::Model>, GatewayError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_vehicle_type(
        &self,
        vehicle_type_id: i32,
    ) -> Result<Vec<brand::Model>, GatewayError> {
        self.list_by_vehicle_type_calls.fetch_add(1, Ordering::SeqCst);

        let brands = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.vehicle_type_id == vehicle_type_id)
            .cloned()
            .collect();

        Ok(brands)
    }

    async fn exists(&self, id: i32) -> Result<bool, GatewayError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.id == id))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<brand::Model>, GatewayError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<bool, GatewayError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_delete {
            return Err(storage_failure());
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);

        Ok(rows.len() < before)
    }
}
