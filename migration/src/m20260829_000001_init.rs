use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // brand.vehicle_type_id intentionally has no foreign key constraint,
        // parent existence is checked by the brand handlers before any write
        let statement = r#"
        create table "vehicle_type" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "type_name" varchar(255) not null,
            "description" text null,
            "is_active" boolean not null default true
        );

        create table "brand" (
            "id" serial primary key,
            "created_at" timestamptz(0) not null default now(),
            "vehicle_type_id" int not null,
            "brand_name" varchar(255) not null,
            "description" text null,
            "sort_order" int null,
            "is_active" boolean not null default true
        );
        "#;

        db.execute_unprepared(statement).await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("cannot be reverted")))
    }
}
