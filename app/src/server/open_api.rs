use crate::modules::{brand, common, vehicle_type};
use crate::server::controller;
use axum::Router;
use utoipa::openapi::{ContactBuilder, InfoBuilder, OpenApiBuilder};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        entity::brand::Model,
        entity::vehicle_type::Model,

        common::responses::SimpleError,

        vehicle_type::dto::CreateVehicleTypeDto,
        vehicle_type::dto::UpdateVehicleTypeDto,

        brand::dto::CreateBrandDto,
        brand::dto::UpdateBrandDto,
    )),
    paths(
        controller::healthcheck,

        vehicle_type::routes::create_vehicle_type,
        vehicle_type::routes::update_vehicle_type,
        vehicle_type::routes::list_vehicle_types,

        brand::routes::create_brand,
        brand::routes::update_brand,
        brand::routes::delete_brand,
        brand::routes::list_brands_by_vehicle_type,
    ),
)]
struct ApiDoc;

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Vehicle Catalog API")
        .description(Some("CRUD API for vehicle types and their brands."))
        .version("0.1.0")
        .contact(Some(ContactBuilder::new().name(Some("catalog team")).build()))
        .build();

    let api_doc = builder.info(info).build();

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/docs/openapi.json", api_doc))
        .merge(RapiDoc::new("/docs/openapi.json").path("/rapidoc"))
}
