use super::open_api;
use crate::{
    config::app_config,
    modules::{
        brand::{self, repository::BrandGateway, repository::SeaOrmBrandGateway},
        vehicle_type::{self, repository::SeaOrmVehicleTypeGateway, repository::VehicleTypeGateway},
    },
};
use axum::{body::Body, routing::get, Router};
use http::{header, HeaderValue, Method, Request, StatusCode};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP request
/// and thus its fields should contain types that are cheap to clone.
///
/// Handlers reach the database only through the gateway traits, so unit
/// tests can run them against in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub vehicle_types: Arc<dyn VehicleTypeGateway>,
    pub brands: Arc<dyn BrandGateway>,
}

/// Creates the main axum router/controller to be served over http
pub fn new(db: Arc<DatabaseConnection>) -> Router {
    let state = AppState {
        vehicle_types: Arc::new(SeaOrmVehicleTypeGateway::new(db.clone())),
        brands: Arc::new(SeaOrmBrandGateway::new(db)),
    };

    // URL.to_string for some reason adds a trailing slash
    // we need to remove it to avoid cors errors
    let mut frontend_origin = app_config().frontend_url.to_string();
    if frontend_origin.ends_with('/') {
        frontend_origin.pop();
    }

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .expect("failed to parse CORS allowed origins"),
        )
        .allow_credentials(true)
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let global_middlewares = ServiceBuilder::new().layer(tracing_layer).layer(cors);

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .nest("/vehicle-type", vehicle_type::routes::create_router())
        .nest("/brand", brand::routes::create_router())
        .layer(global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
