use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{car, reservation, user, welcome},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Reservation API"),
    tags(
        (name = "welcome", description = "Service metadata"),
        (name = "car", description = "Cars available for reservation"),
        (name = "user", description = "Registered users"),
        (name = "reservation", description = "Car reservations"),
    )
)]
struct ApiDoc;

/// Builds the application router with every resource route, the generated OpenAPI
/// document at `/api-docs/openapi.json`, request tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(welcome::welcome))
        .routes(routes!(car::create_car, car::get_cars))
        .routes(routes!(car::get_car, car::update_car, car::delete_car))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(
            reservation::create_reservation,
            reservation::get_reservations
        ))
        .routes(routes!(
            reservation::get_reservation,
            reservation::update_reservation,
            reservation::delete_reservation
        ))
        .split_for_parts();

    router
        .route("/api-docs/openapi.json", get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
