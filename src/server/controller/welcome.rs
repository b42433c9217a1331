use axum::{extract::State, Json};

use crate::{model::api::WelcomeDto, server::state::AppState};

/// Tag for grouping the service metadata endpoint in OpenAPI documentation
pub static WELCOME_TAG: &str = "welcome";

const WELCOME_MESSAGE: &str = "Hello World";

/// Show service metadata.
///
/// # Returns
/// - `200 OK` - Service name, greeting and version
#[utoipa::path(
    get,
    path = "/",
    tag = WELCOME_TAG,
    responses(
        (status = 200, description = "Service metadata", body = WelcomeDto)
    ),
)]
pub async fn welcome(State(state): State<AppState>) -> Json<WelcomeDto> {
    Json(WelcomeDto {
        name: state.app_name,
        message: WELCOME_MESSAGE.to_string(),
        version: state.version,
    })
}
