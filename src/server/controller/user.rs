use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserEnvelopeDto},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user. The national id in `id` must be unique.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Successfully created user", body = DataDto<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .insert(CreateUserParam::from_dto(payload))
        .await?;

    Ok(Json(DataDto::new(user.into_dto())))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = DataDto<Vec<UserDto>>),
        (status = 400, description = "Database error", body = ErrorDto),
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(DataDto::new(
        users
            .into_iter()
            .map(|user| user.into_dto())
            .collect::<Vec<_>>(),
    )))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User client key")
    ),
    responses(
        (status = 200, description = "The user", body = UserEnvelopeDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    Ok(Json(UserEnvelopeDto {
        success: true,
        user: user.into_dto(),
        message: None,
    }))
}

/// Partially update a user.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Validation failure or database error, e.g. a national id
///   already registered to another user
/// - `404 Not Found` - No user with that client key
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User client key")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserEnvelopeDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = UserService::new(&state.db);

    let mut user = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    user.apply(UpdateUserParam::from_dto(payload));

    let user = service.update(user).await?;

    Ok(Json(UserEnvelopeDto {
        success: true,
        user: user.into_dto(),
        message: None,
    }))
}

/// Delete a user, returning the record as it was before deletion.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User client key")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = UserEnvelopeDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    service.delete(&user).await?;

    Ok(Json(UserEnvelopeDto {
        success: true,
        user: user.into_dto(),
        message: Some("User deleted successfully".to_string()),
    }))
}
