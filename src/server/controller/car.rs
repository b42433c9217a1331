use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        car::{CarDto, CarEnvelopeDto, CreateCarDto, UpdateCarDto},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        model::car::{CreateCarParam, UpdateCarParam},
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// Register a new car.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Every car field; `id` is the license plate and must be unique
///
/// # Returns
/// - `200 OK` - The stored car wrapped in `data`
/// - `400 Bad Request` - Malformed body, missing field or duplicate license
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 200, description = "Successfully created car", body = DataDto<CarDto>),
        (status = 400, description = "Invalid car data", body = ErrorDto),
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db)
        .insert(CreateCarParam::from_dto(payload))
        .await?;

    Ok(Json(DataDto::new(car.into_dto())))
}

/// List every car.
///
/// # Returns
/// - `200 OK` - All cars ordered by `carId`
/// - `400 Bad Request` - Database error
#[utoipa::path(
    get,
    path = "/cars",
    tag = CAR_TAG,
    responses(
        (status = 200, description = "All cars", body = DataDto<Vec<CarDto>>),
        (status = 400, description = "Database error", body = ErrorDto),
    ),
)]
pub async fn get_cars(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cars = CarService::new(&state.db).get_all().await?;

    Ok(Json(DataDto::new(
        cars.into_iter().map(|car| car.into_dto()).collect::<Vec<_>>(),
    )))
}

/// Get a car by its `carId`.
///
/// # Returns
/// - `200 OK` - The car
/// - `400 Bad Request` - Zero or non-numeric id
/// - `404 Not Found` - No car with that id
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car surrogate key (carId)")
    ),
    responses(
        (status = 200, description = "The car", body = CarEnvelopeDto),
        (status = 400, description = "Invalid car id", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
    ),
)]
pub async fn get_car(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let car = CarService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("car"))?;

    Ok(Json(CarEnvelopeDto {
        success: true,
        car: car.into_dto(),
        message: None,
    }))
}

/// Partially update a car.
///
/// Fields absent from the body keep their stored value. Present fields are validated
/// before the car is looked up.
///
/// # Returns
/// - `200 OK` - The updated car
/// - `400 Bad Request` - Validation failure (`errorsArray`) or database error
/// - `404 Not Found` - No car with that id
#[utoipa::path(
    put,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car surrogate key (carId)")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Successfully updated car", body = CarEnvelopeDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = CarService::new(&state.db);

    let mut car = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("car"))?;
    car.apply(UpdateCarParam::from_dto(payload));

    let car = service.update(car).await?;

    Ok(Json(CarEnvelopeDto {
        success: true,
        car: car.into_dto(),
        message: None,
    }))
}

/// Delete a car.
///
/// Reservations that referenced the car are kept with an empty `car`.
///
/// # Returns
/// - `200 OK` - The car as it was before deletion
/// - `400 Bad Request` - Invalid id or database error
/// - `404 Not Found` - No car with that id
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = CAR_TAG,
    params(
        ("id" = i32, Path, description = "Car surrogate key (carId)")
    ),
    responses(
        (status = 200, description = "Successfully deleted car", body = CarEnvelopeDto),
        (status = 400, description = "Invalid car id", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let car = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("car"))?;
    service.delete(&car).await?;

    Ok(Json(CarEnvelopeDto {
        success: true,
        car: car.into_dto(),
        message: Some("Car deleted successfully".to_string()),
    }))
}
