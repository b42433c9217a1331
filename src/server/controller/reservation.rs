use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        reservation::{
            CreateReservationDto, ReservationDto, ReservationEnvelopeDto, UpdateReservationDto,
        },
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        model::reservation::{CreateReservationParam, UpdateReservationParam},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Reserve a car for a user.
///
/// Both `carId` and `userId` must name existing records; the reservation is only
/// written once both are resolved.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Car and user keys plus the reservation period and notes
///
/// # Returns
/// - `200 OK` - The stored reservation with `car` and `user` populated
/// - `400 Bad Request` - Malformed body, zero key or unknown car/user
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 200, description = "Successfully created reservation", body = DataDto<ReservationDto>),
        (status = 400, description = "Invalid reservation data or unknown car/user", body = ErrorDto),
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let (param, car_id, user_id) = CreateReservationParam::from_dto(payload);

    let reservation = ReservationService::new(&state.db)
        .insert(param, car_id, user_id)
        .await?;

    Ok(Json(DataDto::new(reservation.into_dto())))
}

/// List every reservation with its car and user.
#[utoipa::path(
    get,
    path = "/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "All reservations", body = DataDto<Vec<ReservationDto>>),
        (status = 400, description = "Database error", body = ErrorDto),
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok(Json(DataDto::new(
        reservations
            .into_iter()
            .map(|reservation| reservation.into_dto())
            .collect::<Vec<_>>(),
    )))
}

/// Get a reservation by id with its car and user.
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "The reservation", body = ReservationEnvelopeDto),
        (status = 400, description = "Invalid reservation id", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = ReservationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;

    Ok(Json(ReservationEnvelopeDto {
        success: true,
        reservation: reservation.into_dto(),
        message: None,
    }))
}

/// Partially update a reservation.
///
/// `userId` and `carId` re-point the reservation to another user or car; each must
/// name an existing record. Other present fields overwrite the stored values.
///
/// # Returns
/// - `200 OK` - The updated reservation with relations
/// - `400 Bad Request` - Validation failure, unknown car/user or database error
/// - `404 Not Found` - No reservation with that id
#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationEnvelopeDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let service = ReservationService::new(&state.db);

    let mut reservation = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;
    service
        .apply_changes(&mut reservation, UpdateReservationParam::from_dto(payload))
        .await?;

    let reservation = service.update(reservation).await?;

    Ok(Json(ReservationEnvelopeDto {
        success: true,
        reservation: reservation.into_dto(),
        message: None,
    }))
}

/// Delete a reservation. The referenced car and user are kept.
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(
        ("id" = i32, Path, description = "Reservation id")
    ),
    responses(
        (status = 200, description = "Successfully deleted reservation", body = ReservationEnvelopeDto),
        (status = 400, description = "Invalid reservation id", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservation = service
        .get_by_id(id)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;
    service.delete(&reservation).await?;

    Ok(Json(ReservationEnvelopeDto {
        success: true,
        reservation: reservation.into_dto(),
        message: Some("Reservation deleted successfully".to_string()),
    }))
}
