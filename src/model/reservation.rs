use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{car::CarDto, user::UserDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub user: Option<UserDto>,
    pub car: Option<CarDto>,
    #[serde(rename = "from")]
    pub starts_at: String,
    #[serde(rename = "to")]
    pub ends_at: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "carId")]
    pub car_id: i32,
    #[serde(rename = "from")]
    pub starts_at: String,
    #[serde(rename = "to")]
    pub ends_at: String,
    pub notes: String,
}

/// Partial update of a reservation; `userId`/`carId` re-point the relations.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema, Validate)]
pub struct UpdateReservationDto {
    #[serde(rename = "userId")]
    #[validate(custom(function = "crate::model::validate::reservation_user_id"))]
    pub user_id: Option<i32>,
    #[serde(rename = "carId")]
    #[validate(custom(function = "crate::model::validate::reservation_car_id"))]
    pub car_id: Option<i32>,
    #[serde(rename = "from")]
    #[validate(length(min = 1))]
    pub starts_at: Option<String>,
    #[serde(rename = "to")]
    #[validate(length(min = 1))]
    pub ends_at: Option<String>,
    #[validate(length(min = 1))]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationEnvelopeDto {
    pub success: bool,
    pub reservation: ReservationDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
