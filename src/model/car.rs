use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarDto {
    #[serde(rename = "carId")]
    pub car_id: i32,
    pub id: String, // license plate
    pub maker: String,
    pub model: i32,
    #[serde(rename = "ref")]
    pub reference: String,
    pub color: String,
    pub milage: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCarDto {
    pub id: String,
    pub maker: String,
    pub model: i32,
    #[serde(rename = "ref")]
    pub reference: String,
    pub color: String,
    pub milage: i64,
}

/// Partial update of a car; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema, Validate)]
pub struct UpdateCarDto {
    #[validate(length(min = 6))]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub maker: Option<String>,
    #[validate(custom(function = "crate::model::validate::car_model"))]
    pub model: Option<i32>,
    #[serde(rename = "ref")]
    #[validate(length(min = 1))]
    pub reference: Option<String>,
    #[validate(length(min = 3))]
    pub color: Option<String>,
    #[validate(custom(function = "crate::model::validate::car_milage"))]
    pub milage: Option<i64>,
}

/// Single-car envelope returned by fetch, update and delete.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarEnvelopeDto {
    pub success: bool,
    pub car: CarDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
