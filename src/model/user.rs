use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub client: i32,
    pub id: i64, // national id
    pub name: String,
    pub lastname: String,
    pub dob: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub dob: String,
}

/// Partial update of a user; absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema, Validate)]
pub struct UpdateUserDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub lastname: Option<String>,
    #[validate(length(min = 8))]
    pub dob: Option<String>,
    #[validate(custom(function = "crate::model::validate::user_national_id"))]
    pub id: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserEnvelopeDto {
    pub success: bool,
    pub user: UserDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
