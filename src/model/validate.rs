//! Field rules that `validator` has no built-in for.
//!
//! Numeric fields are held to a minimum length of their decimal rendering, the same
//! check the string-based length rule applies to text fields.
//!
//! `validator` reports failures under the Rust field name; [`wire_name`] recovers the
//! JSON key the client actually sent.

use std::{borrow::Cow, fmt::Display};

use serde::Serialize;
use validator::ValidationError;

/// Fails when `value` renders to fewer than `min` characters.
pub fn min_chars<T: Display + Serialize>(value: &T, min: u64) -> Result<(), ValidationError> {
    if value.to_string().chars().count() as u64 >= min {
        return Ok(());
    }

    let mut error = ValidationError::new("length");
    error.add_param(Cow::from("min"), &min);
    error.add_param(Cow::from("value"), value);
    Err(error)
}

pub fn car_model(value: i32) -> Result<(), ValidationError> {
    min_chars(&value, 4)
}

pub fn car_milage(value: i64) -> Result<(), ValidationError> {
    min_chars(&value, 1)
}

pub fn user_national_id(value: i64) -> Result<(), ValidationError> {
    min_chars(&value, 6)
}

pub fn reservation_user_id(value: i32) -> Result<(), ValidationError> {
    min_chars(&value, 5)
}

pub fn reservation_car_id(value: i32) -> Result<(), ValidationError> {
    min_chars(&value, 6)
}

/// Maps a validated DTO field to its serde name on the wire.
///
/// Covers every `#[serde(rename)]` on the update DTOs; other fields are spelled the same
/// in Rust and JSON.
pub fn wire_name(field: &str) -> &str {
    match field {
        "reference" => "ref",
        "user_id" => "userId",
        "car_id" => "carId",
        "starts_at" => "from",
        "ends_at" => "to",
        other => other,
    }
}
