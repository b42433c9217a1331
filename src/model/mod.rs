//! Request and response bodies of the HTTP API.
//!
//! DTOs here are the wire format: serde names match the JSON the API has always spoken
//! (`carId`, `ref`, `errorsArray`, ...), `utoipa` derives feed the OpenAPI document and
//! `validator` derives declare the field rules checked on updates.

pub mod api;
pub mod car;
pub mod reservation;
pub mod user;
pub mod validate;
