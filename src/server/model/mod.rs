//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! create and update operations from controllers into services.

pub mod car;
pub mod reservation;
pub mod user;
