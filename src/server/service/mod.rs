//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Identity checks**: Rejecting zero keys before any query is issued
//! - **Orchestration**: Resolving a reservation's car and user before it is written
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services borrow the connection held in the application state and are created per
//! request.

pub mod car;
pub mod reservation;
pub mod user;
