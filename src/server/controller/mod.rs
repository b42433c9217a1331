//! HTTP request handlers.
//!
//! Handlers take the shared state and the request through the [`AppJson`] / [`AppPath`]
//! extractors, run field validation, call one service and wrap the result in the JSON
//! envelope. Every failure is returned as an [`AppError`] and rendered by its
//! `IntoResponse` implementation.
//!
//! [`AppJson`]: crate::server::extract::AppJson
//! [`AppPath`]: crate::server::extract::AppPath
//! [`AppError`]: crate::server::error::AppError

pub mod car;
pub mod reservation;
pub mod user;
pub mod welcome;

#[cfg(test)]
mod test;
