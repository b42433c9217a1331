//! Car Reservations Test Utils
//!
//! Provides shared testing utilities for building repository, service and HTTP tests for
//! the car reservation API. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and factories for inserting rows with sensible defaults.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for cars, users and reservations
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_car_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let car = factory::create_car(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
