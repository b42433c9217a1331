//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible, unique defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let car = factory::create_car(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let (car, user, reservation) =
//!     factory::helpers::create_reservation_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db)
//!     .license("NOF123")
//!     .maker("mercedes-benz")
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod helpers;
pub mod reservation;
pub mod user;

pub use car::create_car;
pub use reservation::create_reservation;
pub use user::create_user;
