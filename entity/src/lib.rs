//! SeaORM entity definitions for the `car`, `users` and `reservation` tables.

pub mod prelude;

pub mod car;
pub mod reservation;
pub mod user;
