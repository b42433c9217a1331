//! Database repository layer for all domain entities.
//!
//! Each repository wraps the generic create/read/update/delete operations for one
//! entity: `create`, `find_all`, `find_by_id`, a lookup by the entity's unique external
//! field, `save` and `remove`. Repositories use SeaORM entity models internally and return
//! domain models, so no persistence detail leaks into services.

pub mod car;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;
