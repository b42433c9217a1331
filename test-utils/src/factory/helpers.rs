//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a car, a user and a reservation linking both.
///
/// All entities are created with default values. Use the individual factories if
/// specific values are needed.
///
/// # Returns
/// - `Ok((car, user, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::car::Model,
        entity::user::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let car = crate::factory::car::create_car(db).await?;
    let user = crate::factory::user::create_user(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, car.car_id, user.client).await?;

    Ok((car, user, reservation))
}
