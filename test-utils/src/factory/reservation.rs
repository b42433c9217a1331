//! Reservation factory for creating test reservation entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations linked to an existing car and user.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    car_id: Option<i32>,
    user_id: Option<i32>,
    starts_at: String,
    ends_at: String,
    notes: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given car and user keys.
    ///
    /// Defaults:
    /// - starts_at: `"2022-12-10 10:00:00"`
    /// - ends_at: `"2022-12-20 11:00:00"`
    /// - notes: `"Lorem ipsum dolor sit amet"`
    pub fn new(db: &'a DatabaseConnection, car_id: i32, user_id: i32) -> Self {
        Self {
            db,
            car_id: Some(car_id),
            user_id: Some(user_id),
            starts_at: "2022-12-10 10:00:00".to_string(),
            ends_at: "2022-12-20 11:00:00".to_string(),
            notes: "Lorem ipsum dolor sit amet".to_string(),
        }
    }

    /// Leaves the reservation without a car reference.
    pub fn without_car(mut self) -> Self {
        self.car_id = None;
        self
    }

    /// Leaves the reservation without a user reference.
    pub fn without_user(mut self) -> Self {
        self.user_id = None;
        self
    }

    pub fn starts_at(mut self, starts_at: impl Into<String>) -> Self {
        self.starts_at = starts_at.into();
        self
    }

    pub fn ends_at(mut self, ends_at: impl Into<String>) -> Self {
        self.ends_at = ends_at.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            car_id: ActiveValue::Set(self.car_id),
            user_id: ActiveValue::Set(self.user_id),
            starts_at: ActiveValue::Set(self.starts_at),
            ends_at: ActiveValue::Set(self.ends_at),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given car and user.
pub async fn create_reservation(
    db: &DatabaseConnection,
    car_id: i32,
    user_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, car_id, user_id).build().await
}
