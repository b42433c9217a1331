//! Reservation data repository for database operations.
//!
//! Reservations are always returned with their car and user relations loaded. Rows are
//! stored with nullable `car_id`/`user_id` foreign keys.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{CreateReservationParam, Reservation};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new ReservationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation referencing the given car and user in a single statement.
    ///
    /// # Arguments
    /// - `param` - Core reservation fields
    /// - `car_id` - Key of the reserved car
    /// - `user_id` - Client key of the reserving user
    ///
    /// # Returns
    /// - `Ok(i32)` - Key of the new reservation
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReservationParam,
        car_id: i32,
        user_id: i32,
    ) -> Result<i32, DbErr> {
        let now = Utc::now();

        let entity = entity::reservation::ActiveModel {
            car_id: ActiveValue::Set(Some(car_id)),
            user_id: ActiveValue::Set(Some(user_id)),
            starts_at: ActiveValue::Set(param.starts_at),
            ends_at: ActiveValue::Set(param.ends_at),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Gets every reservation with car and user loaded, ordered by key.
    ///
    /// Cars are joined in the main query; users are fetched with one additional
    /// `IN` query and matched up in memory.
    pub async fn find_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let rows = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::Car)
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = rows.iter().filter_map(|(row, _)| row.user_id).collect();
        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Client.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.client, user))
            .collect();

        let reservations = rows
            .into_iter()
            .map(|(row, car)| {
                let user = row.user_id.and_then(|id| users.get(&id).cloned());
                Reservation::from_entity(row, car, user)
            })
            .collect();

        Ok(reservations)
    }

    /// Finds a reservation by key with its car and user loaded.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some((row, car)) = entity::prelude::Reservation::find_by_id(id)
            .find_also_related(entity::prelude::Car)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = row.find_related(entity::prelude::User).one(self.db).await?;

        Ok(Some(Reservation::from_entity(row, car, user)))
    }

    /// Writes every field of `reservation`, including both foreign keys, and refreshes
    /// `updated_at`.
    ///
    /// # Returns
    /// - `Ok(())` - Row updated
    /// - `Err(DbErr)` - Database error, e.g. the row no longer exists
    pub async fn save(&self, reservation: &Reservation) -> Result<(), DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(reservation.id),
            car_id: ActiveValue::Set(reservation.car_id()),
            user_id: ActiveValue::Set(reservation.user_id()),
            starts_at: ActiveValue::Set(reservation.starts_at.clone()),
            ends_at: ActiveValue::Set(reservation.ends_at.clone()),
            notes: ActiveValue::Set(reservation.notes.clone()),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the reservation with the given key. The referenced car and user are kept.
    pub async fn remove(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
