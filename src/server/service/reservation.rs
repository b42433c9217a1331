use sea_orm::DatabaseConnection;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::{CreateReservationParam, Reservation, UpdateReservationParam},
    service::{car::CarService, user::UserService},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation for an existing car and user.
    ///
    /// The car is resolved first, then the user. If either is missing the call fails
    /// with `UnknownReference` and nothing is written. Otherwise the row is inserted with
    /// both foreign keys and fetched again with its relations.
    pub async fn insert(
        &self,
        param: CreateReservationParam,
        car_id: i32,
        user_id: i32,
    ) -> Result<Reservation, AppError> {
        let car = CarService::new(self.db)
            .get_by_id(car_id)
            .await?
            .ok_or(AppError::UnknownReference("car"))?;
        let user = UserService::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(AppError::UnknownReference("user"))?;

        let repo = ReservationRepository::new(self.db);
        let id = repo.create(param, car.car_id, user.client).await?;

        tracing::info!(id, car_id, user_id, "Reservation created");

        repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::InternalError(format!("Reservation {} missing after insert", id))
        })
    }

    /// Gets every reservation with car and user loaded
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db).find_all().await?)
    }

    /// Gets a reservation by key with relations; zero is rejected, missing is `Ok(None)`
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        if id == 0 {
            return Err(AppError::InvalidKey("reservation"));
        }

        let reservation = ReservationRepository::new(self.db).find_by_id(id).await?;

        tracing::info!(id, found = reservation.is_some(), "Reservation lookup");

        Ok(reservation)
    }

    /// Applies a partial update to `reservation` in memory.
    ///
    /// New car and user keys are resolved to their records; a key that matches nothing
    /// fails with `UnknownReference` and leaves `reservation` untouched.
    pub async fn apply_changes(
        &self,
        reservation: &mut Reservation,
        param: UpdateReservationParam,
    ) -> Result<(), AppError> {
        let car = match param.car_id {
            Some(car_id) => Some(
                CarService::new(self.db)
                    .get_by_id(car_id)
                    .await?
                    .ok_or(AppError::UnknownReference("car"))?,
            ),
            None => None,
        };
        let user = match param.user_id {
            Some(user_id) => Some(
                UserService::new(self.db)
                    .get_by_id(user_id)
                    .await?
                    .ok_or(AppError::UnknownReference("user"))?,
            ),
            None => None,
        };

        if car.is_some() {
            reservation.car = car;
        }
        if user.is_some() {
            reservation.user = user;
        }
        if let Some(starts_at) = param.starts_at {
            reservation.starts_at = starts_at;
        }
        if let Some(ends_at) = param.ends_at {
            reservation.ends_at = ends_at;
        }
        if let Some(notes) = param.notes {
            reservation.notes = notes;
        }

        Ok(())
    }

    /// Saves the full record and returns it re-fetched with relations
    pub async fn update(&self, reservation: Reservation) -> Result<Reservation, AppError> {
        if reservation.id == 0 {
            return Err(AppError::InvalidKey("reservation"));
        }

        let repo = ReservationRepository::new(self.db);
        repo.save(&reservation).await?;

        tracing::info!(id = reservation.id, "Reservation updated");

        repo.find_by_id(reservation.id)
            .await?
            .ok_or(AppError::NotFound("reservation"))
    }

    /// Deletes the given reservation; its car and user are kept
    pub async fn delete(&self, reservation: &Reservation) -> Result<(), AppError> {
        if reservation.id == 0 {
            return Err(AppError::InvalidKey("reservation"));
        }

        ReservationRepository::new(self.db)
            .remove(reservation.id)
            .await?;

        tracing::info!(id = reservation.id, "Reservation deleted");

        Ok(())
    }
}
