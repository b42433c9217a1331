//! Car data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::car::{Car, CreateCarParam};

/// Repository providing database operations for cars.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    /// Creates a new CarRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new car, stamping both timestamps with the current time.
    ///
    /// # Returns
    /// - `Ok(Car)` - The persisted car including its generated key
    /// - `Err(DbErr)` - Database error, e.g. the license is already taken
    pub async fn create(&self, param: CreateCarParam) -> Result<Car, DbErr> {
        let now = Utc::now();

        let entity = entity::car::ActiveModel {
            id: ActiveValue::Set(param.license),
            maker: ActiveValue::Set(param.maker),
            model: ActiveValue::Set(param.model),
            reference: ActiveValue::Set(param.reference),
            color: ActiveValue::Set(param.color),
            milage: ActiveValue::Set(param.milage),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Gets every car ordered by surrogate key.
    pub async fn find_all(&self) -> Result<Vec<Car>, DbErr> {
        let entities = entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::CarId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Car::from_entity).collect())
    }

    /// Finds a car by its surrogate key.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - Car found
    /// - `Ok(None)` - No car with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, car_id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(car_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Finds a car by its license plate.
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The car holding that license
    /// - `Ok(None)` - No car holds that license
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_license(&self, license: &str) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find()
            .filter(entity::car::Column::Id.eq(license))
            .one(self.db)
            .await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Writes every field of `car` to its row and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Car)` - The car as stored after the update
    /// - `Err(DbErr)` - Database error, e.g. the new license is already taken or the
    ///   row no longer exists
    pub async fn save(&self, car: Car) -> Result<Car, DbErr> {
        let entity = entity::car::ActiveModel {
            car_id: ActiveValue::Unchanged(car.car_id),
            id: ActiveValue::Set(car.license),
            maker: ActiveValue::Set(car.maker),
            model: ActiveValue::Set(car.model),
            reference: ActiveValue::Set(car.reference),
            color: ActiveValue::Set(car.color),
            milage: ActiveValue::Set(car.milage),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Deletes the car with the given key. Deleting a missing car is not an error.
    pub async fn remove(&self, car_id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::delete_by_id(car_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
