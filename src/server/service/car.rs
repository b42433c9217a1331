use sea_orm::DatabaseConnection;

use crate::server::{
    data::car::CarRepository,
    error::AppError,
    model::car::{Car, CreateCarParam},
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new car and returns it with its generated key
    pub async fn insert(&self, param: CreateCarParam) -> Result<Car, AppError> {
        let car = CarRepository::new(self.db).create(param).await?;

        tracing::info!(car_id = car.car_id, license = %car.license, "Car created");

        Ok(car)
    }

    /// Gets every car ordered by key
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        Ok(CarRepository::new(self.db).find_all().await?)
    }

    /// Gets a car by surrogate key.
    ///
    /// A zero key is rejected with `InvalidKey`; a valid key without a match yields
    /// `Ok(None)`.
    pub async fn get_by_id(&self, car_id: i32) -> Result<Option<Car>, AppError> {
        if car_id == 0 {
            return Err(AppError::InvalidKey("car"));
        }

        let car = CarRepository::new(self.db).find_by_id(car_id).await?;

        tracing::info!(car_id, found = car.is_some(), "Car lookup");

        Ok(car)
    }

    /// Gets the car holding the given license plate
    pub async fn get_by_license(&self, license: &str) -> Result<Option<Car>, AppError> {
        Ok(CarRepository::new(self.db).find_by_license(license).await?)
    }

    /// Saves the full record and returns it as stored
    pub async fn update(&self, car: Car) -> Result<Car, AppError> {
        if car.car_id == 0 {
            return Err(AppError::InvalidKey("car"));
        }

        let car = CarRepository::new(self.db).save(car).await?;

        tracing::info!(car_id = car.car_id, "Car updated");

        Ok(car)
    }

    /// Deletes the given car; reservations referencing it lose their car
    pub async fn delete(&self, car: &Car) -> Result<(), AppError> {
        if car.car_id == 0 {
            return Err(AppError::InvalidKey("car"));
        }

        CarRepository::new(self.db).remove(car.car_id).await?;

        tracing::info!(car_id = car.car_id, "Car deleted");

        Ok(())
    }
}
