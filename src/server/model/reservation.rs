//! Reservation domain models and parameters.
//!
//! A reservation references one car and one user by foreign key. Either reference may be
//! empty when the referenced record was deleted after the reservation was made.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    server::model::{car::Car, user::User},
};

/// A reservation with its car and user relations loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub user: Option<User>,
    pub car: Option<Car>,
    pub starts_at: String,
    pub ends_at: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The reservation row
    /// - `car` - The referenced car row, if any
    /// - `user` - The referenced user row, if any
    pub fn from_entity(
        entity: entity::reservation::Model,
        car: Option<entity::car::Model>,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user: user.map(User::from_entity),
            car: car.map(Car::from_entity),
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            user: self.user.map(User::into_dto),
            car: self.car.map(Car::into_dto),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn car_id(&self) -> Option<i32> {
        self.car.as_ref().map(|car| car.car_id)
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|user| user.client)
    }
}

/// Core fields of a new reservation; the car and user are passed separately by key.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub starts_at: String,
    pub ends_at: String,
    pub notes: String,
}

impl CreateReservationParam {
    /// Splits a create DTO into the core fields and the `(car_id, user_id)` keys.
    pub fn from_dto(dto: CreateReservationDto) -> (Self, i32, i32) {
        (
            Self {
                starts_at: dto.starts_at,
                ends_at: dto.ends_at,
                notes: dto.notes,
            },
            dto.car_id,
            dto.user_id,
        )
    }
}

/// Partial reservation update; `car_id`/`user_id` re-point the relations.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParam {
    pub car_id: Option<i32>,
    pub user_id: Option<i32>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub notes: Option<String>,
}

impl UpdateReservationParam {
    pub fn from_dto(dto: UpdateReservationDto) -> Self {
        Self {
            car_id: dto.car_id,
            user_id: dto.user_id,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
            notes: dto.notes,
        }
    }
}
