//! Car domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::car::{CarDto, CreateCarDto, UpdateCarDto};

/// A car available for reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    /// Generated surrogate key; zero until the car is persisted.
    pub car_id: i32,
    /// License plate, unique across cars.
    pub license: String,
    pub maker: String,
    /// Model year.
    pub model: i32,
    pub reference: String,
    pub color: String,
    pub milage: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Converts an entity model to a car domain model at the repository boundary.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            car_id: entity.car_id,
            license: entity.id,
            maker: entity.maker,
            model: entity.model,
            reference: entity.reference,
            color: entity.color,
            milage: entity.milage,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the car domain model to a DTO for API responses.
    pub fn into_dto(self) -> CarDto {
        CarDto {
            car_id: self.car_id,
            id: self.license,
            maker: self.maker,
            model: self.model,
            reference: self.reference,
            color: self.color,
            milage: self.milage,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Overwrites the fields present in `param`, leaving the others untouched.
    pub fn apply(&mut self, param: UpdateCarParam) {
        if let Some(license) = param.license {
            self.license = license;
        }
        if let Some(maker) = param.maker {
            self.maker = maker;
        }
        if let Some(model) = param.model {
            self.model = model;
        }
        if let Some(reference) = param.reference {
            self.reference = reference;
        }
        if let Some(color) = param.color {
            self.color = color;
        }
        if let Some(milage) = param.milage {
            self.milage = milage;
        }
    }
}

/// Parameters for inserting a new car.
#[derive(Debug, Clone)]
pub struct CreateCarParam {
    pub license: String,
    pub maker: String,
    pub model: i32,
    pub reference: String,
    pub color: String,
    pub milage: i64,
}

impl CreateCarParam {
    pub fn from_dto(dto: CreateCarDto) -> Self {
        Self {
            license: dto.id,
            maker: dto.maker,
            model: dto.model,
            reference: dto.reference,
            color: dto.color,
            milage: dto.milage,
        }
    }
}

/// Partial car update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarParam {
    pub license: Option<String>,
    pub maker: Option<String>,
    pub model: Option<i32>,
    pub reference: Option<String>,
    pub color: Option<String>,
    pub milage: Option<i64>,
}

impl UpdateCarParam {
    pub fn from_dto(dto: UpdateCarDto) -> Self {
        Self {
            license: dto.id,
            maker: dto.maker,
            model: dto.model,
            reference: dto.reference,
            color: dto.color,
            milage: dto.milage,
        }
    }
}
