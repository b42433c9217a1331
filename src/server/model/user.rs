//! User domain models and parameters.
//!
//! Users are the customers holding reservations, identified externally by their
//! national identification number.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, UpdateUserDto, UserDto};

/// A customer who can hold reservations.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Generated surrogate key; zero until the user is persisted.
    pub client: i32,
    /// National identification number, unique across users.
    pub national_id: i64,
    pub name: String,
    pub lastname: String,
    /// Date of birth as supplied by the client.
    pub dob: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            client: entity.client,
            national_id: entity.id,
            name: entity.name,
            lastname: entity.lastname,
            dob: entity.dob,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            client: self.client,
            id: self.national_id,
            name: self.name,
            lastname: self.lastname,
            dob: self.dob,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Overwrites the fields present in `param`, leaving the others untouched.
    pub fn apply(&mut self, param: UpdateUserParam) {
        if let Some(national_id) = param.national_id {
            self.national_id = national_id;
        }
        if let Some(name) = param.name {
            self.name = name;
        }
        if let Some(lastname) = param.lastname {
            self.lastname = lastname;
        }
        if let Some(dob) = param.dob {
            self.dob = dob;
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub national_id: i64,
    pub name: String,
    pub lastname: String,
    pub dob: String,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            national_id: dto.id,
            name: dto.name,
            lastname: dto.lastname,
            dob: dto.dob,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub national_id: Option<i64>,
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub dob: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            national_id: dto.id,
            name: dto.name,
            lastname: dto.lastname,
            dob: dto.dob,
        }
    }
}
