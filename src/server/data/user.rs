//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database
//! with conversion between entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - National id, names and date of birth
    ///
    /// # Returns
    /// - `Ok(User)` - The persisted user including its generated client key
    /// - `Err(DbErr)` - Database error, e.g. the national id is already registered
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(param.national_id),
            name: ActiveValue::Set(param.name),
            lastname: ActiveValue::Set(param.lastname),
            dob: ActiveValue::Set(param.dob),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets every user ordered by client key.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Client)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by client key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, client: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(client)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by national identification number.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user registered with that number
    /// - `Ok(None)` - No user registered with that number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_national_id(&self, national_id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(national_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Writes every field of `user` to its row and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as stored after the update
    /// - `Err(DbErr)` - Database error, e.g. the national id collides or the row is gone
    pub async fn save(&self, user: User) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            client: ActiveValue::Unchanged(user.client),
            id: ActiveValue::Set(user.national_id),
            name: ActiveValue::Set(user.name),
            lastname: ActiveValue::Set(user.lastname),
            dob: ActiveValue::Set(user.dob),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes the user with the given client key.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted (or did not exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, client: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(client)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
