use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a new user and returns it with its generated client key
    pub async fn insert(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(param).await?;

        tracing::info!(client = user.client, "User created");

        Ok(user)
    }

    /// Gets every user ordered by client key
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).find_all().await?)
    }

    /// Gets a user by client key; zero is rejected, a missing user is `Ok(None)`
    pub async fn get_by_id(&self, client: i32) -> Result<Option<User>, AppError> {
        if client == 0 {
            return Err(AppError::InvalidKey("user"));
        }

        let user = UserRepository::new(self.db).find_by_id(client).await?;

        tracing::info!(client, found = user.is_some(), "User lookup");

        Ok(user)
    }

    /// Gets the user registered with the given national identification number
    pub async fn get_by_national_id(&self, national_id: i64) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_national_id(national_id)
            .await?)
    }

    /// Saves the full record and returns it as stored
    pub async fn update(&self, user: User) -> Result<User, AppError> {
        if user.client == 0 {
            return Err(AppError::InvalidKey("user"));
        }

        let user = UserRepository::new(self.db).save(user).await?;

        tracing::info!(client = user.client, "User updated");

        Ok(user)
    }

    /// Deletes the given user; reservations referencing it lose their user
    pub async fn delete(&self, user: &User) -> Result<(), AppError> {
        if user.client == 0 {
            return Err(AppError::InvalidKey("user"));
        }

        UserRepository::new(self.db).remove(user.client).await?;

        tracing::info!(client = user.client, "User deleted");

        Ok(())
    }
}
