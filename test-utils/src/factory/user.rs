//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .national_id(1234567890)
///     .name("Walter")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    national_id: i64,
    name: String,
    lastname: String,
    dob: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - national_id: `1_000_000_000 + id` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - lastname: `"White"`
    /// - dob: `"1973-06-12"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            national_id: 1_000_000_000 + id as i64,
            name: format!("User {}", id),
            lastname: "White".to_string(),
            dob: "1973-06-12".to_string(),
        }
    }

    pub fn national_id(mut self, national_id: i64) -> Self {
        self.national_id = national_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = lastname.into();
        self
    }

    pub fn dob(mut self, dob: impl Into<String>) -> Self {
        self.dob = dob.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.national_id),
            name: ActiveValue::Set(self.name),
            lastname: ActiveValue::Set(self.lastname),
            dob: ActiveValue::Set(self.dob),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
