//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db)
///     .license("NOF123")
///     .color("blue")
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    license: String,
    maker: String,
    model: i32,
    reference: String,
    color: String,
    milage: i64,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - license: `"CAR{id:06}"` where id is auto-incremented
    /// - maker: `"mercedes-benz"`
    /// - model: `2023`
    /// - reference: `"GLC300"`
    /// - color: `"blue"`
    /// - milage: `31278`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            license: format!("CAR{:06}", id),
            maker: "mercedes-benz".to_string(),
            model: 2023,
            reference: "GLC300".to_string(),
            color: "blue".to_string(),
            milage: 31278,
        }
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    pub fn maker(mut self, maker: impl Into<String>) -> Self {
        self.maker = maker.into();
        self
    }

    pub fn model(mut self, model: i32) -> Self {
        self.model = model;
        self
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn milage(mut self, milage: i64) -> Self {
        self.milage = milage;
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        let now = Utc::now();
        entity::car::ActiveModel {
            id: ActiveValue::Set(self.license),
            maker: ActiveValue::Set(self.maker),
            model: ActiveValue::Set(self.model),
            reference: ActiveValue::Set(self.reference),
            color: ActiveValue::Set(self.color),
            milage: ActiveValue::Set(self.milage),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
///
/// Shorthand for `CarFactory::new(db).build().await`.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}
