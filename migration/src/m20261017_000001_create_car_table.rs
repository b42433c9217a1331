use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::CarId))
                    .col(string_uniq(Car::Id))
                    .col(string(Car::Maker))
                    .col(integer(Car::Model))
                    .col(string(Car::Ref))
                    .col(string(Car::Color))
                    .col(big_integer(Car::Milage))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Car::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    CarId,
    Id,
    Maker,
    Model,
    Ref,
    Color,
    Milage,
    CreatedAt,
    UpdatedAt,
}
