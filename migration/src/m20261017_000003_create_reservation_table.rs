use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261017_000001_create_car_table::Car, m20261017_000002_create_users_table::Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer_null(Reservation::UserId))
                    .col(integer_null(Reservation::CarId))
                    .col(string(Reservation::StartsAt))
                    .col(string(Reservation::EndsAt))
                    .col(text(Reservation::Notes))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(Users::Table, Users::Client)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_car_id")
                            .from(Reservation::Table, Reservation::CarId)
                            .to(Car::Table, Car::CarId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    CarId,
    #[sea_orm(iden = "from")]
    StartsAt,
    #[sea_orm(iden = "to")]
    EndsAt,
    Notes,
    CreatedAt,
    UpdatedAt,
}
