use crate::server::{
    data::{car::CarRepository, reservation::ReservationRepository, user::UserRepository},
    model::reservation::CreateReservationParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod remove;
mod save;

fn param() -> CreateReservationParam {
    CreateReservationParam {
        starts_at: "2022-12-10 10:00:00".to_string(),
        ends_at: "2022-12-20 11:00:00".to_string(),
        notes: "Lorem ipsum dolor sit amet".to_string(),
    }
}
