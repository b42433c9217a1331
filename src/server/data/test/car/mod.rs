use crate::server::{
    data::car::CarRepository,
    model::car::{CreateCarParam, UpdateCarParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod remove;
mod save;

fn nof123() -> CreateCarParam {
    CreateCarParam {
        license: "NOF123".to_string(),
        maker: "mercedes-benz".to_string(),
        model: 2023,
        reference: "GLC300".to_string(),
        color: "blue".to_string(),
        milage: 31278,
    }
}
