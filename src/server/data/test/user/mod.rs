use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod remove;
mod save;

fn walter() -> CreateUserParam {
    CreateUserParam {
        national_id: 1234567890,
        name: "Walter".to_string(),
        lastname: "White".to_string(),
        dob: "1973-06-12".to_string(),
    }
}
