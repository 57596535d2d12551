use sea_orm::DbErr;

use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, factory};

mod get_display_names;
mod set_admin;
mod upsert;
