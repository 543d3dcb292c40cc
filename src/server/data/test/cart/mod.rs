use crate::server::{data::cart::CartRepository, model::cart::OwnerKey};
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use entity::cart::CartStatus;

mod abandon_older_than;
mod get_or_create;
mod items;
