use crate::server::data::product::ProductRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod availability;
mod decrement_stock;
