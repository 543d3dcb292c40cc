use crate::server::{data::message::MessageRepository, model::message::MessageFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use entity::message::{MessageKind, MessageStatus};

mod list;
