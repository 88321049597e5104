use crate::server::data::servant::ServantRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_collection_no;
mod get_all;
