use crate::{
    model::conversation::BulkAction,
    server::{
        data::conversation::ConversationRepository, error::AppError, model::party::Party,
        service::conversation::ConversationService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod bulk_action;
mod create;
