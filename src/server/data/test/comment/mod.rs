use crate::{
    model::comment::{CommentStatus, CommentType},
    server::{
        data::comment::CommentRepository,
        error::AppError,
        model::{
            comment::{ContentEdit, CreateCommentParams, StatusEdit},
            topic::RootTopic,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod ancestor_chain;
mod count_descendants;
mod create;
mod find_by_ids;
mod find_children;
mod update;
