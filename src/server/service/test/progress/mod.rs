use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        profile::Profile,
        progress::{SubmitParagraphParams, UpdateProgressParams},
    },
    service::progress::ProgressService,
};
use test_utils::{builder::TestBuilder, factory};

mod activity;
mod start;
mod update;

fn profile(entity: entity::profile::Model) -> Profile {
    Profile::from_entity(entity).unwrap()
}

fn submission(student_id: i32, module_id: i32, paragraph_index: i32) -> SubmitParagraphParams {
    SubmitParagraphParams {
        student_id,
        module_id,
        paragraph_index,
        paragraph_summary: format!("Paragraph {} in my words", paragraph_index),
        cumulative_summary: format!("Everything up to paragraph {}", paragraph_index),
    }
}
