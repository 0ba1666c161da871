use crate::server::{
    error::{auth::AuthError, AppError},
    model::profile::Profile,
    service::profile::{CreateStudentParams, ProfileService, UpdateStudentParams},
};
use test_utils::{builder::TestBuilder, factory};

mod get_view;
mod managed_student;

fn profile(entity: entity::profile::Model) -> Profile {
    Profile::from_entity(entity).unwrap()
}

fn student_params(email: &str) -> CreateStudentParams {
    CreateStudentParams {
        email: email.to_string(),
        password: "reading-time".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Reader".to_string(),
    }
}
