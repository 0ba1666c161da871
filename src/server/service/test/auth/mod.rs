use crate::server::{
    error::{auth::AuthError, AppError},
    service::{
        auth::{AuthService, SignupParams},
        token::TokenService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod refresh;

fn tokens() -> TokenService {
    TokenService::new("service-test-secret", 15, 30)
}
