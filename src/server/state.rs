//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database connection is a pool and the
//! token service holds precomputed keys.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Signs and verifies access tokens.
    pub tokens: TokenService,

    /// Whether the refresh cookie carries the `Secure` attribute.
    pub cookie_secure: bool,

    /// Secret used to verify billing webhook signatures.
    pub stripe_webhook_secret: String,

    /// Frontend origin allowed by CORS.
    pub app_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::from_config(config),
            cookie_secure: config.cookie_secure,
            stripe_webhook_secret: config.stripe_webhook_secret.clone(),
            app_url: config.app_url.clone(),
        }
    }
}
