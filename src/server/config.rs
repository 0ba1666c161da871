use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_TTL_DAYS: i64 = 30;

/// Credentials for the super-admin created at startup when none exists yet.
#[derive(Clone)]
pub struct SuperAdminBootstrap {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Frontend origin, allowed by CORS with credentials.
    pub app_url: String,

    pub jwt_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
    pub cookie_secure: bool,

    pub stripe_webhook_secret: String,

    pub super_admin: Option<SuperAdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let super_admin = match (
            std::env::var("SUPER_ADMIN_EMAIL").ok(),
            std::env::var("SUPER_ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) => Some(SuperAdminBootstrap { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: required("APP_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            access_token_ttl_minutes: parse_or(
                "ACCESS_TOKEN_TTL_MINUTES",
                std::env::var("ACCESS_TOKEN_TTL_MINUTES").ok(),
                DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
            )?,
            refresh_token_ttl_days: parse_or(
                "REFRESH_TOKEN_TTL_DAYS",
                std::env::var("REFRESH_TOKEN_TTL_DAYS").ok(),
                DEFAULT_REFRESH_TOKEN_TTL_DAYS,
            )?,
            cookie_secure: parse_or("COOKIE_SECURE", std::env::var("COOKIE_SECURE").ok(), true)?,
            stripe_webhook_secret: required("STRIPE_WEBHOOK_SECRET")?,
            super_admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
