//! Refresh token records.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshToken {
    pub id: i32,
    pub profile_id: i32,
    /// SHA-256 hex digest of the opaque token handed to the client.
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    pub fn from_entity(entity: entity::refresh_token::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            token_hash: entity.token_hash,
            expires_at: entity.expires_at,
            revoked_at: entity.revoked_at,
            created_at: entity.created_at,
        }
    }

    /// Not revoked and not yet expired at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

#[derive(Debug, Clone)]
pub struct CreateRefreshTokenParams {
    pub profile_id: i32,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}
