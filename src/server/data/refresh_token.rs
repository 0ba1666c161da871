//! Refresh token repository.
//!
//! Only SHA-256 digests are stored; the opaque token never touches the database.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::auth::{CreateRefreshTokenParams, RefreshToken};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRefreshTokenParams) -> Result<RefreshToken, DbErr> {
        let entity = entity::refresh_token::ActiveModel {
            profile_id: ActiveValue::Set(params.profile_id),
            token_hash: ActiveValue::Set(params.token_hash),
            expires_at: ActiveValue::Set(params.expires_at),
            revoked_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RefreshToken::from_entity(entity))
    }

    pub async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DbErr> {
        let entity = entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await?;

        Ok(entity.map(RefreshToken::from_entity))
    }

    /// Marks a token revoked at `now`. Already revoked tokens keep their first timestamp.
    pub async fn revoke(&self, id: i32, now: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::RefreshToken::update_many()
            .col_expr(
                entity::refresh_token::Column::RevokedAt,
                Expr::value(now),
            )
            .filter(entity::refresh_token::Column::Id.eq(id))
            .filter(entity::refresh_token::Column::RevokedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
