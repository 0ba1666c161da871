use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::profile::ProfileRepository,
    error::AppError,
    model::profile::{CreateProfileParams, Role},
    service::password::{hash_password, normalize_email, validate_password},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the first super-admin from configuration if none exists yet.
///
/// Does nothing when `SUPER_ADMIN_EMAIL`/`SUPER_ADMIN_PASSWORD` are unset or a super-admin
/// is already present.
pub async fn bootstrap_super_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = ProfileRepository::new(db);

    let Some(bootstrap) = &config.super_admin else {
        return Ok(());
    };

    if repo.super_admin_exists().await? {
        return Ok(());
    }

    let email = normalize_email(&bootstrap.email)?;
    validate_password(&bootstrap.password)?;

    if repo.find_by_email(&email).await?.is_some() {
        tracing::warn!(
            "Cannot bootstrap super-admin: {} is already registered with another role",
            email
        );
        return Ok(());
    }

    let profile = repo
        .create(CreateProfileParams {
            email,
            password_hash: hash_password(&bootstrap.password)?,
            role: Role::SuperAdmin,
            first_name: "Super".to_string(),
            last_name: "Admin".to_string(),
            admin_id: None,
        })
        .await?;

    tracing::info!("Created super-admin {} ({})", profile.id, profile.email);

    Ok(())
}
