//! Startup seeding of the permission catalog and the first administrator.
//!
//! Every step is idempotent, so this runs on every boot after migrations.

use domain::models::ADMIN_ROLE_NAME;
use domain::services::capability_catalog;
use persistence::repositories::{
    NewUser, PermissionRepository, ReferenceError, RolePermissionRepository, RoleRepository,
    UserRepository,
};
use shared::password::{hash_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),

    #[error("Bootstrap reference error: {0}")]
    Reference(#[from] ReferenceError),
}

/// What a bootstrap run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub admin_role_id: i64,
    pub permissions_granted: u64,
    pub admin_user_created: bool,
}

/// Seeds the capability catalog, makes sure the `admin` role holds all of
/// it, and creates the configured admin user if no user has that email.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<BootstrapReport, BootstrapError> {
    let permissions = PermissionRepository::new(pool.clone());
    let catalog = capability_catalog();
    let mut names = Vec::with_capacity(catalog.len());
    for capability in &catalog {
        let permission = permissions
            .ensure(&capability.to_string(), &capability.description())
            .await?;
        names.push(permission.permission_name);
    }

    let admin_role = RoleRepository::new(pool.clone())
        .ensure(ADMIN_ROLE_NAME)
        .await?;
    let permissions_granted = RolePermissionRepository::new(pool.clone())
        .grant_by_names(admin_role.role_id, &names)
        .await?;

    if permissions_granted > 0 {
        info!(
            role_id = admin_role.role_id,
            granted = permissions_granted,
            "Granted catalog permissions to admin role"
        );
    }

    let admin_user_created = create_admin_user(pool, config).await?;

    Ok(BootstrapReport {
        admin_role_id: admin_role.role_id,
        permissions_granted,
        admin_user_created,
    })
}

async fn create_admin_user(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<bool, BootstrapError> {
    if config.email.trim().is_empty() {
        return Ok(false);
    }

    if !config.is_configured() {
        warn!("WM__ADMIN__EMAIL is set but WM__ADMIN__PASSWORD is empty - skipping admin user");
        return Ok(false);
    }

    let users = UserRepository::new(pool.clone());
    let email = config.email.trim();

    if users.find_by_email(email).await?.is_some() {
        info!("Bootstrap admin email already exists - skipping admin user");
        return Ok(false);
    }

    let password_hash = hash_password(&config.password)?;
    let user = users
        .create_with_role_name(
            NewUser {
                username: config.username.trim(),
                email,
                phone_no: None,
                address: None,
                password_hash: &password_hash,
            },
            ADMIN_ROLE_NAME,
        )
        .await?;

    info!(user_id = user.user_id, email = %email, "Bootstrap admin user created");
    warn!("Remove WM__ADMIN__PASSWORD from configuration after initial setup");

    Ok(true)
}
