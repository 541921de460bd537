//! Promote an account to admin by email
//!
//! Usage: `set-admin <email>`
//!
//! When no account exists for the email a placeholder admin is created.
//! Its password hash is not a bcrypt hash, so it cannot log in until a
//! password is set some other way.

use gameswipe::config::Settings;
use gameswipe::models::domain::ROLE_ADMIN;
use gameswipe::services::PostgresClient;
use std::process::ExitCode;

const PLACEHOLDER_HASH: &str = "manual_admin_creation";

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let Some(email) = std::env::args().nth(1).map(|e| e.trim().to_lowercase()) else {
        eprintln!("Usage: set-admin <email>");
        return ExitCode::from(2);
    };

    match run(&email).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to set admin role for {}: {}", email, e);
            ExitCode::FAILURE
        }
    }
}

async fn run(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    let postgres = PostgresClient::from_settings(
        &settings.database.url,
        Some(1),
        Some(1),
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await?;

    match postgres.set_role_by_email(email, ROLE_ADMIN).await? {
        Some(user) => {
            tracing::info!("User {} ({}) is now an admin", user.id, user.email);
        }
        None => {
            let name = email.split('@').next().unwrap_or(email);
            let user = postgres
                .create_user(email, PLACEHOLDER_HASH, name, ROLE_ADMIN)
                .await?;
            tracing::info!("Created admin account {} for {}", user.id, user.email);
        }
    }

    Ok(())
}
