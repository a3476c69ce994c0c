//! Migrate command - manual control over the booleans schema.
//!
//! The serve command applies pending migrations on startup; this command
//! exists for operating on the schema without bringing the server up.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without the automatic startup migration so each action below
    // stays explicit
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Could not reach the database: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Booleans schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Rolled back one migration");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for line in status_lines(&status) {
                println!("{}", line);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping and recreating the booleans schema");
            db.fresh_migrations()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Schema recreated from scratch");
        }
    }

    Ok(())
}

/// Render one line per migration plus a trailing summary.
fn status_lines(status: &[(String, bool)]) -> Vec<String> {
    let applied = status.iter().filter(|(_, applied)| *applied).count();

    let mut lines: Vec<String> = status
        .iter()
        .map(|(name, applied)| {
            let marker = if *applied { "applied" } else { "pending" };
            format!("{} [{}]", name, marker)
        })
        .collect();

    lines.push(format!("{}/{} migrations applied", applied, status.len()));
    lines
}
