use colored::*;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 72;

fn status_line(label: &str, name: &str) {
    let msg = format!("{} {}", label, name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(msg.len()));
    print!("{}{} ", msg, dots);
    io::stdout().flush().ok();
}

fn finish(result: Result<(), DbErr>, start: Instant) {
    match result {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
        }
        Err(err) => {
            println!("{} {}", "failed".red(), err);
            std::process::exit(1);
        }
    }
}

/// Applies pending migrations one at a time so each gets its own status line.
/// Applied migrations are recorded, so the API's startup `Migrator::up` is a
/// no-op afterwards.
pub async fn up(db: &DatabaseConnection) {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .unwrap_or_else(|e| {
            eprintln!("{} {}", "Could not read migration state:".red(), e);
            std::process::exit(1);
        });

    if pending.is_empty() {
        println!("Nothing to migrate");
        return;
    }

    for migration in pending {
        status_line("Applying", migration.name());
        let start = Instant::now();
        finish(Migrator::up(db, Some(1)).await, start);
    }
}

/// Rolls back the most recently applied migration.
pub async fn down(db: &DatabaseConnection) {
    let applied = Migrator::get_applied_migrations(db).await.unwrap_or_default();
    let Some(last) = applied.last() else {
        println!("Nothing to roll back");
        return;
    };

    status_line("Reverting", last.name());
    let start = Instant::now();
    finish(Migrator::down(db, Some(1)).await, start);
}

pub async fn status(db: &DatabaseConnection) {
    if let Err(e) = Migrator::status(db).await {
        eprintln!("{} {}", "Could not read migration state:".red(), e);
        std::process::exit(1);
    }
}
