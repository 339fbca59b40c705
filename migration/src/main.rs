//! Schema management for the SQLite file at `DATABASE_PATH`.
//!
//! ```text
//! migration [up]    apply pending migrations
//! migration down    roll back the latest migration
//! migration status  list applied and pending migrations
//! migration fresh   delete the database file, then apply everything
//! migration clean   delete the database file
//! ```

use std::{env, fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let command = env::args().nth(1).unwrap_or_else(|| "up".into());

    match command.as_str() {
        "clean" => remove_db_file(&db_path),
        "fresh" => {
            remove_db_file(&db_path);
            runner::up(&connect(&db_path).await).await;
        }
        "down" => runner::down(&connect(&db_path).await).await,
        "status" => runner::status(&connect(&db_path).await).await,
        "up" => runner::up(&connect(&db_path).await).await,
        other => {
            eprintln!("Unknown command '{other}'. Expected up, down, status, fresh or clean.");
            std::process::exit(2);
        }
    }
}

async fn connect(db_path: &str) -> sea_orm::DatabaseConnection {
    let url = if db_path.starts_with("sqlite:") {
        db_path.to_owned()
    } else {
        if let Some(parent) = Path::new(db_path).parent() {
            fs::create_dir_all(parent).expect("Failed to create DB directory");
        }
        format!("sqlite://{db_path}?mode=rwc")
    };

    sea_orm::Database::connect(&url)
        .await
        .expect("DB connection failed")
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}
