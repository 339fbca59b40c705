//! Application state shared by every axum handler through `State<AppState>`.
//!
//! Holds the pooled database connection and the pass mark graded responses
//! are computed against. Nothing in here is mutated after startup.

use crate::config;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pass_threshold: u32,
}

impl AppState {
    /// Wraps an open connection; the pass mark comes from `PASS_THRESHOLD`.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            pass_threshold: config::pass_threshold(),
        }
    }

    /// Overrides the configured pass mark (percent, capped at 100).
    pub fn with_pass_threshold(mut self, percent: u32) -> Self {
        self.pass_threshold = percent.min(100);
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }
}
