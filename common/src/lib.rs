//! Types and helpers shared by the API server and the results client.
//!
//! Nothing in here touches the database, so the client can depend on it
//! without pulling in the persistence stack.

pub mod logger;
pub mod results;
pub mod scoring;

use validator::ValidationErrors;

/// Joins every field-level validation message into a single `; `-separated string.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
