//! Result query: one test's metadata plus every attempt submitted for it.

use common::results::{AttemptResult, StudentRef, TestResults};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::models::{attempt, test, user};

#[derive(Debug, thiserror::Error)]
pub enum ResultQueryError {
    #[error("Test {0} not found")]
    NotFound(i64),

    /// The store could not be reached or the query failed. Not retried.
    #[error("Database error: {0}")]
    Store(#[from] DbErr),
}

fn to_attempt_result(attempt: attempt::Model, student: Option<user::Model>) -> AttemptResult {
    let student = match student {
        Some(s) => StudentRef { id: s.id, name: s.name },
        None => {
            tracing::warn!(
                attempt_id = attempt.id,
                student_id = attempt.student_id,
                "Attempt references a missing student"
            );
            StudentRef {
                id: attempt.student_id,
                name: "Unknown student".into(),
            }
        }
    };

    AttemptResult {
        id: attempt.id,
        test_id: Some(attempt.test_id),
        score: attempt.score,
        total_points: attempt.total_points,
        submitted_at: Some(attempt.submitted_at),
        student,
    }
}

/// Loads the test and its attempts, joining each attempt with its student.
///
/// Attempts come back in submission order. A test without attempts yields an
/// empty list, not an error.
pub async fn get_test_results(
    db: &DatabaseConnection,
    test_id: i64,
) -> Result<TestResults, ResultQueryError> {
    let test = test::Entity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or(ResultQueryError::NotFound(test_id))?;

    let rows = attempt::Entity::find()
        .filter(attempt::Column::TestId.eq(test_id))
        .find_also_related(user::Entity)
        .order_by_asc(attempt::Column::Id)
        .all(db)
        .await?;

    Ok(TestResults {
        test_title: test.title,
        test_subject: test.subject,
        attempts: rows
            .into_iter()
            .map(|(attempt, student)| to_attempt_result(attempt, student))
            .collect(),
    })
}
