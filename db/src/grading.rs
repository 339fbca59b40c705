//! Student-side submission: scoring answers and recording the attempt.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::{attempt, question, test, user};

/// The option a student picked for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub selected_option: i64,
}

/// Sums the points of correctly answered questions.
///
/// Answers for unknown questions are ignored and only the first answer per
/// question counts, so the result never exceeds the sum of question points.
pub fn score_answers(questions: &[question::Model], answers: &[Answer]) -> i64 {
    let mut chosen: HashMap<i64, i64> = HashMap::with_capacity(answers.len());
    for answer in answers {
        chosen.entry(answer.question_id).or_insert(answer.selected_option);
    }

    questions
        .iter()
        .filter(|q| chosen.get(&q.id) == Some(&q.correct_option))
        .map(|q| q.points)
        .sum()
}

/// An attempt joined with the test it was submitted for.
#[derive(Debug, Clone)]
pub struct StudentAttempt {
    pub attempt: attempt::Model,
    pub test_title: String,
    pub test_subject: String,
}

async fn find_student(db: &DatabaseConnection, student_id: i64) -> Result<user::Model, DomainError> {
    let student = user::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Student"))?;

    if !student.is_student() {
        return Err(DomainError::Invalid(format!(
            "User {student_id} is not a student"
        )));
    }
    Ok(student)
}

fn already_submitted() -> DomainError {
    DomainError::Conflict("Student has already submitted this test".into())
}

/// Grades `answers` and stores the attempt.
///
/// The test's current total is copied onto the attempt. A student gets one
/// attempt per test.
pub async fn submit_attempt(
    db: &DatabaseConnection,
    test_id: i64,
    student_id: i64,
    answers: &[Answer],
) -> Result<attempt::Model, DomainError> {
    let test = test::Entity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Test"))?;
    find_student(db, student_id).await?;

    let existing = attempt::Entity::find()
        .filter(attempt::Column::TestId.eq(test_id))
        .filter(attempt::Column::StudentId.eq(student_id))
        .count(db)
        .await?;
    if existing > 0 {
        return Err(already_submitted());
    }

    let questions = question::Entity::find()
        .filter(question::Column::TestId.eq(test_id))
        .all(db)
        .await?;
    let score = score_answers(&questions, answers);
    let answers_json = serde_json::to_value(answers).map_err(|e| DbErr::Json(e.to_string()))?;

    let inserted = attempt::ActiveModel {
        test_id: Set(test_id),
        student_id: Set(student_id),
        score: Set(score),
        total_points: Set(test.total_points),
        answers: Set(answers_json),
        submitted_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await;

    match inserted {
        Ok(attempt) => {
            tracing::info!(
                attempt_id = attempt.id,
                test_id,
                student_id,
                score,
                total_points = attempt.total_points,
                "Attempt submitted"
            );
            Ok(attempt)
        }
        // Lost a race with a concurrent submission from the same student.
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(already_submitted())
        }
        Err(err) => Err(err.into()),
    }
}

/// Every attempt by `student_id`, oldest first.
pub async fn student_attempts(
    db: &DatabaseConnection,
    student_id: i64,
) -> Result<Vec<StudentAttempt>, DomainError> {
    find_student(db, student_id).await?;

    let rows = attempt::Entity::find()
        .filter(attempt::Column::StudentId.eq(student_id))
        .find_also_related(test::Entity)
        .order_by_asc(attempt::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(attempt, test)| {
            test.map(|t| StudentAttempt {
                attempt,
                test_title: t.title,
                test_subject: t.subject,
            })
        })
        .collect())
}
