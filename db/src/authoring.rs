//! Teacher-side test management: create, edit, list, delete.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::models::{attempt, question, test, user};

/// A question as typed in by the teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
    pub points: i64,
}

/// Full content of a test, used both for creation and for edits.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDraft {
    pub title: String,
    pub subject: String,
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Clone)]
pub struct TestWithQuestions {
    pub test: test::Model,
    /// Ordered by `position`.
    pub questions: Vec<question::Model>,
}

#[derive(Debug, Clone)]
pub struct TestSummary {
    pub test: test::Model,
    pub question_count: i64,
    pub attempt_count: i64,
}

impl TestDraft {
    /// Sum of question points, `None` when it does not fit in an `i64`.
    pub fn checked_total_points(&self) -> Option<i64> {
        self.questions
            .iter()
            .try_fold(0i64, |acc, q| acc.checked_add(q.points))
    }

    pub fn total_points(&self) -> i64 {
        self.checked_total_points().unwrap_or(i64::MAX)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Invalid("Title is required".into()));
        }
        if self.subject.trim().is_empty() {
            return Err(DomainError::Invalid("Subject is required".into()));
        }
        if self.questions.is_empty() {
            return Err(DomainError::Invalid(
                "A test needs at least one question".into(),
            ));
        }

        for (i, q) in self.questions.iter().enumerate() {
            let n = i + 1;
            if q.text.trim().is_empty() {
                return Err(DomainError::Invalid(format!("Question {n} has no text")));
            }
            if q.options.len() < 2 {
                return Err(DomainError::Invalid(format!(
                    "Question {n} needs at least two options"
                )));
            }
            if q.options.iter().any(|o| o.trim().is_empty()) {
                return Err(DomainError::Invalid(format!(
                    "Question {n} has an empty option"
                )));
            }
            if q.correct_option < 0 || q.correct_option as usize >= q.options.len() {
                return Err(DomainError::Invalid(format!(
                    "Question {n} has no valid correct option"
                )));
            }
            if q.points < 0 {
                return Err(DomainError::Invalid(format!(
                    "Question {n} cannot have negative points"
                )));
            }
        }

        if self.checked_total_points().is_none() {
            return Err(DomainError::Invalid("Total points too large".into()));
        }

        Ok(())
    }
}

async fn insert_questions<C: ConnectionTrait>(
    conn: &C,
    test_id: i64,
    drafts: &[QuestionDraft],
) -> Result<Vec<question::Model>, DomainError> {
    let mut inserted = Vec::with_capacity(drafts.len());
    for (position, draft) in drafts.iter().enumerate() {
        let model = question::ActiveModel {
            test_id: Set(test_id),
            position: Set(position as i64),
            text: Set(draft.text.trim().to_owned()),
            options: Set(serde_json::json!(draft.options)),
            correct_option: Set(draft.correct_option),
            points: Set(draft.points),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(model);
    }
    Ok(inserted)
}

async fn find_teacher(db: &DatabaseConnection, teacher_id: i64) -> Result<user::Model, DomainError> {
    let teacher = user::Entity::find_by_id(teacher_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Teacher"))?;

    if !teacher.is_teacher() {
        return Err(DomainError::Invalid(format!(
            "User {teacher_id} is not a teacher"
        )));
    }
    Ok(teacher)
}

/// Creates a test and its questions in one transaction.
pub async fn create_test(
    db: &DatabaseConnection,
    teacher_id: i64,
    draft: TestDraft,
) -> Result<TestWithQuestions, DomainError> {
    draft.validate()?;
    find_teacher(db, teacher_id).await?;

    let now = Utc::now();
    let txn = db.begin().await?;

    let test = test::ActiveModel {
        teacher_id: Set(teacher_id),
        title: Set(draft.title.trim().to_owned()),
        subject: Set(draft.subject.trim().to_owned()),
        total_points: Set(draft.total_points()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let questions = insert_questions(&txn, test.id, &draft.questions).await?;
    txn.commit().await?;

    tracing::info!(test_id = test.id, teacher_id, "Test created");
    Ok(TestWithQuestions { test, questions })
}

/// Replaces the title, subject and questions of an existing test.
///
/// Existing attempts keep the score and total they were submitted with.
pub async fn update_test(
    db: &DatabaseConnection,
    test_id: i64,
    draft: TestDraft,
) -> Result<TestWithQuestions, DomainError> {
    draft.validate()?;

    let existing = test::Entity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Test"))?;

    let txn = db.begin().await?;

    let mut active = existing.into_active_model();
    active.title = Set(draft.title.trim().to_owned());
    active.subject = Set(draft.subject.trim().to_owned());
    active.total_points = Set(draft.total_points());
    active.updated_at = Set(Utc::now());
    let test = active.update(&txn).await?;

    question::Entity::delete_many()
        .filter(question::Column::TestId.eq(test_id))
        .exec(&txn)
        .await?;
    let questions = insert_questions(&txn, test_id, &draft.questions).await?;
    txn.commit().await?;

    tracing::info!(test_id, "Test updated");
    Ok(TestWithQuestions { test, questions })
}

/// Deletes a test together with its questions and attempts.
pub async fn delete_test(db: &DatabaseConnection, test_id: i64) -> Result<(), DomainError> {
    let txn = db.begin().await?;

    let attempts = attempt::Entity::delete_many()
        .filter(attempt::Column::TestId.eq(test_id))
        .exec(&txn)
        .await?;
    question::Entity::delete_many()
        .filter(question::Column::TestId.eq(test_id))
        .exec(&txn)
        .await?;
    let deleted = test::Entity::delete_by_id(test_id).exec(&txn).await?;

    if deleted.rows_affected == 0 {
        txn.rollback().await?;
        return Err(DomainError::NotFound("Test"));
    }
    txn.commit().await?;

    tracing::info!(
        test_id,
        attempts_removed = attempts.rows_affected,
        "Test deleted"
    );
    Ok(())
}

pub async fn get_test(
    db: &DatabaseConnection,
    test_id: i64,
) -> Result<TestWithQuestions, DomainError> {
    let test = test::Entity::find_by_id(test_id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound("Test"))?;

    let questions = question::Entity::find()
        .filter(question::Column::TestId.eq(test_id))
        .order_by_asc(question::Column::Position)
        .all(db)
        .await?;

    Ok(TestWithQuestions { test, questions })
}

async fn summarize(
    db: &DatabaseConnection,
    tests: Vec<test::Model>,
) -> Result<Vec<TestSummary>, DomainError> {
    let ids: Vec<i64> = tests.iter().map(|t| t.id).collect();

    let question_counts: HashMap<i64, i64> = question::Entity::find()
        .select_only()
        .column(question::Column::TestId)
        .column_as(Expr::col((question::Entity, question::Column::Id)).count(), "count")
        .filter(question::Column::TestId.is_in(ids.clone()))
        .group_by(question::Column::TestId)
        .into_tuple::<(i64, i64)>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    let attempt_counts: HashMap<i64, i64> = attempt::Entity::find()
        .select_only()
        .column(attempt::Column::TestId)
        .column_as(Expr::col((attempt::Entity, attempt::Column::Id)).count(), "count")
        .filter(attempt::Column::TestId.is_in(ids))
        .group_by(attempt::Column::TestId)
        .into_tuple::<(i64, i64)>()
        .all(db)
        .await?
        .into_iter()
        .collect();

    Ok(tests
        .into_iter()
        .map(|test| TestSummary {
            question_count: question_counts.get(&test.id).copied().unwrap_or(0),
            attempt_count: attempt_counts.get(&test.id).copied().unwrap_or(0),
            test,
        })
        .collect())
}

/// Every test, newest first.
pub async fn list_tests(db: &DatabaseConnection) -> Result<Vec<TestSummary>, DomainError> {
    let tests = test::Entity::find()
        .order_by_desc(test::Column::CreatedAt)
        .order_by_desc(test::Column::Id)
        .all(db)
        .await?;
    summarize(db, tests).await
}

/// Tests authored by `teacher_id`, newest first.
pub async fn list_teacher_tests(
    db: &DatabaseConnection,
    teacher_id: i64,
) -> Result<Vec<TestSummary>, DomainError> {
    find_teacher(db, teacher_id).await?;

    let tests = test::Entity::find()
        .filter(test::Column::TeacherId.eq(teacher_id))
        .order_by_desc(test::Column::CreatedAt)
        .order_by_desc(test::Column::Id)
        .all(db)
        .await?;
    summarize(db, tests).await
}
