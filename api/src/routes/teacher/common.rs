use db::authoring::{QuestionDraft, TestDraft, TestSummary, TestWithQuestions};
use db::models::question::Model as QuestionModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestRequest {
    pub teacher_id: i64,

    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "A test needs at least one question"))]
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTestRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    #[validate(length(min = 1, message = "A test needs at least one question"))]
    pub questions: Vec<QuestionDraft>,
}

impl From<CreateTestRequest> for TestDraft {
    fn from(req: CreateTestRequest) -> Self {
        Self {
            title: req.title,
            subject: req.subject,
            questions: req.questions,
        }
    }
}

impl From<UpdateTestRequest> for TestDraft {
    fn from(req: UpdateTestRequest) -> Self {
        Self {
            title: req.title,
            subject: req.subject,
            questions: req.questions,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub text: String,
    pub options: Vec<String>,
    /// Hidden from students taking the test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<i64>,
    pub points: i64,
}

impl QuestionResponse {
    pub fn with_answer(q: QuestionModel) -> Self {
        let correct = q.correct_option;
        Self {
            correct_option: Some(correct),
            ..Self::without_answer(q)
        }
    }

    pub fn without_answer(q: QuestionModel) -> Self {
        Self {
            id: q.id,
            options: q.option_labels(),
            text: q.text,
            correct_option: None,
            points: q.points,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub subject: String,
    pub total_points: i64,
    pub created_at: String,
    pub updated_at: String,
    pub questions: Vec<QuestionResponse>,
}

impl TestResponse {
    /// `reveal_answers` decides whether `correctOption` is included.
    pub fn new(full: TestWithQuestions, reveal_answers: bool) -> Self {
        let TestWithQuestions { test, questions } = full;
        Self {
            id: test.id,
            teacher_id: test.teacher_id,
            title: test.title,
            subject: test.subject,
            total_points: test.total_points,
            created_at: test.created_at.to_rfc3339(),
            updated_at: test.updated_at.to_rfc3339(),
            questions: questions
                .into_iter()
                .map(|q| {
                    if reveal_answers {
                        QuestionResponse::with_answer(q)
                    } else {
                        QuestionResponse::without_answer(q)
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummaryResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub teacher_id: i64,
    pub title: String,
    pub subject: String,
    pub total_points: i64,
    pub question_count: i64,
    pub attempt_count: i64,
    pub created_at: String,
}

impl From<TestSummary> for TestSummaryResponse {
    fn from(summary: TestSummary) -> Self {
        Self {
            id: summary.test.id,
            teacher_id: summary.test.teacher_id,
            title: summary.test.title,
            subject: summary.test.subject,
            total_points: summary.test.total_points,
            question_count: summary.question_count,
            attempt_count: summary.attempt_count,
            created_at: summary.test.created_at.to_rfc3339(),
        }
    }
}
