use ::common::scoring::{Grade, PassThreshold};
use db::grading::{Answer, StudentAttempt};
use db::models::attempt::Model as AttemptModel;
use serde::{Deserialize, Serialize};
use util::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTestRequest {
    pub student_id: i64,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

pub fn pass_threshold(app_state: &AppState) -> PassThreshold {
    PassThreshold::new(app_state.pass_threshold())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTestResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub score: i64,
    pub total_points: i64,
    pub percentage: i64,
    pub passed: bool,
}

impl SubmitTestResponse {
    pub fn new(attempt: &AttemptModel, threshold: PassThreshold) -> Self {
        let grade = Grade::new(attempt.score, attempt.total_points, threshold);
        Self {
            id: attempt.id,
            score: attempt.score,
            total_points: attempt.total_points,
            percentage: grade.percentage,
            passed: grade.passed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttemptResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub test_id: i64,
    pub test_title: String,
    pub test_subject: String,
    pub score: i64,
    pub total_points: i64,
    pub percentage: i64,
    pub passed: bool,
    pub submitted_at: String,
}

impl StudentAttemptResponse {
    pub fn new(row: StudentAttempt, threshold: PassThreshold) -> Self {
        let StudentAttempt {
            attempt,
            test_title,
            test_subject,
        } = row;
        let grade = Grade::new(attempt.score, attempt.total_points, threshold);
        Self {
            id: attempt.id,
            test_id: attempt.test_id,
            test_title,
            test_subject,
            score: attempt.score,
            total_points: attempt.total_points,
            percentage: grade.percentage,
            passed: grade.passed,
            submitted_at: attempt.submitted_at.to_rfc3339(),
        }
    }
}
