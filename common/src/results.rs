//! Wire shape of `GET /api/results/test/{testId}`.
//!
//! ```json
//! {
//!   "testTitle": "Fractions",
//!   "testSubject": "Maths",
//!   "attempts": [
//!     {
//!       "_id": 4,
//!       "testId": 2,
//!       "score": 30,
//!       "totalPoints": 50,
//!       "submittedAt": "2025-05-23T18:00:00Z",
//!       "studentId": { "_id": 9, "name": "Thandi" }
//!     }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Test metadata bundled with every attempt submitted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResults {
    pub test_title: String,
    pub test_subject: String,
    pub attempts: Vec<AttemptResult>,
}

/// One student's submission with its score snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResult {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,
    pub score: i64,
    /// Points available when the attempt was submitted, not the test's current total.
    pub total_points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(rename = "studentId")]
    pub student: StudentRef,
}

/// The submitting student, joined in at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
}
