//! View model for one test's results page.
//!
//! A view starts in [`ViewState::Loading`] and is settled exactly once by
//! [`ResultsView::resolve`]. Rows carry the derived percentage and pass/fail
//! flag so rendering never recomputes them.

use crate::error::ClientError;
use common::results::{AttemptResult, TestResults};
use common::scoring::{Grade, PassThreshold};
use std::fmt::Write;

pub const EMPTY_TITLE: &str = "No student has submitted this test yet.";
pub const EMPTY_HINT: &str = "Share the test with your students to get started!";

/// Row ordering. `Submission` is the order the server returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Submission,
    /// Student name, A to Z, ignoring case.
    Name,
    /// Highest percentage first.
    Percentage,
}

/// One attempt ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Index in the server's attempt list.
    pub position: usize,
    pub attempt_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub score: i64,
    pub total_points: i64,
    pub percentage: i64,
    pub passed: bool,
    /// Route of the per-student detail page.
    pub link: String,
}

impl ResultRow {
    pub fn from_attempt(
        test_id: &str,
        position: usize,
        attempt: &AttemptResult,
        threshold: PassThreshold,
    ) -> Self {
        let grade = Grade::new(attempt.score, attempt.total_points, threshold);
        Self {
            position,
            attempt_id: attempt.id,
            student_id: attempt.student.id,
            student_name: attempt.student.name.clone(),
            score: attempt.score,
            total_points: attempt.total_points,
            percentage: grade.percentage,
            passed: grade.passed,
            link: format!("/teacher/results/{}/{}", test_id, attempt.student.id),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.passed { "Passed" } else { "Failed" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMeta {
    pub title: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPage {
    pub meta: TestMeta,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug)]
pub enum ViewState {
    Loading,
    Ready(ResultsPage),
    /// The test exists but nobody has submitted it.
    Empty(TestMeta),
    Failed(ClientError),
}

#[derive(Debug)]
pub struct ResultsView {
    test_id: String,
    threshold: PassThreshold,
    order: SortOrder,
    state: ViewState,
}

impl ResultsView {
    pub fn new(test_id: impl Into<String>, threshold: PassThreshold) -> Self {
        Self {
            test_id: test_id.into(),
            threshold,
            order: SortOrder::default(),
            state: ViewState::Loading,
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ViewState::Failed(_))
    }

    /// Leaves `Loading` for `Ready`, `Empty` or `Failed`. A settled view
    /// ignores later outcomes.
    pub fn resolve(&mut self, outcome: Result<TestResults, ClientError>) {
        if !matches!(self.state, ViewState::Loading) {
            log::warn!("Results view for test {} already settled", self.test_id);
            return;
        }

        self.state = match outcome {
            Err(err) => ViewState::Failed(err),
            Ok(results) => {
                let meta = TestMeta {
                    title: results.test_title,
                    subject: results.test_subject,
                };
                if results.attempts.is_empty() {
                    ViewState::Empty(meta)
                } else {
                    let rows = results
                        .attempts
                        .iter()
                        .enumerate()
                        .map(|(i, a)| ResultRow::from_attempt(&self.test_id, i, a, self.threshold))
                        .collect();
                    ViewState::Ready(ResultsPage { meta, rows })
                }
            }
        };
        self.apply_order();
    }

    /// Re-orders rows. Sorting is stable, so ties keep submission order.
    pub fn sort_by(&mut self, order: SortOrder) {
        self.order = order;
        self.apply_order();
    }

    fn apply_order(&mut self) {
        let ViewState::Ready(page) = &mut self.state else {
            return;
        };
        match self.order {
            SortOrder::Submission => page.rows.sort_by_key(|r| r.position),
            SortOrder::Name => page.rows.sort_by(|a, b| {
                a.student_name
                    .to_lowercase()
                    .cmp(&b.student_name.to_lowercase())
                    .then(a.position.cmp(&b.position))
            }),
            SortOrder::Percentage => page.rows.sort_by(|a, b| {
                b.percentage
                    .cmp(&a.percentage)
                    .then(a.position.cmp(&b.position))
            }),
        }
    }

    pub fn rows(&self) -> &[ResultRow] {
        match &self.state {
            ViewState::Ready(page) => &page.rows,
            _ => &[],
        }
    }

    fn meta(&self) -> Option<&TestMeta> {
        match &self.state {
            ViewState::Ready(page) => Some(&page.meta),
            ViewState::Empty(meta) => Some(meta),
            _ => None,
        }
    }

    fn title(&self) -> Option<&str> {
        self.meta()
            .map(|m| m.title.as_str())
            .filter(|t| !t.is_empty())
    }

    pub fn navbar_title(&self) -> String {
        if matches!(self.state, ViewState::Loading) {
            return "Loading Results...".into();
        }
        match self.title() {
            Some(title) => format!("Results for {title}"),
            None => "Test Results".into(),
        }
    }

    pub fn heading_test_name(&self) -> String {
        if matches!(self.state, ViewState::Loading) {
            return "Loading Test...".into();
        }
        self.title().unwrap_or("Unknown Test").to_owned()
    }

    /// ` ({subject})`, or empty when there is no subject to show.
    pub fn heading_subject(&self) -> String {
        match self.meta().map(|m| m.subject.as_str()) {
            Some(subject) if !subject.is_empty() => format!(" ({subject})"),
            _ => String::new(),
        }
    }

    /// Plain-text rendering of the whole page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.navbar_title());
        let _ = writeln!(
            out,
            "Student Results for \"{}{}\"",
            self.heading_test_name(),
            self.heading_subject()
        );
        out.push('\n');

        match &self.state {
            ViewState::Loading => out.push_str("Loading student results...\n"),
            ViewState::Empty(_) => {
                let _ = writeln!(out, "{EMPTY_TITLE}");
                let _ = writeln!(out, "{EMPTY_HINT}");
            }
            ViewState::Failed(err) => {
                let _ = writeln!(out, "Could not load results: {err}");
            }
            ViewState::Ready(page) => {
                let name_width = page
                    .rows
                    .iter()
                    .map(|r| r.student_name.chars().count())
                    .max()
                    .unwrap_or(0);
                for row in &page.rows {
                    let _ = writeln!(
                        out,
                        "{:<name_width$}  Score: {} / {}  {}% ({})  {}",
                        row.student_name,
                        row.score,
                        row.total_points,
                        row.percentage,
                        row.status_label(),
                        row.link,
                    );
                }
            }
        }
        out
    }
}
