use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use notes_core::model::{NoteView, QuizResult, QuizScore, SessionId, StudentId};

use super::HttpBackend;
use crate::repository::{BackendError, ProgressRepository};

/// Wire row for the session-progress table. One row per
/// `(course_session_id, student_id)`; the view and the quiz columns are
/// written by separate upserts.
#[derive(Debug, Serialize, Deserialize)]
struct ProgressRow {
    course_session_id: SessionId,
    student_id: StudentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    viewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quiz_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quiz_completed_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl ProgressRepository for HttpBackend {
    async fn record_view(&self, view: &NoteView) -> Result<(), BackendError> {
        let row = ProgressRow {
            course_session_id: view.session_id,
            student_id: view.student_id,
            viewed_at: Some(view.viewed_at),
            quiz_score: None,
            quiz_completed_at: None,
        };
        self.upsert_row("session_progress", &row).await
    }

    async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), BackendError> {
        let row = ProgressRow {
            course_session_id: result.session_id,
            student_id: result.student_id,
            viewed_at: None,
            quiz_score: Some(u32::from(result.score.percent())),
            quiz_completed_at: Some(result.completed_at),
        };
        self.upsert_row("session_progress", &row).await
    }

    async fn get_quiz_result(
        &self,
        session_id: SessionId,
        student_id: StudentId,
    ) -> Result<Option<QuizResult>, BackendError> {
        let rows: Vec<ProgressRow> = self
            .get_rows(
                "session_progress",
                &[
                    ("course_session_id", format!("eq.{session_id}")),
                    ("student_id", format!("eq.{student_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };
        let (Some(score), Some(completed_at)) = (row.quiz_score, row.quiz_completed_at) else {
            return Ok(None);
        };
        let score =
            QuizScore::new(score).map_err(|e| BackendError::Serialization(e.to_string()))?;
        Ok(Some(QuizResult {
            session_id,
            student_id,
            score,
            completed_at,
        }))
    }
}
