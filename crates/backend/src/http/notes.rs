use async_trait::async_trait;

use notes_core::model::SessionId;

use super::HttpBackend;
use crate::repository::{BackendError, LessonNoteRecord, NoteRepository};

/// Embedded-join select mirroring the inbound contract: the note row plus
/// its course-session parent.
const NOTE_SELECT: &str = "id,title,summary,insights_content,created_at,\
                           course_session:course_sessions(id,session_number,course_id)";

#[async_trait]
impl NoteRepository for HttpBackend {
    async fn get_note_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<LessonNoteRecord, BackendError> {
        let rows: Vec<LessonNoteRecord> = self
            .get_rows(
                "lesson_notes",
                &[
                    ("select", NOTE_SELECT.to_string()),
                    ("course_session_id", format!("eq.{session_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        rows.into_iter().next().ok_or(BackendError::NotFound)
    }
}
