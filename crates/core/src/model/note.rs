use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{CourseId, NoteId, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoteError {
    #[error("note title is empty")]
    EmptyTitle,

    #[error("session_number must be at least 1, got {0}")]
    InvalidSessionNumber(u32),
}

/// AI-generated study notes for one course session.
///
/// The document body (`insights_content`) is one opaque long-form text blob
/// owned by the backend; the client fetches it read-only and derives
/// [`Section`](crate::model::Section)s from it on every render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNote {
    id: NoteId,
    session_id: SessionId,
    course_id: CourseId,
    session_number: u32,
    title: String,
    summary: Option<String>,
    insights_content: String,
    created_at: DateTime<Utc>,
}

impl LessonNote {
    /// Build a lesson note from backend data.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::EmptyTitle` if the title is blank and
    /// `NoteError::InvalidSessionNumber` if the session number is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: NoteId,
        session_id: SessionId,
        course_id: CourseId,
        session_number: u32,
        title: impl Into<String>,
        summary: Option<String>,
        insights_content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, NoteError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(NoteError::EmptyTitle);
        }
        if session_number == 0 {
            return Err(NoteError::InvalidSessionNumber(session_number));
        }

        Ok(Self {
            id,
            session_id,
            course_id,
            session_number,
            title,
            summary: summary.filter(|s| !s.trim().is_empty()),
            insights_content: insights_content.into(),
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> NoteId {
        self.id
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// 1-based position of the session inside its course. Session 1 is
    /// always free under the paywall gate.
    #[must_use]
    pub fn session_number(&self) -> u32 {
        self.session_number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn insights_content(&self) -> &str {
        &self.insights_content
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn blank_title_is_rejected() {
        let err = LessonNote::new(
            NoteId::random(),
            SessionId::random(),
            CourseId::random(),
            1,
            "   ",
            None,
            "body",
            fixed_now(),
        )
        .unwrap_err();
        assert_eq!(err, NoteError::EmptyTitle);
    }

    #[test]
    fn session_number_zero_is_rejected() {
        let err = LessonNote::new(
            NoteId::random(),
            SessionId::random(),
            CourseId::random(),
            0,
            "Tafsir of Surah al-Fatiha",
            None,
            "body",
            fixed_now(),
        )
        .unwrap_err();
        assert_eq!(err, NoteError::InvalidSessionNumber(0));
    }

    #[test]
    fn empty_summary_normalizes_to_none() {
        let note = LessonNote::new(
            NoteId::random(),
            SessionId::random(),
            CourseId::random(),
            2,
            "Session 2",
            Some("  ".to_string()),
            "body",
            fixed_now(),
        )
        .unwrap();
        assert_eq!(note.summary(), None);
    }
}
