use std::sync::Arc;

use backend::repository::{NoteRepository, ProgressRepository};
use notes_core::Clock;
use notes_core::model::{
    LessonNote, NoteView, QuizResult, QuizScore, Section, SessionId, StudentId,
};
use notes_core::parse::split_sections;

use crate::error::NotesError;

/// A loaded lesson-note document together with its derived sections.
///
/// Sections are recomputed from the document on every load; nothing here
/// is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesData {
    pub note: LessonNote,
    pub sections: Vec<Section>,
}

/// Fetch-and-parse facade for lesson notes, plus the two progress upserts.
/// Owns the clock so timestamps stay deterministic in tests.
#[derive(Clone)]
pub struct NotesService {
    clock: Clock,
    notes: Arc<dyn NoteRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl NotesService {
    #[must_use]
    pub fn new(
        clock: Clock,
        notes: Arc<dyn NoteRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            clock,
            notes,
            progress,
        }
    }

    /// Fetch the note document for a session and split it into sections.
    /// The fetch strictly precedes parsing; there is no partial result.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::NotFound` when the session has no notes, or
    /// other `NotesError` variants on backend/validation failures.
    pub async fn load_notes(&self, session_id: SessionId) -> Result<NotesData, NotesError> {
        let record = self.notes.get_note_for_session(session_id).await?;
        let note = record.into_note()?;
        let sections = split_sections(note.insights_content());
        Ok(NotesData { note, sections })
    }

    /// Upsert the "student opened the notes" marker. Called once per
    /// successful load; the caller owns the once-only guard.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Backend` if the upsert cannot be issued. The
    /// caller is expected to drop the error rather than surface it.
    pub async fn record_view(
        &self,
        session_id: SessionId,
        student_id: StudentId,
    ) -> Result<(), NotesError> {
        let view = NoteView {
            session_id,
            student_id,
            viewed_at: self.clock.now(),
        };
        self.progress.record_view(&view).await?;
        Ok(())
    }

    /// Upsert a completed quiz score. Fire-and-forget relative to the UI:
    /// local quiz state is never rolled back on failure.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Backend` if the upsert cannot be issued.
    pub async fn record_quiz_score(
        &self,
        session_id: SessionId,
        student_id: StudentId,
        score: QuizScore,
    ) -> Result<QuizResult, NotesError> {
        let result = QuizResult {
            session_id,
            student_id,
            score,
            completed_at: self.clock.now(),
        };
        self.progress.record_quiz_result(&result).await?;
        Ok(result)
    }

    /// A previously persisted quiz result, if the student has one.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Backend` on backend failures.
    pub async fn quiz_result(
        &self,
        session_id: SessionId,
        student_id: StudentId,
    ) -> Result<Option<QuizResult>, NotesError> {
        Ok(self.progress.get_quiz_result(session_id, student_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::repository::{CourseSessionRecord, InMemoryBackend, LessonNoteRecord};
    use notes_core::model::{CourseId, NoteId, SectionKind};
    use notes_core::time::{fixed_clock, fixed_now};

    fn seeded(session_id: SessionId, content: &str) -> InMemoryBackend {
        let repo = InMemoryBackend::new();
        repo.insert_note(LessonNoteRecord {
            id: NoteId::random(),
            title: "Session 2: Salah".to_string(),
            summary: Some("Pillars of prayer".to_string()),
            insights_content: content.to_string(),
            created_at: fixed_now(),
            course_session: CourseSessionRecord {
                id: session_id,
                session_number: 2,
                course_id: CourseId::random(),
            },
        });
        repo
    }

    fn service(repo: &InMemoryBackend) -> NotesService {
        NotesService::new(fixed_clock(), Arc::new(repo.clone()), Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn load_notes_fetches_then_splits() {
        let session_id = SessionId::random();
        let repo = seeded(session_id, "## Quiz\n**Q1.** X?\n- A) y\n**Answer:** A");
        let data = service(&repo).load_notes(session_id).await.unwrap();

        assert_eq!(data.note.title(), "Session 2: Salah");
        assert_eq!(data.sections.len(), 1);
        assert_eq!(data.sections[0].kind, SectionKind::Quiz);
    }

    #[tokio::test]
    async fn missing_session_maps_to_not_found() {
        let repo = InMemoryBackend::new();
        let err = service(&repo)
            .load_notes(SessionId::random())
            .await
            .unwrap_err();
        assert!(matches!(err, NotesError::NotFound));
    }

    #[tokio::test]
    async fn record_view_stamps_the_clock() {
        let session_id = SessionId::random();
        let repo = seeded(session_id, "");
        let student_id = StudentId::random();

        service(&repo)
            .record_view(session_id, student_id)
            .await
            .unwrap();
        assert_eq!(repo.view_count(), 1);
    }

    #[tokio::test]
    async fn quiz_score_round_trips() {
        let session_id = SessionId::random();
        let repo = seeded(session_id, "");
        let student_id = StudentId::random();
        let svc = service(&repo);

        let score = QuizScore::from_counts(3, 4).unwrap();
        let recorded = svc
            .record_quiz_score(session_id, student_id, score)
            .await
            .unwrap();
        assert_eq!(recorded.completed_at, fixed_now());

        let fetched = svc.quiz_result(session_id, student_id).await.unwrap();
        assert_eq!(fetched, Some(recorded));
    }
}
