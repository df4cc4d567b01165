use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use notes_core::model::{
    CourseId, Enrollment, LessonNote, NoteError, NoteId, NoteView, QuizResult, SessionId,
    StudentId, StudentRole,
};

/// Errors surfaced by backend adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Wire shape of a lesson-note row as the backend returns it, with the
/// course-session join embedded. `insights_content` is the only field the
/// parsing pipeline reads; the rest is page chrome and gating input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonNoteRecord {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub insights_content: String,
    pub created_at: DateTime<Utc>,
    pub course_session: CourseSessionRecord,
}

/// Embedded course-session join on a lesson-note row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSessionRecord {
    pub id: SessionId,
    pub session_number: u32,
    pub course_id: CourseId,
}

impl LessonNoteRecord {
    /// Convert the wire record into the domain `LessonNote`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError` when the record fails domain validation.
    pub fn into_note(self) -> Result<LessonNote, NoteError> {
        LessonNote::new(
            self.id,
            self.course_session.id,
            self.course_session.course_id,
            self.course_session.session_number,
            self.title,
            self.summary,
            self.insights_content,
            self.created_at,
        )
    }
}

/// A checkout session created by the payment collaborator. The client only
/// redirects the browser to `url`; payment logic lives entirely upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
}

/// Read access to lesson-note documents.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch the note document for a course session.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` when no notes exist for the
    /// session, or other backend errors.
    async fn get_note_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<LessonNoteRecord, BackendError>;
}

/// Upsert access to per-student progress rows, keyed by
/// `(session_id, student_id)` with last-write-wins semantics.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Record that the student opened the notes.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the upsert cannot be issued.
    async fn record_view(&self, view: &NoteView) -> Result<(), BackendError>;

    /// Record a completed quiz.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the upsert cannot be issued.
    async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), BackendError>;

    /// Fetch a previously recorded quiz result, if any.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on backend failures; a missing row is
    /// `Ok(None)`, not an error.
    async fn get_quiz_result(
        &self,
        session_id: SessionId,
        student_id: StudentId,
    ) -> Result<Option<QuizResult>, BackendError>;
}

/// Course membership lookups.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Fetch the student's enrollment in a course, if any.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on backend failures.
    async fn enrollment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<Option<Enrollment>, BackendError>;
}

/// Payment state lookups plus checkout-session creation.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// True when the student holds a completed-payment record for the course.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on backend failures.
    async fn has_completed_payment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<bool, BackendError>;

    /// Course price in pounds sterling, as shown on the paywall card.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::NotFound` when the course has no price.
    async fn course_price_pounds(&self, course_id: CourseId) -> Result<u32, BackendError>;

    /// Create a checkout session and return the external redirect URL.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the collaborator refuses.
    async fn create_checkout_session(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<CheckoutSession, BackendError>;
}

/// In-memory backend for tests and the `demo` subcommand.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    notes: Arc<Mutex<HashMap<SessionId, LessonNoteRecord>>>,
    views: Arc<Mutex<HashMap<(SessionId, StudentId), NoteView>>>,
    quiz_results: Arc<Mutex<HashMap<(SessionId, StudentId), QuizResult>>>,
    enrollments: Arc<Mutex<HashMap<(CourseId, StudentId), StudentRole>>>,
    payments: Arc<Mutex<HashMap<(CourseId, StudentId), ()>>>,
    prices: Arc<Mutex<HashMap<CourseId, u32>>>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a note document, replacing any existing one for the session.
    pub fn insert_note(&self, record: LessonNoteRecord) {
        seed_lock(&self.notes).insert(record.course_session.id, record);
    }

    pub fn insert_enrollment(&self, course_id: CourseId, student_id: StudentId, role: StudentRole) {
        seed_lock(&self.enrollments).insert((course_id, student_id), role);
    }

    pub fn mark_paid(&self, course_id: CourseId, student_id: StudentId) {
        seed_lock(&self.payments).insert((course_id, student_id), ());
    }

    pub fn set_price(&self, course_id: CourseId, pounds: u32) {
        seed_lock(&self.prices).insert(course_id, pounds);
    }

    /// Number of recorded views, for test assertions.
    #[must_use]
    pub fn view_count(&self) -> usize {
        seed_lock(&self.views).len()
    }
}

// Seeding is test/demo-only setup; a poisoned lock just hands back the data.
fn seed_lock<T>(mutex: &Arc<Mutex<T>>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn lock<'a, T>(
    mutex: &'a Arc<Mutex<T>>,
    what: &str,
) -> Result<std::sync::MutexGuard<'a, T>, BackendError> {
    mutex
        .lock()
        .map_err(|e| BackendError::Connection(format!("{what}: {e}")))
}

#[async_trait]
impl NoteRepository for InMemoryBackend {
    async fn get_note_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<LessonNoteRecord, BackendError> {
        let guard = lock(&self.notes, "notes")?;
        guard.get(&session_id).cloned().ok_or(BackendError::NotFound)
    }
}

#[async_trait]
impl ProgressRepository for InMemoryBackend {
    async fn record_view(&self, view: &NoteView) -> Result<(), BackendError> {
        let mut guard = lock(&self.views, "views")?;
        guard.insert((view.session_id, view.student_id), view.clone());
        Ok(())
    }

    async fn record_quiz_result(&self, result: &QuizResult) -> Result<(), BackendError> {
        let mut guard = lock(&self.quiz_results, "quiz_results")?;
        guard.insert((result.session_id, result.student_id), result.clone());
        Ok(())
    }

    async fn get_quiz_result(
        &self,
        session_id: SessionId,
        student_id: StudentId,
    ) -> Result<Option<QuizResult>, BackendError> {
        let guard = lock(&self.quiz_results, "quiz_results")?;
        Ok(guard.get(&(session_id, student_id)).cloned())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryBackend {
    async fn enrollment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<Option<Enrollment>, BackendError> {
        let guard = lock(&self.enrollments, "enrollments")?;
        Ok(guard.get(&(course_id, student_id)).map(|role| Enrollment {
            course_id,
            student_id,
            role: *role,
        }))
    }
}

#[async_trait]
impl PaymentRepository for InMemoryBackend {
    async fn has_completed_payment(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<bool, BackendError> {
        let guard = lock(&self.payments, "payments")?;
        Ok(guard.contains_key(&(course_id, student_id)))
    }

    async fn course_price_pounds(&self, course_id: CourseId) -> Result<u32, BackendError> {
        let guard = lock(&self.prices, "prices")?;
        guard.get(&course_id).copied().ok_or(BackendError::NotFound)
    }

    async fn create_checkout_session(
        &self,
        course_id: CourseId,
        student_id: StudentId,
    ) -> Result<CheckoutSession, BackendError> {
        Ok(CheckoutSession {
            url: format!("https://checkout.invalid/{course_id}/{student_id}"),
        })
    }
}

/// Aggregates the backend collaborators behind trait objects so services
/// can swap the HTTP adapter for the in-memory one.
#[derive(Clone)]
pub struct Backend {
    pub notes: Arc<dyn NoteRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub payments: Arc<dyn PaymentRepository>,
}

impl Backend {
    #[must_use]
    pub fn in_memory() -> (Self, InMemoryBackend) {
        let repo = InMemoryBackend::new();
        let backend = Self {
            notes: Arc::new(repo.clone()),
            progress: Arc::new(repo.clone()),
            enrollments: Arc::new(repo.clone()),
            payments: Arc::new(repo.clone()),
        };
        (backend, repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::model::QuizScore;
    use notes_core::time::fixed_now;

    fn sample_record(session_id: SessionId) -> LessonNoteRecord {
        LessonNoteRecord {
            id: NoteId::random(),
            title: "Session 1: Introduction".to_string(),
            summary: None,
            insights_content: "## Key Takeaways\n- Be sincere".to_string(),
            created_at: fixed_now(),
            course_session: CourseSessionRecord {
                id: session_id,
                session_number: 1,
                course_id: CourseId::random(),
            },
        }
    }

    #[tokio::test]
    async fn missing_note_is_not_found() {
        let repo = InMemoryBackend::new();
        let err = repo
            .get_note_for_session(SessionId::random())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::NotFound));
    }

    #[tokio::test]
    async fn quiz_result_upsert_is_last_write_wins() {
        let repo = InMemoryBackend::new();
        let session_id = SessionId::random();
        let student_id = StudentId::random();

        let first = QuizResult {
            session_id,
            student_id,
            score: QuizScore::from_counts(1, 2).unwrap(),
            completed_at: fixed_now(),
        };
        let second = QuizResult {
            score: QuizScore::from_counts(2, 2).unwrap(),
            ..first.clone()
        };

        repo.record_quiz_result(&first).await.unwrap();
        repo.record_quiz_result(&second).await.unwrap();

        let stored = repo
            .get_quiz_result(session_id, student_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.score.percent(), 100);
    }

    #[tokio::test]
    async fn note_record_converts_to_domain_note() {
        let repo = InMemoryBackend::new();
        let session_id = SessionId::random();
        repo.insert_note(sample_record(session_id));

        let note = repo
            .get_note_for_session(session_id)
            .await
            .unwrap()
            .into_note()
            .unwrap();
        assert_eq!(note.session_number(), 1);
        assert!(note.insights_content().contains("Key Takeaways"));
    }
}
