use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{SessionId, StudentId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("quiz score {0} is out of range (expected 0..=100)")]
    ScoreOutOfRange(u32),

    #[error("cannot score a quiz with zero questions")]
    NoQuestions,

    #[error("correct count {correct} exceeds question count {total}")]
    CorrectExceedsTotal { correct: usize, total: usize },
}

/// A quiz score as a whole-number percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuizScore(u8);

impl QuizScore {
    /// Validate a persisted percentage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::ScoreOutOfRange` for values above 100.
    pub fn new(percent: u32) -> Result<Self, ProgressError> {
        u8::try_from(percent)
            .ok()
            .filter(|p| *p <= 100)
            .map(Self)
            .ok_or(ProgressError::ScoreOutOfRange(percent))
    }

    /// Score a completed quiz: `round(correct / total * 100)`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::NoQuestions` when `total` is zero and
    /// `ProgressError::CorrectExceedsTotal` when the counts are inconsistent.
    pub fn from_counts(correct: usize, total: usize) -> Result<Self, ProgressError> {
        if total == 0 {
            return Err(ProgressError::NoQuestions);
        }
        if correct > total {
            return Err(ProgressError::CorrectExceedsTotal { correct, total });
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        let percent = ((correct as f64 / total as f64) * 100.0).round() as u8;
        Ok(Self(percent))
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.0
    }
}

/// "Student opened the notes" marker, upserted once per successful load.
/// Keyed by `(session_id, student_id)`; the backend resolves conflicting
/// writes with last-write-wins upsert semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub viewed_at: DateTime<Utc>,
}

/// Completed-quiz record, upserted when the one-shot completion callback
/// fires. Same key and conflict semantics as [`NoteView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub session_id: SessionId,
    pub student_id: StudentId,
    pub score: QuizScore,
    pub completed_at: DateTime<Utc>,
}
