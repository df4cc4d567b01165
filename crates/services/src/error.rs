//! Shared error types for the services crate.

use thiserror::Error;

use backend::repository::BackendError;
use backend::HttpInitError;
use notes_core::model::{NoteError, ProgressError};

/// Errors emitted by `NotesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NotesError {
    #[error("no lesson notes exist for this session")]
    NotFound,
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for NotesError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound => Self::NotFound,
            other => Self::Backend(other),
        }
    }
}

/// Errors emitted by `AccessService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccessError {
    #[error("no enrollment for this course")]
    NotEnrolled,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors emitted while creating a checkout session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckoutError {
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Http(#[from] HttpInitError),
}
