use thiserror::Error;

use crate::model::{NoteError, ProgressError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Note(#[from] NoteError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
