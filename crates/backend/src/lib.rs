#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::{HttpBackend, HttpBackendConfig, HttpInitError};
pub use repository::{
    Backend, BackendError, CheckoutSession, CourseSessionRecord, EnrollmentRepository,
    InMemoryBackend, LessonNoteRecord, NoteRepository, PaymentRepository, ProgressRepository,
};

use std::sync::Arc;

impl Backend {
    /// Build the full backend aggregate over one HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the client cannot be constructed.
    pub fn http(config: HttpBackendConfig) -> Result<Self, HttpInitError> {
        let client = HttpBackend::connect(config)?;
        Ok(Self {
            notes: Arc::new(client.clone()),
            progress: Arc::new(client.clone()),
            enrollments: Arc::new(client.clone()),
            payments: Arc::new(client),
        })
    }
}
