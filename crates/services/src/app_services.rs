use std::sync::Arc;

use backend::repository::{Backend, InMemoryBackend};
use backend::HttpBackendConfig;
use notes_core::Clock;

use crate::access_service::AccessService;
use crate::audio_service::AudioChannelService;
use crate::error::AppServicesError;
use crate::notes_service::NotesService;

/// Assembles the app-facing services over one backend.
#[derive(Clone)]
pub struct AppServices {
    notes: Arc<NotesService>,
    access: Arc<AccessService>,
    audio: Arc<AudioChannelService>,
}

impl AppServices {
    /// Build services over the hosted HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn http(config: HttpBackendConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let backend = Backend::http(config)?;
        Ok(Self::over(backend, clock))
    }

    /// Build services over an in-memory backend, returning the seedable
    /// repository handle alongside.
    #[must_use]
    pub fn in_memory(clock: Clock) -> (Self, InMemoryBackend) {
        let (backend, repo) = Backend::in_memory();
        (Self::over(backend, clock), repo)
    }

    fn over(backend: Backend, clock: Clock) -> Self {
        let notes = Arc::new(NotesService::new(
            clock,
            Arc::clone(&backend.notes),
            Arc::clone(&backend.progress),
        ));
        let access = Arc::new(AccessService::new(
            Arc::clone(&backend.enrollments),
            Arc::clone(&backend.payments),
        ));
        let audio = Arc::new(AudioChannelService::new());

        Self {
            notes,
            access,
            audio,
        }
    }

    #[must_use]
    pub fn notes(&self) -> Arc<NotesService> {
        Arc::clone(&self.notes)
    }

    #[must_use]
    pub fn access(&self) -> Arc<AccessService> {
        Arc::clone(&self.access)
    }

    #[must_use]
    pub fn audio(&self) -> Arc<AudioChannelService> {
        Arc::clone(&self.audio)
    }
}
