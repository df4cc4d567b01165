use std::sync::Arc;

use notes_core::model::StudentId;
use services::{AccessService, AudioChannelService, NotesService};

/// What the UI needs from the composition root: the signed-in student and
/// the service facades.
pub trait UiApp: Send + Sync {
    fn student_id(&self) -> StudentId;

    fn notes(&self) -> Arc<NotesService>;
    fn access(&self) -> Arc<AccessService>;
    fn audio(&self) -> Arc<AudioChannelService>;
}

#[derive(Clone)]
pub struct AppContext {
    student_id: StudentId,

    notes: Arc<NotesService>,
    access: Arc<AccessService>,
    audio: Arc<AudioChannelService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            student_id: app.student_id(),
            notes: app.notes(),
            access: app.access(),
            audio: app.audio(),
        }
    }

    #[must_use]
    pub fn student_id(&self) -> StudentId {
        self.student_id
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
