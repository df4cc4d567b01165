#![forbid(unsafe_code)]

pub mod access_service;
pub mod app_services;
pub mod audio_service;
pub mod error;
pub mod notes_service;

pub use notes_core::Clock;

pub use access_service::{AccessService, CourseAccess};
pub use app_services::AppServices;
pub use audio_service::{AudioChannelService, AudioLease};
pub use error::{AccessError, AppServicesError, CheckoutError, NotesError};
pub use notes_service::{NotesData, NotesService};
