mod home;
mod notes;
mod state;
pub mod widgets;

pub use home::HomeView;
pub use notes::NotesView;
pub use state::{ViewError, ViewState, view_state_from_resource};
