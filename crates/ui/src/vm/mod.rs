//! Pure view-model state for the interactive widgets. Everything here is
//! framework-free and unit-testable; the views bind these to signals.

mod checklist_vm;
mod flashcards_vm;
mod quiz_vm;
mod sections_vm;

pub use checklist_vm::Checklist;
pub use flashcards_vm::FlipDeck;
pub use quiz_vm::{QuestionState, QuizVm};
pub use sections_vm::{ExpandSet, SectionCardVm, TocEntry, section_cards, toc_entries};
