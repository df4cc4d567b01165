mod enrollment;
mod ids;
mod note;
mod progress;
mod records;
mod section;

pub use enrollment::{Enrollment, StudentRole};
pub use ids::{CourseId, NoteId, ParseIdError, SessionId, StudentId};
pub use note::{LessonNote, NoteError};
pub use progress::{NoteView, ProgressError, QuizResult, QuizScore};
pub use records::{
    ActionItem, Hadith, PreparationNote, QuizOption, QuizQuestion, Story, Takeaway, Theme, Verse,
    VocabWord,
};
pub use section::{Presentation, Section, SectionKind, slugify};
