//! The lesson-notes parsing pipeline: a best-effort section splitter plus
//! one micro-parser per section shape.
//!
//! Every parser here is total: malformed content is never an error. A
//! parser that finds no structured records returns an empty list, and
//! [`parse_section`] then falls back to [`ParsedSection::Raw`] so the
//! caller renders the body as plain formatted text.

mod actions;
mod lists;
mod quiz;
mod splitter;
mod themes;
mod verses;
mod vocab;

pub use actions::parse_action_items;
pub use lists::{parse_preparation, parse_takeaways};
pub use quiz::parse_quiz;
pub use splitter::{split_sections, split_subsections};
pub use themes::{parse_stories, parse_themes};
pub use verses::{parse_hadith, parse_verses};
pub use vocab::parse_vocab;

use crate::model::{
    ActionItem, Hadith, PreparationNote, QuizQuestion, Section, SectionKind, Story, Takeaway,
    Theme, Verse, VocabWord,
};

/// Structured view of one section body, or `Raw` when the body carries no
/// records the section's parser understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSection {
    Themes(Vec<Theme>),
    Verses(Vec<Verse>),
    Vocabulary(Vec<VocabWord>),
    Hadith(Vec<Hadith>),
    Stories(Vec<Story>),
    ActionItems(Vec<ActionItem>),
    Takeaways(Vec<Takeaway>),
    Quiz(Vec<QuizQuestion>),
    Preparation(Vec<PreparationNote>),
    Raw,
}

/// Run the micro-parser matching the section's kind, with the raw-text
/// fallback applied when zero records are extracted.
#[must_use]
pub fn parse_section(section: &Section) -> ParsedSection {
    let body = section.body.as_str();
    let parsed = match section.kind {
        SectionKind::Themes => ParsedSection::Themes(parse_themes(body)),
        SectionKind::Verses => ParsedSection::Verses(parse_verses(body)),
        SectionKind::Vocabulary => ParsedSection::Vocabulary(parse_vocab(body)),
        SectionKind::Hadith => ParsedSection::Hadith(parse_hadith(body)),
        SectionKind::Stories => ParsedSection::Stories(parse_stories(body)),
        SectionKind::ActionItems => ParsedSection::ActionItems(parse_action_items(body)),
        SectionKind::Takeaways => ParsedSection::Takeaways(parse_takeaways(body)),
        SectionKind::Quiz => ParsedSection::Quiz(parse_quiz(body)),
        SectionKind::Preparation => ParsedSection::Preparation(parse_preparation(body)),
        SectionKind::General => ParsedSection::Raw,
    };
    if parsed.is_empty() {
        ParsedSection::Raw
    } else {
        parsed
    }
}

impl ParsedSection {
    /// True when no structured records were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Themes(v) => v.is_empty(),
            Self::Verses(v) => v.is_empty(),
            Self::Vocabulary(v) => v.is_empty(),
            Self::Hadith(v) => v.is_empty(),
            Self::Stories(v) => v.is_empty(),
            Self::ActionItems(v) => v.is_empty(),
            Self::Takeaways(v) => v.is_empty(),
            Self::Quiz(v) => v.is_empty(),
            Self::Preparation(v) => v.is_empty(),
            Self::Raw => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takeaways_section_dispatches_to_the_list_parser() {
        let section = Section::new("Key Takeaways", "- Point one\n- Point two");
        let parsed = parse_section(&section);
        let ParsedSection::Takeaways(items) = parsed else {
            panic!("expected takeaways, got {parsed:?}");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Point one");
    }

    #[test]
    fn structureless_body_falls_back_to_raw() {
        let section = Section::new("Key Vocabulary", "No table in this body.");
        assert_eq!(parse_section(&section), ParsedSection::Raw);
    }

    #[test]
    fn general_sections_are_always_raw() {
        let section = Section::new("Reflections", "- looks like a list\n- but stays raw");
        assert_eq!(parse_section(&section), ParsedSection::Raw);
    }
}
