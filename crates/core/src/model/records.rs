//! Typed units extracted from section bodies.
//!
//! Records are ephemeral UI state: derived from a [`Section`] body string,
//! never persisted, and recomputed on every render pass. An empty list of
//! records is a valid outcome and means "render the raw body instead".
//!
//! [`Section`]: crate::model::Section

/// One named theme from a "Key Themes" section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: String,
    pub body: String,
}

/// One Quranic verse: a reference lead, optional Arabic text, and the
/// translation quoted below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub reference: String,
    pub arabic: Option<String>,
    pub translation: String,
}

/// One vocabulary entry from a pipe-delimited table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabWord {
    pub arabic: String,
    pub transliteration: Option<String>,
    pub meaning: String,
}

/// One narration with an optional source attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hadith {
    pub text: String,
    pub source: Option<String>,
}

/// One story or worked example, titled by a sub-header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub body: String,
}

/// One numbered action point with a bold lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub lead: String,
    pub detail: Option<String>,
}

/// One dash-bullet takeaway line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Takeaway {
    pub text: String,
}

/// One preparation note for the next session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationNote {
    pub text: String,
}

/// A lettered answer choice inside a quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub letter: char,
    pub text: String,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// 1-based question number as written in the document.
    pub number: u32,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    /// Upper-case letter of the correct option.
    pub answer: char,
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// True when the selected letter matches the parsed answer letter.
    /// Comparison is case-insensitive.
    #[must_use]
    pub fn is_correct(&self, selected: char) -> bool {
        selected.eq_ignore_ascii_case(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_comparison_ignores_case() {
        let question = QuizQuestion {
            number: 1,
            prompt: "What is X?".to_string(),
            options: vec![
                QuizOption {
                    letter: 'A',
                    text: "foo".to_string(),
                },
                QuizOption {
                    letter: 'B',
                    text: "bar".to_string(),
                },
            ],
            answer: 'B',
            explanation: None,
        };
        assert!(question.is_correct('b'));
        assert!(question.is_correct('B'));
        assert!(!question.is_correct('A'));
    }
}
