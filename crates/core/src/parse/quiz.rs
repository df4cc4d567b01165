//! Parser for multiple-choice quiz sections.
//!
//! ```text
//! **Q1.** What does "iman" mean?
//! - A) Charity
//! - B) Faith
//! **Answer:** B) Iman is belief in the heart, affirmed by the tongue.
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{QuizOption, QuizQuestion};

static QUESTION_RE: OnceLock<Regex> = OnceLock::new();
static OPTION_RE: OnceLock<Regex> = OnceLock::new();
static ANSWER_RE: OnceLock<Regex> = OnceLock::new();

fn question_re() -> &'static Regex {
    QUESTION_RE.get_or_init(|| {
        Regex::new(r"^\*\*Q(?P<number>\d+)[.)]?\*\*\s*(?P<prompt>.*)$")
            .expect("question pattern is valid")
    })
}

fn option_re() -> &'static Regex {
    OPTION_RE.get_or_init(|| {
        Regex::new(r"^(?:[-*]\s*)?(?P<letter>[A-Za-z])[.)]\s+(?P<text>.+)$")
            .expect("option pattern is valid")
    })
}

fn answer_re() -> &'static Regex {
    ANSWER_RE.get_or_init(|| {
        Regex::new(r"^\*\*Answer:?\*\*\s*(?P<letter>[A-Za-z])[.)]?\s*(?P<explanation>.*)$")
            .expect("answer pattern is valid")
    })
}

/// Extract quiz questions from a `Q<n>.` delimited body. A question is
/// kept only when it carries at least one lettered option and a parsed
/// answer letter; incomplete questions are dropped rather than reported.
/// An empty result means the caller should render the raw body instead.
#[must_use]
pub fn parse_quiz(body: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();
    let mut current: Option<PartialQuestion> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(captures) = question_re().captures(trimmed) {
            if let Some(done) = current.take() {
                questions.extend(done.finish());
            }
            current = Some(PartialQuestion {
                number: captures["number"].parse().unwrap_or(0),
                prompt: captures["prompt"].trim().to_string(),
                options: Vec::new(),
                answer: None,
                explanation: None,
            });
            continue;
        }

        let Some(question) = current.as_mut() else {
            continue;
        };

        if let Some(captures) = answer_re().captures(trimmed) {
            question.answer = captures["letter"].chars().next().map(|c| c.to_ascii_uppercase());
            let explanation = captures["explanation"].trim();
            if !explanation.is_empty() {
                question.explanation = Some(explanation.to_string());
            }
        } else if let Some(captures) = option_re().captures(trimmed) {
            // Option letters are normalized to upper case so selection
            // comparison stays consistent with the answer letter.
            if let Some(letter) = captures["letter"].chars().next() {
                question.options.push(QuizOption {
                    letter: letter.to_ascii_uppercase(),
                    text: captures["text"].trim().to_string(),
                });
            }
        } else if !trimmed.is_empty() && question.options.is_empty() && question.answer.is_none() {
            // Continuation of a multi-line prompt.
            if !question.prompt.is_empty() {
                question.prompt.push(' ');
            }
            question.prompt.push_str(trimmed);
        }
    }
    if let Some(done) = current.take() {
        questions.extend(done.finish());
    }

    questions
}

struct PartialQuestion {
    number: u32,
    prompt: String,
    options: Vec<QuizOption>,
    answer: Option<char>,
    explanation: Option<String>,
}

impl PartialQuestion {
    fn finish(self) -> Option<QuizQuestion> {
        let answer = self.answer?;
        if self.options.is_empty() || self.prompt.is_empty() {
            return None;
        }
        Some(QuizQuestion {
            number: self.number,
            prompt: self.prompt,
            options: self.options,
            answer,
            explanation: self.explanation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shape_parses_to_one_question() {
        let body = "**Q1.** What is X?\n- A) foo\n- B) bar\n**Answer:** B) because";
        let questions = parse_quiz(body);
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.number, 1);
        assert_eq!(q.prompt, "What is X?");
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.options[0].letter, 'A');
        assert_eq!(q.options[1].text, "bar");
        assert_eq!(q.answer, 'B');
        assert_eq!(q.explanation.as_deref(), Some("because"));
    }

    #[test]
    fn bare_lettered_options_are_accepted() {
        let body = "**Q2.** Pick one.\nA. first\nB. second\n**Answer:** A";
        let questions = parse_quiz(body);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 2);
        assert_eq!(questions[0].explanation, None);
    }

    #[test]
    fn question_without_answer_line_is_dropped() {
        let body = "**Q1.** Orphaned?\n- A) yes\n- B) no";
        assert!(parse_quiz(body).is_empty());
    }

    #[test]
    fn multiple_questions_split_on_delimiters() {
        let body = "**Q1.** First?\n- A) x\n- B) y\n**Answer:** A\n\n\
                    **Q2.** Second?\n- A) p\n- B) q\n**Answer:** B";
        let questions = parse_quiz(body);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].number, 2);
        assert_eq!(questions[1].answer, 'B');
    }

    #[test]
    fn lowercase_answer_letter_is_normalized() {
        let body = "**Q1.** Case?\n- a) one\n- b) two\n**Answer:** b";
        let questions = parse_quiz(body);
        assert_eq!(questions[0].answer, 'B');
        assert_eq!(questions[0].options[1].letter, 'B');
    }

    #[test]
    fn prose_body_yields_nothing() {
        assert!(parse_quiz("There is no quiz here.").is_empty());
    }

    #[test]
    fn multi_line_prompt_is_joined() {
        let body = "**Q1.** A question\nthat continues here?\n- A) x\n**Answer:** A";
        let questions = parse_quiz(body);
        assert_eq!(questions[0].prompt, "A question that continues here?");
    }
}
