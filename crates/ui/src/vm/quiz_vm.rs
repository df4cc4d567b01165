use std::collections::{BTreeSet, HashMap};

use notes_core::model::{QuizQuestion, QuizScore};

/// Per-question answer state. Transitions are monotonic:
/// `Unanswered -> Selected -> Revealed`, with no regression. Changing the
/// selection while still unrevealed stays within `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Selected(char),
    Revealed(char),
}

/// Interactive state for one quiz widget.
///
/// The terminal state is "every question revealed"; reaching it yields the
/// completion score exactly once (guarded by a fired flag) so the caller
/// can persist it without double-writes.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizVm {
    questions: Vec<QuizQuestion>,
    selected: HashMap<usize, char>,
    revealed: BTreeSet<usize>,
    completion_fired: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            selected: HashMap::new(),
            revealed: BTreeSet::new(),
            completion_fired: false,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> QuestionState {
        if self.revealed.contains(&index) {
            self.selected
                .get(&index)
                .map_or(QuestionState::Unanswered, |l| QuestionState::Revealed(*l))
        } else {
            self.selected
                .get(&index)
                .map_or(QuestionState::Unanswered, |l| QuestionState::Selected(*l))
        }
    }

    /// Select an answer. Ignored after the question is revealed (the UI
    /// disables the options, and the state machine does not regress).
    pub fn select(&mut self, index: usize, letter: char) {
        if index >= self.questions.len() || self.revealed.contains(&index) {
            return;
        }
        self.selected.insert(index, letter.to_ascii_uppercase());
    }

    /// Reveal the answer for one question. Requires a selection; repeated
    /// reveals are no-ops. Returns the completion score exactly once, at
    /// the moment the last question is revealed.
    pub fn reveal(&mut self, index: usize) -> Option<QuizScore> {
        if index >= self.questions.len()
            || !self.selected.contains_key(&index)
            || !self.revealed.insert(index)
        {
            return None;
        }

        if self.is_complete() && !self.completion_fired {
            self.completion_fired = true;
            return QuizScore::from_counts(self.correct_count(), self.total()).ok();
        }
        None
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// All questions revealed (trivially false for an empty quiz, which
    /// the widgets never build).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.revealed.len() == self.questions.len()
    }

    /// Running score: revealed questions whose selection matches the
    /// parsed answer letter.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.revealed
            .iter()
            .filter(|index| {
                let question = &self.questions[**index];
                self.selected
                    .get(index)
                    .is_some_and(|letter| question.is_correct(*letter))
            })
            .count()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::model::QuizOption;

    fn question(number: u32, answer: char) -> QuizQuestion {
        QuizQuestion {
            number,
            prompt: format!("Question {number}?"),
            options: vec![
                QuizOption {
                    letter: 'A',
                    text: "first".to_string(),
                },
                QuizOption {
                    letter: 'B',
                    text: "second".to_string(),
                },
            ],
            answer,
            explanation: None,
        }
    }

    #[test]
    fn completion_fires_once_with_the_rounded_percent() {
        // Three questions, two answered correctly: round(2/3 * 100) = 67.
        let mut vm = QuizVm::new(vec![question(1, 'A'), question(2, 'B'), question(3, 'A')]);

        vm.select(0, 'A');
        assert_eq!(vm.reveal(0), None);
        vm.select(1, 'B');
        assert_eq!(vm.reveal(1), None);
        vm.select(2, 'B');

        let score = vm.reveal(2).expect("completion fires on the last reveal");
        assert_eq!(score.percent(), 67);
        assert!(vm.is_complete());

        // The flag guards against a second emission.
        assert_eq!(vm.reveal(2), None);
    }

    #[test]
    fn wrong_selection_does_not_advance_the_running_score() {
        let mut vm = QuizVm::new(vec![question(1, 'B'), question(2, 'B')]);
        vm.select(0, 'A');
        vm.reveal(0);
        assert_eq!(vm.correct_count(), 0);
        assert_eq!(vm.state(0), QuestionState::Revealed('A'));
    }

    #[test]
    fn selection_is_frozen_after_reveal() {
        let mut vm = QuizVm::new(vec![question(1, 'A'), question(2, 'A')]);
        vm.select(0, 'A');
        vm.reveal(0);
        vm.select(0, 'B');
        assert_eq!(vm.state(0), QuestionState::Revealed('A'));
        assert_eq!(vm.correct_count(), 1);
    }

    #[test]
    fn reveal_without_a_selection_is_ignored() {
        let mut vm = QuizVm::new(vec![question(1, 'A')]);
        assert_eq!(vm.reveal(0), None);
        assert!(!vm.is_revealed(0));
        assert_eq!(vm.state(0), QuestionState::Unanswered);
    }

    #[test]
    fn selection_may_change_before_reveal() {
        let mut vm = QuizVm::new(vec![question(1, 'B')]);
        vm.select(0, 'A');
        vm.select(0, 'B');
        assert_eq!(vm.state(0), QuestionState::Selected('B'));
        let score = vm.reveal(0).expect("single-question quiz completes");
        assert_eq!(score.percent(), 100);
    }

    #[test]
    fn empty_quiz_never_completes() {
        let mut vm = QuizVm::new(Vec::new());
        assert!(!vm.is_complete());
        assert_eq!(vm.reveal(0), None);
    }
}
