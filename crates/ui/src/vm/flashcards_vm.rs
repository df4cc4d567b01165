use std::collections::BTreeSet;

/// Flip state for the vocabulary flashcard grid: a set of flipped card
/// indices plus a full-set bulk toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipDeck {
    total: usize,
    flipped: BTreeSet<usize>,
}

impl FlipDeck {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            flipped: BTreeSet::new(),
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.total {
            return;
        }
        if !self.flipped.remove(&index) {
            self.flipped.insert(index);
        }
    }

    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    #[must_use]
    pub fn all_flipped(&self) -> bool {
        self.total > 0 && self.flipped.len() == self.total
    }

    /// "Reveal all / hide all": flips everything unless everything is
    /// already flipped, in which case it clears.
    pub fn toggle_all(&mut self) {
        if self.all_flipped() {
            self.flipped.clear();
        } else {
            self.flipped = (0..self.total).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_one_card_back_and_forth() {
        let mut deck = FlipDeck::new(3);
        deck.toggle(1);
        assert!(deck.is_flipped(1));
        deck.toggle(1);
        assert!(!deck.is_flipped(1));
    }

    #[test]
    fn toggle_all_is_a_pure_toggle_on_full_membership() {
        let mut deck = FlipDeck::new(3);
        deck.toggle(0);

        // Fewer than all flipped: one click flips all.
        deck.toggle_all();
        assert!(deck.all_flipped());

        // All flipped: one click flips none.
        deck.toggle_all();
        assert!(!deck.is_flipped(0));
        assert!(!deck.all_flipped());
    }

    #[test]
    fn out_of_range_toggles_are_ignored() {
        let mut deck = FlipDeck::new(2);
        deck.toggle(9);
        assert!(!deck.all_flipped());
        assert!(!deck.is_flipped(9));
    }

    #[test]
    fn empty_deck_is_never_all_flipped() {
        let mut deck = FlipDeck::new(0);
        deck.toggle_all();
        assert!(!deck.all_flipped());
    }
}
