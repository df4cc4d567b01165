use std::collections::BTreeSet;

/// Local-only check state for the action items list. Checks are not
/// persisted anywhere; a reload starts fresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    checked: BTreeSet<usize>,
}

impl Checklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.contains(&index)
    }

    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_toggle_independently() {
        let mut list = Checklist::new();
        list.toggle(0);
        list.toggle(2);
        assert!(list.is_checked(0));
        assert!(!list.is_checked(1));
        assert!(list.is_checked(2));
        assert_eq!(list.checked_count(), 2);

        list.toggle(0);
        assert!(!list.is_checked(0));
        assert_eq!(list.checked_count(), 1);
    }
}
