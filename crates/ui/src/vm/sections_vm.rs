use std::collections::BTreeSet;

use notes_core::model::{Presentation, Section};
use notes_core::parse::{ParsedSection, parse_section};

/// Per-section expand/collapse state keyed by the section's slug id.
/// Stores the COLLAPSED ids so that freshly parsed sections default to
/// expanded without the set knowing the full id list up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandSet {
    collapsed: BTreeSet<String>,
}

impl ExpandSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with every section except the first collapsed, which is
    /// how a long notes page first renders.
    #[must_use]
    pub fn with_first_expanded<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let collapsed = ids.into_iter().skip(1).map(str::to_owned).collect();
        Self { collapsed }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        !self.collapsed.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.collapsed.remove(id) {
            self.collapsed.insert(id.to_owned());
        }
    }

    pub fn expand(&mut self, id: &str) {
        self.collapsed.remove(id);
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}

/// One table-of-contents row: anchor target plus display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
    pub icon: &'static str,
}

#[must_use]
pub fn toc_entries(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .map(|section| TocEntry {
            id: section.id.clone(),
            title: section.title.clone(),
            icon: section.kind.presentation().icon,
        })
        .collect()
}

/// A section read out of the split document, parsed and paired with
/// its presentation hints, ready for a card renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCardVm {
    pub id: String,
    pub title: String,
    pub presentation: Presentation,
    pub content: ParsedSection,
    /// Raw body text, the fallback rendering for [`ParsedSection::Raw`].
    pub body: String,
}

impl SectionCardVm {
    #[must_use]
    pub fn from_section(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            presentation: section.kind.presentation(),
            content: parse_section(section),
            body: section.body.clone(),
        }
    }
}

#[must_use]
pub fn section_cards(sections: &[Section]) -> Vec<SectionCardVm> {
    sections.iter().map(SectionCardVm::from_section).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::parse::split_sections;

    const DOCUMENT: &str = "\
## Key Takeaways
- Point one

## Key Vocabulary
| Arabic | Meaning |
|---|---|
| kitab | book |

## Closing Remarks
Plain text here.
";

    fn expand_set(sections: &[Section]) -> ExpandSet {
        ExpandSet::with_first_expanded(sections.iter().map(|section| section.id.as_str()))
    }

    #[test]
    fn first_section_starts_expanded_and_the_rest_collapsed() {
        let sections = split_sections(DOCUMENT);
        let expand = expand_set(&sections);
        assert!(expand.is_expanded(&sections[0].id));
        assert!(!expand.is_expanded(&sections[1].id));
        assert!(!expand.is_expanded(&sections[2].id));
    }

    #[test]
    fn toggle_flips_a_single_section() {
        let sections = split_sections(DOCUMENT);
        let mut expand = expand_set(&sections);
        expand.toggle(&sections[1].id);
        assert!(expand.is_expanded(&sections[1].id));
        expand.toggle(&sections[0].id);
        assert!(!expand.is_expanded(&sections[0].id));
    }

    #[test]
    fn expand_all_opens_every_collapsed_section() {
        let sections = split_sections(DOCUMENT);
        let mut expand = expand_set(&sections);
        expand.expand_all();
        assert!(sections.iter().all(|section| expand.is_expanded(&section.id)));
    }

    #[test]
    fn toc_lists_every_section_in_document_order() {
        let sections = split_sections(DOCUMENT);
        let toc = toc_entries(&sections);
        assert_eq!(toc.len(), 3);
        assert_eq!(toc[0].title, "Key Takeaways");
        assert_eq!(toc[0].id, sections[0].id);
        assert_eq!(toc[2].title, "Closing Remarks");
    }

    #[test]
    fn cards_carry_parsed_content_per_kind() {
        let sections = split_sections(DOCUMENT);
        let cards = section_cards(&sections);
        assert!(matches!(&cards[0].content, ParsedSection::Takeaways(items) if items.len() == 1));
        assert!(matches!(&cards[1].content, ParsedSection::Vocabulary(words) if words.len() == 1));
        assert!(matches!(&cards[2].content, ParsedSection::Raw));
        assert!(cards[2].body.contains("Plain text here."));
    }
}
