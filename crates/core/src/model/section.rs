/// A titled block of a lesson-notes document, derived by splitting the
/// document on top-level header markers. Sections are never persisted;
/// they are recomputed from the document on every render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Stable slug of the title, used for TOC anchors and collapse state.
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: SectionKind,
}

/// The known section shapes a lesson-note document may contain.
///
/// This is the section-type registry: an exact-title lookup with a
/// `General` fallback, total over all strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Themes,
    Verses,
    Vocabulary,
    Hadith,
    Stories,
    ActionItems,
    Takeaways,
    Quiz,
    Preparation,
    General,
}

/// Static presentation metadata for a section kind: an icon glyph and a
/// two-tone color pair for the section card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub icon: &'static str,
    pub tint: &'static str,
    pub accent: &'static str,
}

const DEFAULT_PRESENTATION: Presentation = Presentation {
    icon: "📄",
    tint: "#f4f4f5",
    accent: "#52525b",
};

impl SectionKind {
    /// Classify a section title. Unknown titles map to `General`.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        match title.trim() {
            "Key Themes" => Self::Themes,
            "Quranic Verses" | "Verses Covered" => Self::Verses,
            "Key Vocabulary" | "Arabic Vocabulary" => Self::Vocabulary,
            "Hadith" | "Relevant Hadith" => Self::Hadith,
            "Stories & Examples" | "Stories" => Self::Stories,
            "Action Points" | "Action Items" => Self::ActionItems,
            "Key Takeaways" => Self::Takeaways,
            "Quiz" | "Check Your Understanding" => Self::Quiz,
            "Preparation for Next Session" | "Before Next Session" => Self::Preparation,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        match self {
            Self::Themes => Presentation {
                icon: "💡",
                tint: "#fef3c7",
                accent: "#b45309",
            },
            Self::Verses => Presentation {
                icon: "📖",
                tint: "#d1fae5",
                accent: "#047857",
            },
            Self::Vocabulary => Presentation {
                icon: "🔤",
                tint: "#e0e7ff",
                accent: "#4338ca",
            },
            Self::Hadith => Presentation {
                icon: "🕌",
                tint: "#ccfbf1",
                accent: "#0f766e",
            },
            Self::Stories => Presentation {
                icon: "📜",
                tint: "#fce7f3",
                accent: "#be185d",
            },
            Self::ActionItems => Presentation {
                icon: "✅",
                tint: "#dcfce7",
                accent: "#15803d",
            },
            Self::Takeaways => Presentation {
                icon: "⭐",
                tint: "#fef9c3",
                accent: "#a16207",
            },
            Self::Quiz => Presentation {
                icon: "❓",
                tint: "#ede9fe",
                accent: "#6d28d9",
            },
            Self::Preparation => Presentation {
                icon: "📚",
                tint: "#dbeafe",
                accent: "#1d4ed8",
            },
            Self::General => DEFAULT_PRESENTATION,
        }
    }
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        let kind = SectionKind::from_title(&title);
        Self {
            id: slugify(&title),
            title,
            body: body.into(),
            kind,
        }
    }

    /// True when the body holds no renderable content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Lowercase the title and collapse runs of non-alphanumerics into single
/// hyphens. Non-ASCII letters (e.g. Arabic) are kept as-is.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_titles_map_to_their_kind() {
        assert_eq!(SectionKind::from_title("Key Takeaways"), SectionKind::Takeaways);
        assert_eq!(SectionKind::from_title("  Quiz "), SectionKind::Quiz);
        assert_eq!(SectionKind::from_title("Quranic Verses"), SectionKind::Verses);
    }

    #[test]
    fn unknown_title_falls_back_to_general() {
        let kind = SectionKind::from_title("Something Entirely New");
        assert_eq!(kind, SectionKind::General);
        assert_eq!(kind.presentation(), DEFAULT_PRESENTATION);
    }

    #[test]
    fn every_kind_has_a_presentation() {
        // Total over the enum: no arm may panic or return an empty icon.
        let kinds = [
            SectionKind::Themes,
            SectionKind::Verses,
            SectionKind::Vocabulary,
            SectionKind::Hadith,
            SectionKind::Stories,
            SectionKind::ActionItems,
            SectionKind::Takeaways,
            SectionKind::Quiz,
            SectionKind::Preparation,
            SectionKind::General,
        ];
        for kind in kinds {
            assert!(!kind.presentation().icon.is_empty());
        }
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Key Takeaways"), "key-takeaways");
        assert_eq!(slugify("  Stories & Examples "), "stories-examples");
        assert_eq!(slugify("Q&A"), "q-a");
    }

    #[test]
    fn section_new_classifies_and_slugs() {
        let section = Section::new("Key Vocabulary", "| a | b | c |");
        assert_eq!(section.kind, SectionKind::Vocabulary);
        assert_eq!(section.id, "key-vocabulary");
        assert!(!section.is_empty());
    }
}
