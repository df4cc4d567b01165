//! Parsers for sub-header shaped sections: key themes and stories.

use crate::model::{Story, Theme};
use crate::parse::splitter::split_subsections;

/// Extract themes from a "Key Themes" body. Each `### ` sub-header opens
/// one theme; its lines up to the next sub-header become the theme body.
/// Returns an empty vec for unstructured input.
#[must_use]
pub fn parse_themes(body: &str) -> Vec<Theme> {
    split_subsections(body)
        .into_iter()
        .map(|(title, body)| Theme { title, body })
        .collect()
}

/// Extract stories from a "Stories & Examples" body. Same sub-header
/// convention as themes.
#[must_use]
pub fn parse_stories(body: &str) -> Vec<Story> {
    split_subsections(body)
        .into_iter()
        .map(|(title, body)| Story { title, body })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_come_from_sub_headers() {
        let body = "### Tawakkul\nReliance on Allah.\n\n### Sabr\nPatience in hardship.";
        let themes = parse_themes(body);
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].title, "Tawakkul");
        assert_eq!(themes[0].body, "Reliance on Allah.");
        assert_eq!(themes[1].title, "Sabr");
    }

    #[test]
    fn unstructured_body_yields_nothing() {
        assert!(parse_themes("A paragraph with no sub-headers.").is_empty());
        assert!(parse_stories("").is_empty());
    }

    #[test]
    fn story_bodies_keep_multiple_paragraphs() {
        let body = "### The People of the Cave\nFirst paragraph.\n\nSecond paragraph.";
        let stories = parse_stories(body);
        assert_eq!(stories.len(), 1);
        assert_eq!(
            stories[0].body,
            "First paragraph.\n\nSecond paragraph."
        );
    }
}
