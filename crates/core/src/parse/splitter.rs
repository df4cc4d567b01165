//! Section splitter for lesson-note documents.
//!
//! The upstream text is AI-generated and not guaranteed well-formed, so
//! splitting is best-effort and always succeeds: malformed headers are
//! tolerated, empty bodies are allowed, and degenerate input yields a
//! single untitled section rather than an error.

use crate::model::Section;

/// Title given to any free text that appears before the first header.
const PREAMBLE_TITLE: &str = "Introduction";

/// Split a document into ordered sections on top-level header lines
/// (`# ` or `## `). `### ` and deeper stay inside the section body.
#[must_use]
pub fn split_sections(document: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current_title: Option<String> = None;
    let mut current_body: Vec<&str> = Vec::new();

    let mut flush = |title: Option<String>, body: &mut Vec<&str>, out: &mut Vec<Section>| {
        let body_text = join_body(body);
        body.clear();
        match title {
            Some(title) => out.push(Section::new(title, body_text)),
            // Preamble: only keep it when there is actual content.
            None if !body_text.is_empty() => {
                out.push(Section::new(PREAMBLE_TITLE, body_text));
            }
            None => {}
        }
    };

    for line in document.lines() {
        if let Some(title) = header_title(line) {
            flush(current_title.take(), &mut current_body, &mut sections);
            current_title = Some(title);
        } else {
            current_body.push(line);
        }
    }
    flush(current_title, &mut current_body, &mut sections);

    sections
}

/// Split a section body into `(title, body)` sub-sections on `### `
/// headers. Returns an empty vec when the body has no sub-headers, which
/// callers treat as "fall back to raw text".
#[must_use]
pub fn split_subsections(body: &str) -> Vec<(String, String)> {
    let mut out: Vec<(String, Vec<&str>)> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("###") {
            out.push((trim_marker(rest), Vec::new()));
        } else if let Some((_, lines)) = out.last_mut() {
            lines.push(line);
        }
        // Text before the first sub-header is dropped here; the caller
        // still holds the full body for the raw fallback.
    }

    out.into_iter()
        .filter(|(title, _)| !title.is_empty())
        .map(|(title, lines)| (title, join_body(&lines)))
        .collect()
}

/// Returns the cleaned title when `line` is a top-level header.
fn header_title(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('#') {
        return None;
    }
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes > 2 {
        return None;
    }
    Some(trim_marker(&trimmed[hashes..]))
}

/// Strip residual marker characters and surrounding whitespace from a
/// header title. Tolerates malformed headers like `##Title` or `## #Title`.
fn trim_marker(raw: &str) -> String {
    raw.trim_matches(|c: char| c == '#' || c.is_whitespace())
        .to_string()
}

fn join_body(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;

    #[test]
    fn splits_on_top_level_headers() {
        let doc = "## Key Takeaways\n- Point one\n- Point two";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Key Takeaways");
        assert_eq!(sections[0].body, "- Point one\n- Point two");
        assert_eq!(sections[0].kind, SectionKind::Takeaways);
    }

    #[test]
    fn returns_one_section_per_header() {
        let doc = "## One\nalpha\n## Two\n## Three\nbeta\ngamma";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].body, "alpha");
        // Sections with no body yield an empty string, not an error.
        assert_eq!(sections[1].body, "");
        assert_eq!(sections[2].body, "beta\ngamma");
    }

    #[test]
    fn all_non_marker_content_is_preserved_in_order() {
        let doc = "## A\nline 1\nline 2\n## B\nline 3";
        let sections = split_sections(doc);
        let rejoined: Vec<String> = sections
            .iter()
            .map(|s| format!("{}\n{}", s.title, s.body))
            .collect();
        assert_eq!(rejoined.join("\n"), "A\nline 1\nline 2\nB\nline 3");
    }

    #[test]
    fn preamble_before_first_header_becomes_a_section() {
        let doc = "Some opening remarks.\n\n## Quiz\nbody";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].kind, SectionKind::General);
        assert_eq!(sections[1].title, "Quiz");
    }

    #[test]
    fn leading_header_does_not_create_an_empty_first_section() {
        let doc = "## First\nbody";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "First");
    }

    #[test]
    fn malformed_headers_are_tolerated() {
        let doc = "##Key Themes\nbody\n## #Odd Title\nmore";
        let sections = split_sections(doc);
        assert_eq!(sections[0].title, "Key Themes");
        assert_eq!(sections[1].title, "Odd Title");
    }

    #[test]
    fn sub_headers_stay_inside_the_body() {
        let doc = "## Stories\n### The Cave\ntext";
        let sections = split_sections(doc);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].body.contains("### The Cave"));
    }

    #[test]
    fn degenerate_input_never_fails() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("\n\n\n").is_empty());
        let only_text = split_sections("just a paragraph");
        assert_eq!(only_text.len(), 1);
        assert_eq!(only_text[0].title, "Introduction");
    }

    #[test]
    fn subsections_split_on_triple_hash() {
        let body = "### First\nalpha\n\n### Second\nbeta";
        let subs = split_subsections(body);
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0], ("First".to_string(), "alpha".to_string()));
        assert_eq!(subs[1], ("Second".to_string(), "beta".to_string()));
    }

    #[test]
    fn body_without_sub_headers_yields_no_subsections() {
        assert!(split_subsections("plain prose, no structure").is_empty());
    }
}
