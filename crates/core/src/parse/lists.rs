//! Parsers for plain list sections: key takeaways and preparation notes.

use crate::model::{PreparationNote, Takeaway};

/// Extract takeaways from dash-bullet lines (`- ` or `* `). Returns an
/// empty vec when the body has no bullet lines.
#[must_use]
pub fn parse_takeaways(body: &str) -> Vec<Takeaway> {
    bullet_lines(body, false)
        .map(|text| Takeaway { text })
        .collect()
}

/// Extract preparation notes. Same bullet convention as takeaways, with
/// numbered lines (`1. `) also tolerated since the upstream model mixes
/// the two.
#[must_use]
pub fn parse_preparation(body: &str) -> Vec<PreparationNote> {
    bullet_lines(body, true)
        .map(|text| PreparationNote { text })
        .collect()
}

fn bullet_lines(body: &str, accept_numbered: bool) -> impl Iterator<Item = String> + '_ {
    body.lines().filter_map(move |line| {
        let trimmed = line.trim();
        let text = if let Some(rest) = trimmed.strip_prefix("- ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("* ") {
            rest
        } else if accept_numbered {
            numbered_rest(trimmed)?
        } else {
            return None;
        };
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    })
}

/// `1. rest` or `1) rest`.
fn numbered_rest(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takeaways_from_dash_bullets() {
        let body = "- Point one\n- Point two";
        let takeaways = parse_takeaways(body);
        assert_eq!(takeaways.len(), 2);
        assert_eq!(takeaways[0].text, "Point one");
        assert_eq!(takeaways[1].text, "Point two");
    }

    #[test]
    fn star_bullets_are_accepted() {
        let takeaways = parse_takeaways("* Starred point");
        assert_eq!(takeaways.len(), 1);
        assert_eq!(takeaways[0].text, "Starred point");
    }

    #[test]
    fn takeaways_ignore_numbered_lines() {
        assert!(parse_takeaways("1. numbered, not bulleted").is_empty());
    }

    #[test]
    fn preparation_accepts_both_conventions() {
        let body = "- Read the next surah\n1. Bring your mushaf";
        let notes = parse_preparation(body);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].text, "Bring your mushaf");
    }

    #[test]
    fn prose_yields_nothing() {
        assert!(parse_takeaways("No bullets here.").is_empty());
        assert!(parse_preparation("").is_empty());
    }
}
