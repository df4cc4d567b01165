//! Parsers for blockquote shaped sections: Quranic verses and hadith.
//!
//! Expected verse shape:
//!
//! ```text
//! **Surah al-Baqarah 2:286**
//! > لا يكلف الله نفسا إلا وسعها
//! > "Allah does not burden a soul beyond that it can bear."
//! ```
//!
//! Expected hadith shape: blockquote text followed by an optional
//! `**Source:** ...` attribution line.

use crate::model::{Hadith, Verse};

/// Extract verses from a "Quranic Verses" body. A bold lead line names the
/// reference; the blockquote lines below it carry the Arabic text and the
/// translation. Returns an empty vec for unstructured input.
#[must_use]
pub fn parse_verses(body: &str) -> Vec<Verse> {
    let mut verses = Vec::new();
    let mut reference: Option<String> = None;
    let mut arabic: Vec<String> = Vec::new();
    let mut translation: Vec<String> = Vec::new();

    let mut flush =
        |reference: &mut Option<String>, arabic: &mut Vec<String>, translation: &mut Vec<String>| {
            if let Some(reference) = reference.take() {
                if !arabic.is_empty() || !translation.is_empty() {
                    verses.push(Verse {
                        reference,
                        arabic: non_empty(arabic.join(" ")),
                        translation: translation.join(" "),
                    });
                }
            }
            arabic.clear();
            translation.clear();
        };

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(lead) = bold_lead(trimmed) {
            flush(&mut reference, &mut arabic, &mut translation);
            reference = Some(lead);
        } else if let Some(quoted) = trimmed.strip_prefix('>') {
            let quoted = quoted.trim().trim_matches('"').to_string();
            if quoted.is_empty() {
                continue;
            }
            if contains_arabic(&quoted) {
                arabic.push(quoted);
            } else {
                translation.push(quoted);
            }
        }
    }
    flush(&mut reference, &mut arabic, &mut translation);

    verses
}

/// Extract narrations from a "Hadith" body. Each run of blockquote lines is
/// one hadith; a following `**Source:** ...` (or parenthesised) line is its
/// attribution. Returns an empty vec for unstructured input.
#[must_use]
pub fn parse_hadith(body: &str) -> Vec<Hadith> {
    let mut records = Vec::new();
    let mut text: Vec<String> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(quoted) = trimmed.strip_prefix('>') {
            let quoted = quoted.trim().trim_matches('"');
            if !quoted.is_empty() {
                text.push(quoted.to_string());
            }
        } else if !text.is_empty() {
            let source = source_line(trimmed);
            records.push(Hadith {
                text: text.join(" "),
                source,
            });
            text.clear();
        }
    }
    if !text.is_empty() {
        records.push(Hadith {
            text: text.join(" "),
            source: None,
        });
    }

    records
}

/// `**lead**` with nothing else on the line.
fn bold_lead(line: &str) -> Option<String> {
    let inner = line.strip_prefix("**")?.strip_suffix("**")?;
    non_empty(inner.trim().to_string())
}

/// Attribution from a `**Source:** ...`, `Source: ...`, `(...)` or `— ...`
/// line. Anything else (including a blank line) means "no source".
fn source_line(line: &str) -> Option<String> {
    let stripped = line.trim_start_matches('*').trim();
    let source = if let Some(rest) = stripped.strip_prefix("Source:") {
        // The bold form closes with `**` right after the colon.
        rest.trim_start_matches('*').trim()
    } else if stripped.starts_with('(') && stripped.ends_with(')') {
        stripped.trim_matches(['(', ')'])
    } else if let Some(rest) = stripped.strip_prefix('—') {
        rest.trim()
    } else {
        return None;
    };
    non_empty(source.trim_end_matches("**").trim().to_string())
}

fn contains_arabic(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{0600}'..='\u{06FF}').contains(&c) || ('\u{0750}'..='\u{077F}').contains(&c))
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_with_arabic_and_translation() {
        let body = "**Surah al-Baqarah 2:286**\n\
                    > لا يكلف الله نفسا إلا وسعها\n\
                    > \"Allah does not burden a soul beyond that it can bear.\"";
        let verses = parse_verses(body);
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].reference, "Surah al-Baqarah 2:286");
        assert!(verses[0].arabic.is_some());
        assert_eq!(
            verses[0].translation,
            "Allah does not burden a soul beyond that it can bear."
        );
    }

    #[test]
    fn translation_only_verse_is_kept() {
        let body = "**Surah al-Asr 103:1**\n> By time.";
        let verses = parse_verses(body);
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].arabic, None);
    }

    #[test]
    fn reference_without_any_quote_is_dropped() {
        assert!(parse_verses("**Surah Yasin**\nplain line").is_empty());
        assert!(parse_verses("prose only").is_empty());
    }

    #[test]
    fn hadith_with_source_attribution() {
        let body = "> The best of you are those who learn the Quran and teach it.\n\
                    **Source:** Sahih al-Bukhari";
        let records = parse_hadith(body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source.as_deref(), Some("Sahih al-Bukhari"));
    }

    #[test]
    fn source_attribution_sheds_bold_markers() {
        let bold = parse_hadith("> Seek knowledge.\n**Source:** Sunan Ibn Majah");
        assert_eq!(bold[0].source.as_deref(), Some("Sunan Ibn Majah"));
        let plain = parse_hadith("> Seek knowledge.\nSource: Sunan Ibn Majah");
        assert_eq!(plain[0].source.as_deref(), Some("Sunan Ibn Majah"));
    }

    #[test]
    fn hadith_without_source_is_kept() {
        let body = "> Actions are judged by intentions.";
        let records = parse_hadith(body);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source, None);
    }

    #[test]
    fn multiple_hadith_split_on_non_quote_lines() {
        let body = "> First narration.\n(Muslim)\n\n> Second narration.\n— Tirmidhi";
        let records = parse_hadith(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source.as_deref(), Some("Muslim"));
        assert_eq!(records[1].source.as_deref(), Some("Tirmidhi"));
    }

    #[test]
    fn unstructured_body_yields_nothing() {
        assert!(parse_hadith("no quotes here").is_empty());
    }
}
