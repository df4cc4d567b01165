//! Parser for pipe-delimited vocabulary tables.
//!
//! ```text
//! | Arabic | Transliteration | Meaning |
//! |--------|-----------------|---------|
//! | صبر    | sabr            | patience |
//! ```

use crate::model::VocabWord;

/// Extract vocabulary entries from pipe-delimited table rows. Header and
/// `---` separator rows are skipped. Rows need at least two cells
/// (arabic, meaning); a third cell is the transliteration. Returns an
/// empty vec when the body has no usable rows.
#[must_use]
pub fn parse_vocab(body: &str) -> Vec<VocabWord> {
    let rows: Vec<Vec<String>> = body
        .lines()
        .filter_map(table_cells)
        .collect();

    let separator = rows.iter().position(|cells| is_separator(cells));
    let data_start = separator.map_or(0, |i| i + 1);

    rows.into_iter()
        .skip(data_start)
        .filter(|cells| !is_separator(cells))
        .filter_map(|cells| {
            let mut cells = cells.into_iter();
            let arabic = cells.next().filter(|c| !c.is_empty())?;
            let second = cells.next().filter(|c| !c.is_empty())?;
            match cells.next().filter(|c| !c.is_empty()) {
                Some(meaning) => Some(VocabWord {
                    arabic,
                    transliteration: Some(second),
                    meaning,
                }),
                None => Some(VocabWord {
                    arabic,
                    transliteration: None,
                    meaning: second,
                }),
            }
        })
        .collect()
}

/// Split one `| a | b | c |` line into trimmed cells.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if !trimmed.starts_with('|') {
        return None;
    }
    let cells: Vec<String> = trimmed
        .trim_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect();
    if cells.iter().all(String::is_empty) {
        None
    } else {
        Some(cells)
    }
}

/// A markdown alignment row: every cell is built from `-` and `:` only.
fn is_separator(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_column_table_with_header() {
        let body = "| Arabic | Transliteration | Meaning |\n\
                    |--------|-----------------|---------|\n\
                    | صبر | sabr | patience |\n\
                    | شكر | shukr | gratitude |";
        let words = parse_vocab(body);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].arabic, "صبر");
        assert_eq!(words[0].transliteration.as_deref(), Some("sabr"));
        assert_eq!(words[0].meaning, "patience");
    }

    #[test]
    fn two_column_rows_have_no_transliteration() {
        let body = "| توحيد | oneness of Allah |";
        let words = parse_vocab(body);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].transliteration, None);
        assert_eq!(words[0].meaning, "oneness of Allah");
    }

    #[test]
    fn body_with_zero_pipe_rows_yields_empty_list() {
        // The caller then falls back to raw rendering; this is not an error.
        assert!(parse_vocab("A paragraph about vocabulary.").is_empty());
        assert!(parse_vocab("").is_empty());
    }

    #[test]
    fn rows_missing_cells_are_skipped() {
        let body = "| onlyone |\n| صبر | sabr | patience |";
        let words = parse_vocab(body);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].arabic, "صبر");
    }
}
