//! Parser for numbered action points with a bold lead.
//!
//! ```text
//! 1. **Review the tafsir** of verses 1-5 before Thursday.
//! 2. **Memorise** the vocabulary table.
//! ```

use regex::Regex;
use std::sync::OnceLock;

use crate::model::ActionItem;

static ACTION_RE: OnceLock<Regex> = OnceLock::new();

fn action_re() -> &'static Regex {
    ACTION_RE.get_or_init(|| {
        Regex::new(r"^\d+[.)]\s*\*\*(?P<lead>[^*]+)\*\*\s*(?P<detail>.*)$")
            .expect("action point pattern is valid")
    })
}

/// Extract action points from numbered-bold-lead lines. Lines that do not
/// match the convention are ignored; an empty result means the caller
/// should render the raw body instead.
#[must_use]
pub fn parse_action_items(body: &str) -> Vec<ActionItem> {
    body.lines()
        .filter_map(|line| {
            let captures = action_re().captures(line.trim())?;
            let lead = captures["lead"].trim().to_string();
            if lead.is_empty() {
                return None;
            }
            let detail = captures["detail"]
                .trim()
                .trim_start_matches(['-', ':', '—'])
                .trim();
            Some(ActionItem {
                lead,
                detail: if detail.is_empty() {
                    None
                } else {
                    Some(detail.to_string())
                },
            })
        })
        .collect()
}
