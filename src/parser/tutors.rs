use std::sync::LazyLock;

use regex::Regex;

static TUTOR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*Tutor:: (.*)$").unwrap());
// [[staff/jane|Jane Doe]] -> "Jane Doe"
static WIKI_LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\|(.*?)\]\]").unwrap());

/// Display names from the first `Tutor::` line anywhere in the note.
///
/// Only aliased wiki links count; a bare `[[target]]` has no display name
/// and is skipped. Order is preserved and duplicates are kept.
pub fn extract(content: &str) -> Vec<String> {
    let Some(caps) = TUTOR_LINE_RE.captures(content) else {
        return Vec::new();
    };

    WIKI_LINK_RE
        .captures_iter(&caps[1])
        .map(|c| c[1].trim().to_string())
        .collect()
}
