use std::sync::LazyLock;

use regex::Regex;

/// Version and edition qualifiers. Everything from the first qualifier to the
/// end of the title is dropped.
static QUALIFIER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)(?:\b(?:unplugged|live|remix|acoustic|version|radio|extended|edited|alternative|remaster|remastered)\b|\b(?:feat|ft)\.).*$",
    )
    .expect("qualifier pattern is valid")
});

const TRAILING_SEPARATORS: &[char] = &['-', ':', '(', '['];

/// Canonical form of a track title used to decide whether two tracks are the
/// same song.
///
/// Lower-cases the title, cuts the suffix starting at the first version
/// qualifier ("live", "remix", "feat.", ...), then strips dangling separators
/// and whitespace. Applying it twice gives the same result as applying it once.
///
/// Qualifiers only match as whole words, so "Alive" or "Radioactive" are kept
/// intact instead of being cut at an embedded "live" or "radio". "remaster" and
/// "remastered" count as qualifiers too.
///
/// ```
/// use sporlrec::recommend::normalize;
///
/// assert_eq!(normalize("Song (Live)"), "song");
/// ```
pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = QUALIFIER_SUFFIX.replace(&lowered, "");

    stripped
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_SEPARATORS.contains(&c))
        .trim()
        .to_string()
}
