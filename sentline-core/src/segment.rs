//! Segment splitting, trimming and joining
//!
//! Pure text steps of a reformat. Splitting and trimming borrow from the
//! source; only the join allocates.

/// Character the source text is split on
pub const DELIMITER: char = '.';

/// Separator inserted between trimmed segments: the delimiter followed by a newline
pub const SEPARATOR: &str = ".\n";

/// Split `text` on every [`DELIMITER`].
///
/// Empty segments are kept, so the result always has one more entry than
/// there are delimiters in `text`. An empty input yields a single empty
/// segment.
pub fn split_segments(text: &str) -> Vec<&str> {
    text.split(DELIMITER).collect()
}

/// Whether `c` is removed by [`trim_segment`].
///
/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark.
pub fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Remove leading and trailing whitespace from one segment
pub fn trim_segment(segment: &str) -> &str {
    segment.trim_matches(is_trim_whitespace)
}

/// Join segments with [`SEPARATOR`] between each adjacent pair.
///
/// Nothing is appended after the last segment.
pub fn join_segments(segments: &[&str]) -> String {
    segments.join(SEPARATOR)
}

/// Split, trim and rejoin `text`
pub fn reformat_text(text: &str) -> String {
    let segments: Vec<&str> = split_segments(text)
        .into_iter()
        .map(trim_segment)
        .collect();
    join_segments(&segments)
}
