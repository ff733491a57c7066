//! Topic-derived filenames.

/// Longest stem, in characters, kept from a sanitized topic.
pub const MAX_FILENAME_STEM: usize = 50;

/// Turn free text into a filename stem.
///
/// Path separators become `-`, spaces and colons become `_`, and the result
/// is cut to [`MAX_FILENAME_STEM`] characters. Applying it twice gives the
/// same result as applying it once.
///
/// # Examples
///
/// ```
/// use reelcraft_storage::sanitize_filename;
///
/// assert_eq!(sanitize_filename("A/B Test"), "A-B_Test");
/// assert_eq!(sanitize_filename("Y2K: The Bug"), "Y2K__The_Bug");
/// ```
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            ' ' | ':' => '_',
            other => other,
        })
        .take(MAX_FILENAME_STEM)
        .collect()
}

/// Sanitized topic stem followed by `suffix`.
///
/// The suffix is appended after truncation, so it is never cut off.
pub fn topic_filename(topic: &str, suffix: &str) -> String {
    format!("{}{}", sanitize_filename(topic), suffix)
}
