//! Display labels derived from image file names

use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Turn a file name into a caption
///
/// The stem is lowercased and stripped of leading digits, then `delimiter`
/// becomes a line break and remaining underscores become spaces. The result is
/// trimmed, reduced to ASCII (accents are decomposed and dropped, other
/// non-ASCII characters removed) and its first letter capitalized.
///
/// `03_holiday__beach_trip.jpg` with delimiter `__` becomes
/// `"Holiday\nbeach trip"`.
pub fn filename_to_annotation(path: &Path, delimiter: &str) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let without_counter = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    let split = if delimiter.is_empty() {
        without_counter.to_string()
    } else {
        without_counter.replace(delimiter, "\n")
    };
    let spaced = split.replace('_', " ");

    let ascii: String = spaced.trim().nfkd().filter(char::is_ascii).collect();
    capitalize(ascii.trim())
}

// Uppercase the first character and leave the rest untouched
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
