//! # Text Fitter
//!
//! Shrinks text to a fixed field width by dropping trailing characters and
//! appending `...`.
//!
//! Truncation is character-based, never word-based, so a field prints the
//! same glyphs the legacy form did. Width is always measured by the caller's
//! closure (the backend's live measurement at the current font and size).
//!
//! ```
//! use workform::fit::fit;
//!
//! // One unit per character.
//! let measure = |s: &str| s.chars().count() as f32;
//!
//! assert_eq!(fit("Turntable", 20.0, measure), "Turntable");
//! assert_eq!(fit("Reel-to-reel deck", 10.0, measure), "Reel-to...");
//! assert_eq!(fit("   ", 10.0, measure), "-");
//! ```

use crate::format::DASH;

/// Appended to every truncated value.
pub const ELLIPSIS: &str = "...";

/// Collapse whitespace runs to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fit `text` into `max_width`.
///
/// - blank input → `-`
/// - fits → returned with whitespace normalised
/// - too wide → longest prefix `p` with `measure(p + "...") <= max_width`,
///   followed by `...`; when not even one character fits, just `...`
pub fn fit<F>(text: &str, max_width: f32, measure: F) -> String
where
    F: Fn(&str) -> f32,
{
    let clean = normalize_whitespace(text);
    if clean.is_empty() {
        return DASH.to_string();
    }
    if measure(&clean) <= max_width {
        return clean;
    }
    ellipsize(&clean, max_width, &measure)
}

/// Force a trailing `...`, keeping the longest prefix that still fits.
///
/// Width grows with every character kept, so the cut point is found by
/// binary search over the prefix ends instead of re-measuring each length.
fn ellipsize<F>(text: &str, max_width: f32, measure: &F) -> String
where
    F: Fn(&str) -> f32,
{
    let with_ellipsis = |end: usize| format!("{}{ELLIPSIS}", &text[..end]);
    let ends: Vec<usize> = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();

    let keep = ends.partition_point(|&end| measure(&with_ellipsis(end)) <= max_width);
    match keep {
        0 => ELLIPSIS.to_string(),
        n => with_ellipsis(ends[n - 1]),
    }
}

/// Clamp wrapped lines to a box that holds `max_lines` lines.
///
/// Lines that fit are returned unchanged. On overflow the last kept line is
/// ellipsized so the reader can see the text continues.
pub fn fit_lines<F>(lines: Vec<String>, max_lines: usize, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    if lines.len() <= max_lines {
        return lines;
    }
    if max_lines == 0 {
        return Vec::new();
    }

    let mut kept: Vec<String> = lines.into_iter().take(max_lines).collect();
    if let Some(last) = kept.last_mut() {
        *last = ellipsize(last.trim_end(), max_width, &measure);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(fit("short text", 100.0, mono), "short text");
    }

    #[test]
    fn test_exact_width_fits() {
        assert_eq!(fit("abcde", 5.0, mono), "abcde");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(fit("  a \n\t b   c ", 100.0, mono), "a b c");
    }

    #[test]
    fn test_empty_is_dash() {
        assert_eq!(fit("", 100.0, mono), "-");
        assert_eq!(fit(" \n ", 0.0, mono), "-");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let out = fit("a very long string that cannot fit", 12.0, mono);
        assert!(out.ends_with("..."));
        assert!(mono(&out) <= 12.0);
        assert_eq!(out, "a very lo...");
    }

    #[test]
    fn test_truncation_is_character_based() {
        // Cuts mid-word rather than backing up to a word boundary.
        assert_eq!(fit("Problem Description", 10.0, mono), "Problem...");
        assert_eq!(fit("Problem Description", 11.0, mono), "Problem ...");
    }

    #[test]
    fn test_degenerate_width() {
        assert_eq!(fit("anything", 0.0, mono), "...");
        assert_eq!(fit("anything", 3.5, mono), "...");
        assert_eq!(fit("anything", 4.0, mono), "a...");
    }

    #[test]
    fn test_proportional_measure() {
        // Wide 'W', narrow everything else.
        let measure = |s: &str| -> f32 { s.chars().map(|c| if c == 'W' { 3.0 } else { 1.0 }).sum() };
        let out = fit("WWWWWW", 10.0, measure);
        assert_eq!(out, "WW...");
        assert!(measure(&out) <= 10.0);
    }

    #[test]
    fn test_multibyte_text() {
        let out = fit("Réparation électronique", 8.0, mono);
        assert_eq!(out, "Répar...");
    }

    #[test]
    fn test_very_long_value() {
        let long = "x".repeat(1_000_000);
        assert_eq!(fit(&long, 10.0, mono), "xxxxxxx...");
    }

    #[test]
    fn test_fit_lines_no_overflow() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(fit_lines(lines.clone(), 2, 10.0, mono), lines);
    }

    #[test]
    fn test_fit_lines_overflow_marks_last_line() {
        let lines: Vec<String> = ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = fit_lines(lines, 2, 7.0, mono);
        assert_eq!(out, vec!["alpha".to_string(), "beta...".to_string()]);
    }

    #[test]
    fn test_fit_lines_overflow_full_width_line() {
        let lines: Vec<String> = ["abcdefg", "hijklmn", "opq"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let out = fit_lines(lines, 2, 7.0, mono);
        assert_eq!(out[1], "hijk...");
    }

    #[test]
    fn test_fit_lines_zero_capacity() {
        let lines = vec!["x".to_string()];
        assert!(fit_lines(lines, 0, 7.0, mono).is_empty());
    }
}
