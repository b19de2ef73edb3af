//! # Font Metrics
//!
//! Advance widths for the base-14 Helvetica faces the forms are set in, plus the
//! measurement and word-wrap routines built on them.
//!
//! ## Units
//!
//! Widths in the tables are AFM units (1/1000 em). Everything leaving this
//! module is in millimetres, the page unit used by all layout code:
//!
//! ```text
//! width_mm = Σ advance / 1000 × size_pt / (72 / 25.4)
//! ```
//!
//! ## Coverage
//!
//! The tables cover printable ASCII. Other characters fall back to an average
//! advance, which keeps fitting conservative without a full glyph table.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Baseline-to-baseline distance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Stroke weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Complete Helvetica font selection: weight and size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    pub weight: FontWeight,
    pub size: f32,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::normal(16.0)
    }
}

impl FontStyle {
    /// Regular Helvetica at `size` points.
    pub const fn normal(size: f32) -> Self {
        Self {
            weight: FontWeight::Normal,
            size,
        }
    }

    /// Bold Helvetica at `size` points.
    pub const fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }

    /// PostScript name of the base-14 font.
    pub fn base_font(&self) -> &'static str {
        match self.weight {
            FontWeight::Normal => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }

    /// Baseline-to-baseline distance in millimetres.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT_FACTOR / PT_PER_MM
    }
}

// Printable ASCII (0x20..=0x7E), AFM units.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Advance width of one character in AFM units.
pub fn char_advance(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match ch {
        ' '..='~' => table[ch as usize - 0x20],
        _ => match weight {
            FontWeight::Normal => 556,
            FontWeight::Bold => 611,
        },
    }
}

/// Rendered width of `text` in millimetres.
pub fn text_width(text: &str, font: &FontStyle) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| char_advance(c, font.weight) as u32)
        .sum();
    units as f32 / 1000.0 * font.size / PT_PER_MM
}

/// Word-wrap `text` into lines no wider than `max_width` millimetres.
///
/// Explicit newlines start a new paragraph (an empty paragraph yields an
/// empty line). Words wider than the box are broken between characters.
pub fn split_text(text: &str, max_width: f32, font: &FontStyle) -> Vec<String> {
    let measure = |s: &str| text_width(s, font);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split_whitespace() {
            if measure(word) > max_width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let mut pieces = break_word(word, max_width, &measure);
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                continue;
            }

            if line.is_empty() {
                line.push_str(word);
                continue;
            }

            let candidate = format!("{line} {word}");
            if measure(&candidate) <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }

        lines.push(line);
    }

    lines
}

/// Split an over-long word into chunks that each fit. Always makes progress:
/// a chunk holds at least one character even when that character is wider
/// than the box.
fn break_word<F>(word: &str, max_width: f32, measure: &F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if current.chars().count() > 1 && measure(&current) > max_width {
            current.pop();
            pieces.push(std::mem::replace(&mut current, ch.to_string()));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helvetica digits share one advance: 556 units, 1.9614mm at 10pt.
    fn digits() -> FontStyle {
        FontStyle::normal(10.0)
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(char_advance(' ', FontWeight::Normal), 278);
        assert_eq!(char_advance('W', FontWeight::Normal), 944);
        assert_eq!(char_advance('i', FontWeight::Normal), 222);
        assert_eq!(char_advance('i', FontWeight::Bold), 278);
        assert_eq!(char_advance('~', FontWeight::Bold), 584);
        assert_eq!(char_advance('é', FontWeight::Normal), 556);
        assert_eq!(char_advance('é', FontWeight::Bold), 611);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let small = text_width("Hello", &FontStyle::normal(10.0));
        let large = text_width("Hello", &FontStyle::normal(20.0));
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn test_text_width_mm() {
        // 10 digits at 12pt: 10 × 0.556 × 12pt = 66.72pt = 23.537mm
        let width = text_width("0123456789", &FontStyle::normal(12.0));
        assert!((width - 23.537).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider() {
        let normal = text_width("Total Payable", &FontStyle::normal(11.0));
        let bold = text_width("Total Payable", &FontStyle::bold(11.0));
        assert!(bold > normal);
    }

    #[test]
    fn test_line_height() {
        // 10pt × 1.15 = 11.5pt ≈ 4.057mm
        let lh = FontStyle::normal(10.0).line_height();
        assert!((lh - 4.0569).abs() < 1e-3);
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(FontStyle::normal(11.0).base_font(), "Helvetica");
        assert_eq!(FontStyle::bold(11.0).base_font(), "Helvetica-Bold");
    }

    #[test]
    fn test_split_text_wraps_words() {
        // "1111 2222" is 16.67mm; a third word would need 23.5mm.
        let lines = split_text("1111 2222 3333 4444 5555", 20.0, &digits());
        assert_eq!(lines, vec!["1111 2222", "3333 4444", "5555"]);
    }

    #[test]
    fn test_split_text_keeps_paragraphs() {
        let lines = split_text("first\n\nsecond", 26.0, &digits());
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_split_text_breaks_long_words() {
        // Ten digits (19.61mm) fit in 20mm, eleven do not.
        let lines = split_text("ab 12345678901234 end", 20.0, &digits());
        assert_eq!(lines, vec!["ab", "1234567890", "1234 end"]);
    }

    #[test]
    fn test_split_text_empty() {
        let lines = split_text("", 50.0, &FontStyle::normal(10.0));
        assert_eq!(lines, vec![String::new()]);
    }
}
