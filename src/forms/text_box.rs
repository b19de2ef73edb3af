//! Free text (problem description, work done) wrapped into a fixed box.

use crate::backend::DrawingBackend;
use crate::fit::fit_lines;
use crate::layout::{BOX_TEXT_BOTTOM_PAD, BOX_TEXT_FONT};

/// How many lines with a first baseline at `first_baseline` fit above
/// `box_bottom`.
pub fn line_capacity(first_baseline: f32, box_bottom: f32, line_height: f32) -> usize {
    let room = box_bottom - BOX_TEXT_BOTTOM_PAD - first_baseline;
    if room < 0.0 || line_height <= 0.0 {
        return 0;
    }
    (room / line_height).floor() as usize + 1
}

/// Wrap `value` to `wrap_width` and draw it from baseline `y`, clamped so the
/// last line stays inside a box ending at `box_bottom`.
pub fn boxed_text(
    doc: &mut dyn DrawingBackend,
    x: f32,
    y: f32,
    wrap_width: f32,
    box_bottom: f32,
    value: &str,
) {
    doc.set_font(BOX_TEXT_FONT);
    let lines = doc.split_text(value, wrap_width);
    let capacity = line_capacity(y, box_bottom, doc.line_height());
    let total = lines.len();
    let lines = fit_lines(lines, capacity, wrap_width, |s| doc.text_width(s));
    if lines.len() < total {
        log::debug!("clamped {} wrapped lines to {}", total, lines.len());
    }
    doc.text_lines(x, y, &lines);
}
