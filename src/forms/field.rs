//! Access-style fields: value above the rule, label below it.
//!
//! ```text
//!   Jane Doe            ← value, fitted to the rule
//!  ────────────────     ← rule at anchor + 0.6
//!  First Name           ← label
//! ```

use crate::backend::DrawingBackend;
use crate::fit::fit;
use crate::ir::Alignment;
use crate::layout::{self, FieldSlot};

/// Draw one labelled field anchored at `(x, y)` with a rule `width` long.
///
/// Always switches to the field font first, so callers never leak a heading
/// font into a field. The line width is inherited.
pub fn line_field(
    doc: &mut dyn DrawingBackend,
    x: f32,
    y: f32,
    width: f32,
    label: &str,
    value: &str,
) {
    doc.set_font(layout::FIELD_FONT);

    let fitted = fit(value, width - layout::FIELD_FIT_PADDING, |s| {
        doc.text_width(s)
    });
    doc.text(
        x + layout::FIELD_VALUE_INSET,
        y - layout::FIELD_VALUE_RAISE,
        &fitted,
        Alignment::Left,
    );

    let rule_y = y + layout::FIELD_RULE_OFFSET;
    doc.line(x, rule_y, x + width, rule_y);
    doc.text(x, y + layout::FIELD_LABEL_OFFSET, label, Alignment::Left);
}

/// [`line_field`] at a slot positioned relative to `top`.
pub fn slot_field(
    doc: &mut dyn DrawingBackend,
    top: f32,
    slot: FieldSlot,
    label: &str,
    value: &str,
) {
    line_field(doc, slot.x, top + slot.dy, slot.width, label, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PdfBackend;
    use crate::ir::Op;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_geometry() {
        let mut doc = PdfBackend::a4();
        line_field(&mut doc, 14.0, 57.0, 40.0, "First Name", "Jane");

        assert_eq!(
            doc.program().ops,
            vec![
                Op::SetFont(layout::FIELD_FONT),
                Op::Text {
                    x: 15.0,
                    y: 57.0 - 1.2,
                    content: "Jane".into(),
                    align: Alignment::Left,
                },
                Op::Line {
                    x1: 14.0,
                    y1: 57.0 + 0.6,
                    x2: 54.0,
                    y2: 57.0 + 0.6
                },
                Op::Text {
                    x: 14.0,
                    y: 61.5,
                    content: "First Name".into(),
                    align: Alignment::Left,
                },
            ]
        );
    }

    #[test]
    fn test_long_value_is_fitted() {
        let mut doc = PdfBackend::a4();
        let email = "a.very.long.customer.address@example-mail-provider.com";
        line_field(&mut doc, 106.0, 68.0, 40.0, "Email", email);

        let value = doc.program().texts().next().unwrap().to_string();
        assert!(value.ends_with("..."));
        assert!(doc.text_width(&value) <= 38.0);
    }

    #[test]
    fn test_slot_offsets_from_top() {
        let mut doc = PdfBackend::a4();
        slot_field(&mut doc, 44.0, layout::CITY, "City", "Newmarket");

        let rule = doc
            .program()
            .iter()
            .find_map(|op| match op {
                Op::Line { x1, y1, x2, .. } => Some((*x1, *y1, *x2)),
                _ => None,
            })
            .unwrap();
        assert_eq!(rule, (60.0, 44.0 + 24.0 + 0.6, 100.0));
    }
}
