//! Shop letterhead and form title, shared by both forms.

use crate::backend::DrawingBackend;
use crate::config::FormConfig;
use crate::fit::fit;
use crate::ir::Alignment;
use crate::layout::{
    CONTACT_FIRST_Y, CONTACT_FONT, CONTACT_LINE_STEP, CONTENT_RIGHT, CONTENT_WIDTH, MARGIN_LEFT,
    SHOP_NAME_FONT, SHOP_NAME_Y, TITLE_FONT, TITLE_RULE_WIDTH, TITLE_RULE_Y, TITLE_Y,
};

/// Draw the letterhead, the form `title` and the rule under it.
///
/// Leaves the title rule's line width in effect.
pub fn draw_header(doc: &mut dyn DrawingBackend, config: &FormConfig, title: &str) {
    doc.set_font(SHOP_NAME_FONT);
    let shop = fit(&config.shop_name, CONTENT_WIDTH, |s| doc.text_width(s));
    doc.text(MARGIN_LEFT, SHOP_NAME_Y, &shop, Alignment::Left);

    doc.set_font(CONTACT_FONT);
    for (i, line) in config.contact_lines.iter().enumerate() {
        // Printed verbatim: the legacy line relies on its run of spaces.
        let y = CONTACT_FIRST_Y + CONTACT_LINE_STEP * i as f32;
        doc.text(MARGIN_LEFT, y, line, Alignment::Left);
    }

    doc.set_font(TITLE_FONT);
    doc.text(MARGIN_LEFT, TITLE_Y, title, Alignment::Left);
    doc.set_line_width(TITLE_RULE_WIDTH);
    doc.line(MARGIN_LEFT, TITLE_RULE_Y, CONTENT_RIGHT, TITLE_RULE_Y);
}
