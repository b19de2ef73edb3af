//! Customer pick-up form: the bill handed over with the repaired equipment.

use super::Form;
use super::table::{draw_line_items, draw_totals};
use super::text_box::boxed_text;
use crate::backend::DrawingBackend;
use crate::config::FormConfig;
use crate::fit::fit;
use crate::format::{date_only, join_or_dash, text_or_dash};
use crate::ir::Alignment;
use crate::layout::{
    BOX_LINE_WIDTH, BOX_TITLE_FONT, CONTENT_WIDTH, CONTINUATION_TOP, FINISHED_DY, FOOTER_FONT,
    FOOTER_Y, MARGIN_LEFT, PICK_UP_BODY_HEIGHT, PICK_UP_BODY_LIMIT, PICK_UP_BOX_DY,
    PICK_UP_BOX_HEIGHT, PICK_UP_BOX_WIDTH, PICK_UP_LEFT_BOX_X, PICK_UP_RIGHT_BOX_X,
    PICK_UP_TEXT_DY, PICK_UP_TEXT_INSET, PICK_UP_TITLE_DY, PICK_UP_WRAP_WIDTH, TABLE_GAP,
    TECHNICIANS_DY, TECHNICIANS_WIDTH, TOTALS_DY,
};
use crate::model::WorkOrderDetail;

/// Pick-up form for one work order.
#[derive(Debug, Clone)]
pub struct PickUpForm<'a> {
    item: &'a WorkOrderDetail,
}

impl<'a> PickUpForm<'a> {
    pub fn new(item: &'a WorkOrderDetail) -> Self {
        Self { item }
    }

    /// Where the boxes and totals start: right under the table, or at the
    /// top of a fresh page when they would run into the footer.
    fn body_top(doc: &mut dyn DrawingBackend, table_end: f32) -> f32 {
        if table_end + PICK_UP_BODY_HEIGHT <= PICK_UP_BODY_LIMIT {
            return table_end;
        }
        log::debug!(
            "pick-up body does not fit below y={:.2}, continuing on a new page",
            table_end
        );
        doc.add_page();
        CONTINUATION_TOP
    }
}

impl Form for PickUpForm<'_> {
    fn title(&self) -> &str {
        "Customer Pick Up Form"
    }

    fn file_prefix(&self) -> &str {
        "pick-up-form"
    }

    fn item(&self) -> &WorkOrderDetail {
        self.item
    }

    fn draw_body(&self, doc: &mut dyn DrawingBackend, y: f32) {
        let item = self.item;
        let table_end = draw_line_items(doc, item, y + TABLE_GAP);
        let top = Self::body_top(doc, table_end);

        doc.set_font(BOX_TITLE_FONT);
        let title_y = top + PICK_UP_TITLE_DY;
        doc.text(PICK_UP_LEFT_BOX_X, title_y, "Problem Description", Alignment::Left);
        doc.text(PICK_UP_RIGHT_BOX_X, title_y, "Work Done", Alignment::Left);

        let box_top = top + PICK_UP_BOX_DY;
        let box_bottom = box_top + PICK_UP_BOX_HEIGHT;
        doc.set_line_width(BOX_LINE_WIDTH);
        for x in [PICK_UP_LEFT_BOX_X, PICK_UP_RIGHT_BOX_X] {
            doc.rect(x, box_top, PICK_UP_BOX_WIDTH, PICK_UP_BOX_HEIGHT);
        }

        let text_y = top + PICK_UP_TEXT_DY;
        let texts = [
            (PICK_UP_LEFT_BOX_X, item.problem_description.as_deref()),
            (PICK_UP_RIGHT_BOX_X, item.work_done.as_deref()),
        ];
        for (x, value) in texts {
            boxed_text(
                doc,
                x + PICK_UP_TEXT_INSET,
                text_y,
                PICK_UP_WRAP_WIDTH,
                box_bottom,
                &text_or_dash(value),
            );
        }

        let totals_y = top + TOTALS_DY;
        draw_totals(doc, item, totals_y);

        // Same emphasis font as the totals beside them.
        let technicians = format!("Technician(s): {}", join_or_dash(&item.worker_names));
        let technicians = fit(&technicians, TECHNICIANS_WIDTH, |s| doc.text_width(s));
        doc.text(
            MARGIN_LEFT,
            totals_y + TECHNICIANS_DY,
            &technicians,
            Alignment::Left,
        );
        let finished = format!("Date Finished: {}", date_only(item.updated_at.as_deref()));
        doc.text(MARGIN_LEFT, totals_y + FINISHED_DY, &finished, Alignment::Left);
    }

    fn draw_footer(&self, doc: &mut dyn DrawingBackend, config: &FormConfig) {
        doc.set_font(FOOTER_FONT);
        let warranty = fit(&config.warranty, CONTENT_WIDTH, |s| doc.text_width(s));
        doc.text(MARGIN_LEFT, FOOTER_Y, &warranty, Alignment::Left);
    }
}
