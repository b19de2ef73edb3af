//! Customer drop-off form: filled in when equipment is checked in.

use chrono::{Local, NaiveDateTime};

use super::Form;
use super::text_box::boxed_text;
use crate::backend::DrawingBackend;
use crate::config::FormConfig;
use crate::format::{generated_timestamp, text_or_dash};
use crate::ir::Alignment;
use crate::layout::{
    BOX_LINE_WIDTH, BOX_TITLE_FONT, CONTENT_WIDTH, DROP_OFF_BOX_HEIGHT, DROP_OFF_SECOND_BOX_DY,
    DROP_OFF_TEXT_DY, DROP_OFF_TITLE_DY, DROP_OFF_TITLE_X, DROP_OFF_WRAP_WIDTH, FOOTER_FONT,
    FOOTER_Y, MARGIN_LEFT,
};
use crate::model::WorkOrderDetail;

/// Drop-off form for one work order.
///
/// The footer carries the time the form was generated. It defaults to the
/// local wall clock; pin it with [`with_generated_at`](Self::with_generated_at)
/// for reproducible output.
#[derive(Debug, Clone)]
pub struct DropOffForm<'a> {
    item: &'a WorkOrderDetail,
    generated_at: NaiveDateTime,
}

impl<'a> DropOffForm<'a> {
    pub fn new(item: &'a WorkOrderDetail) -> Self {
        Self {
            item,
            generated_at: Local::now().naive_local(),
        }
    }

    pub fn with_generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = at;
        self
    }

    /// Bordered box with a bold title and the wrapped text under it.
    fn notes_box(&self, doc: &mut dyn DrawingBackend, top: f32, title: &str, value: Option<&str>) {
        let bottom = top + DROP_OFF_BOX_HEIGHT;
        doc.rect(MARGIN_LEFT, top, CONTENT_WIDTH, DROP_OFF_BOX_HEIGHT);

        doc.set_font(BOX_TITLE_FONT);
        doc.text(DROP_OFF_TITLE_X, top + DROP_OFF_TITLE_DY, title, Alignment::Left);

        boxed_text(
            doc,
            DROP_OFF_TITLE_X,
            top + DROP_OFF_TEXT_DY,
            DROP_OFF_WRAP_WIDTH,
            bottom,
            &text_or_dash(value),
        );
    }
}

impl Form for DropOffForm<'_> {
    fn title(&self) -> &str {
        "Customer Drop Off Form"
    }

    fn file_prefix(&self) -> &str {
        "drop-off-form"
    }

    fn item(&self) -> &WorkOrderDetail {
        self.item
    }

    fn draw_body(&self, doc: &mut dyn DrawingBackend, y: f32) {
        doc.set_line_width(BOX_LINE_WIDTH);
        self.notes_box(
            doc,
            y,
            "Problem Description",
            self.item.problem_description.as_deref(),
        );
        self.notes_box(
            doc,
            y + DROP_OFF_SECOND_BOX_DY,
            "Work Done / Notes",
            self.item.work_done.as_deref(),
        );
    }

    fn draw_footer(&self, doc: &mut dyn DrawingBackend, _config: &FormConfig) {
        doc.set_font(FOOTER_FONT);
        let stamp = format!("Generated: {}", generated_timestamp(self.generated_at));
        doc.text(MARGIN_LEFT, FOOTER_Y, &stamp, Alignment::Left);
    }
}
