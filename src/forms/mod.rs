//! # Work-Order Forms
//!
//! The two printed forms and the pieces they are assembled from.
//!
//! Every form is drawn by the same linear pipeline, with a running `y`
//! cursor handed from one section to the next:
//!
//! ```text
//! Header ──► Common block ──► Body ──► Footer ──► Emit
//!  (fixed)    44 → 146         (per form)  y = 290
//! ```
//!
//! ## Forms
//!
//! | Form | Body | Footer | File |
//! |------|------|--------|------|
//! | [`DropOffForm`] | Problem Description + Work Done / Notes boxes | `Generated:` stamp | `drop-off-form-{id}.pdf` |
//! | [`PickUpForm`] | Line-item table, twin text boxes, totals | Warranty line | `pick-up-form-{id}.pdf` |
//!
//! ## Example
//!
//! ```
//! use workform::forms::generate_pickup_form;
//! use workform::model::WorkOrderDetail;
//!
//! let item = WorkOrderDetail::from_json(r#"{ "reference_id": 1042, "deposit": 20 }"#).unwrap();
//! let form = generate_pickup_form(&item).unwrap();
//!
//! assert_eq!(form.filename, "pick-up-form-1042.pdf");
//! assert!(form.pdf.starts_with(b"%PDF"));
//! ```

mod common;
mod drop_off;
mod field;
mod header;
mod pick_up;
mod table;
mod text_box;

pub use common::draw_common;
pub use drop_off::DropOffForm;
pub use field::{line_field, slot_field};
pub use header::draw_header;
pub use pick_up::PickUpForm;
pub use table::{LINE_ITEM_HEAD, Totals, draw_line_items, draw_totals, line_item_rows};
pub use text_box::{boxed_text, line_capacity};

use crate::backend::{DrawingBackend, PdfBackend, RenderedForm};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::layout::COMMON_TOP;
use crate::model::WorkOrderDetail;

/// A printable work-order form.
///
/// Implementors supply the variant-specific parts; [`draw`](Form::draw) and
/// [`render`](Form::render) run the shared pipeline.
pub trait Form {
    /// Heading printed under the letterhead.
    fn title(&self) -> &str;

    /// Start of the output filename, before the reference id.
    fn file_prefix(&self) -> &str;

    /// The work order being printed.
    fn item(&self) -> &WorkOrderDetail;

    /// Draw everything between the common block and the footer. `y` is the
    /// first free baseline below the common block.
    fn draw_body(&self, doc: &mut dyn DrawingBackend, y: f32);

    /// Draw the footer line on the last page.
    fn draw_footer(&self, doc: &mut dyn DrawingBackend, config: &FormConfig);

    fn filename(&self) -> String {
        format!("{}-{}.pdf", self.file_prefix(), self.item().reference_id)
    }

    /// Draw the complete form.
    fn draw(&self, doc: &mut dyn DrawingBackend, config: &FormConfig) {
        let item = self.item();
        log::debug!("{}: drawing work order {}", self.title(), item.reference_id);

        header::draw_header(doc, config, self.title());
        let y = common::draw_common(doc, item, COMMON_TOP);
        self.draw_body(doc, y);
        self.draw_footer(doc, config);
    }

    /// Draw the complete form and emit it.
    fn render(
        &self,
        doc: &mut dyn DrawingBackend,
        config: &FormConfig,
    ) -> Result<RenderedForm, FormError> {
        self.draw(doc, config);
        doc.save(&self.filename())
    }
}

/// Render the drop-off form with the default letterhead.
pub fn generate_drop_off_form(item: &WorkOrderDetail) -> Result<RenderedForm, FormError> {
    DropOffForm::new(item).render(&mut PdfBackend::a4(), &FormConfig::default())
}

/// Render the pick-up form with the default letterhead.
pub fn generate_pickup_form(item: &WorkOrderDetail) -> Result<RenderedForm, FormError> {
    PickUpForm::new(item).render(&mut PdfBackend::a4(), &FormConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        let item = WorkOrderDetail {
            reference_id: 5,
            ..WorkOrderDetail::default()
        };
        let mut doc = PdfBackend::a4();
        PickUpForm::new(&item).draw(&mut doc, &FormConfig::default());

        let texts: Vec<&str> = doc.program().texts().collect();
        assert_eq!(texts[0], "Humphreys Audio and Vintage Audio Repair");
        assert_eq!(texts[3], "Customer Pick Up Form");
        assert_eq!(texts[4], "Customer ID: 5");
        assert_eq!(
            *texts.last().unwrap(),
            "Warranty: 1 month on replaced parts and labour."
        );
    }

    #[test]
    fn test_generate_both_forms() {
        let item = WorkOrderDetail {
            reference_id: 31,
            ..WorkOrderDetail::default()
        };
        let drop_off = generate_drop_off_form(&item).unwrap();
        let pick_up = generate_pickup_form(&item).unwrap();

        assert_eq!(drop_off.filename, "drop-off-form-31.pdf");
        assert_eq!(pick_up.filename, "pick-up-form-31.pdf");
        assert!(drop_off.pdf.starts_with(b"%PDF"));
        assert!(pick_up.pdf.starts_with(b"%PDF"));
    }
}
