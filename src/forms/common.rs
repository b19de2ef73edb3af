//! # Common Block
//!
//! The customer and equipment section printed identically on both forms.
//!
//! ```text
//! Customer ID: 1042                    Date Received: 03/05/2024
//! First Name   | Last Name   | Address
//! Apart/Suite  | City        | Email
//! Home Phone   | Work Phone  | Extension
//! [ ] Location   [ ] Cord        [ ] Remote Control
//! [ ] Albums/CDs/Cassettes  [ ] DVDs/VHS  [ ] Cables
//!              Deposit       | Payment Method
//! ══════════════════════════════════════════════════
//! Item         | Brand       Customer ID   1042
//! Model Number | Serial Number
//! Remote Control: 1 | Cables: 0 | Cord: 1 | Albums/CDs/Cassettes: 0
//! ```
//!
//! The block always occupies [`COMMON_HEIGHT`] millimetres, whatever the
//! content: overlong values are truncated, never wrapped.

use crate::backend::DrawingBackend;
use crate::fit::fit;
use crate::format::{
    accessories_summary, customer_address, date_only, join_or_dash, money, text_or_dash,
};
use crate::ir::Alignment;
use crate::layout::*;
use crate::model::WorkOrderDetail;

use super::field::slot_field;

/// Draw the common block starting at `y` and return the `y` where the next
/// section begins (`y + 102`).
pub fn draw_common(doc: &mut dyn DrawingBackend, item: &WorkOrderDetail, y: f32) -> f32 {
    let customer = &item.customer;

    doc.set_font(COMMON_HEADING_FONT);
    doc.text(
        MARGIN_LEFT,
        y,
        &format!("Customer ID: {}", item.reference_id),
        Alignment::Left,
    );
    doc.text(
        DATE_RECEIVED_X,
        y,
        &format!("Date Received: {}", date_only(item.created_at.as_deref())),
        Alignment::Left,
    );

    let first_name = text_or_dash(customer.first_name.as_deref());
    let last_name = text_or_dash(customer.last_name.as_deref());
    slot_field(doc, y, FIRST_NAME, "First Name", &first_name);
    slot_field(doc, y, LAST_NAME, "Last Name", &last_name);
    slot_field(doc, y, ADDRESS, "Address", &customer_address(customer));

    let suite = text_or_dash(customer.address_line_2.as_deref());
    slot_field(doc, y, SUITE, "Apart/Suite / Entry Code", &suite);
    slot_field(doc, y, CITY, "City", &text_or_dash(customer.city.as_deref()));
    slot_field(doc, y, EMAIL, "Email", &text_or_dash(customer.email.as_deref()));

    let home = text_or_dash(customer.home_phone.as_deref());
    let work = text_or_dash(customer.work_phone.as_deref());
    let extension = text_or_dash(customer.extension_text.as_deref());
    slot_field(doc, y, HOME_PHONE, "Home Phone", &home);
    slot_field(doc, y, WORK_PHONE, "Work Phone / Cell", &work);
    slot_field(doc, y, EXTENSION, "Extension", &extension);

    draw_checkboxes(doc, y);

    slot_field(doc, y, DEPOSIT, "Deposit", &money(Some(item.deposit)));
    let payment = join_or_dash(&item.payment_method_names);
    slot_field(doc, y, PAYMENT_METHOD, "Payment Method", &payment);

    doc.set_line_width(SEPARATOR_WIDTH);
    doc.line(MARGIN_LEFT, y + SEPARATOR_DY, CONTENT_RIGHT, y + SEPARATOR_DY);

    slot_field(doc, y, ITEM, "Item", &text_or_dash(item.item_name.as_deref()));
    slot_field(doc, y, BRAND, "Brand", &join_or_dash(&item.brand_names));

    // Repeated for the tear-off half of the sheet.
    doc.set_font(COMMON_HEADING_FONT);
    let id_y = y + REPEATED_ID_DY;
    doc.text(REPEATED_ID_LABEL_X, id_y, "Customer ID", Alignment::Left);
    doc.text(
        REPEATED_ID_VALUE_X,
        id_y,
        &item.reference_id.to_string(),
        Alignment::Left,
    );

    let model = text_or_dash(item.model_number.as_deref());
    let serial = text_or_dash(item.serial_number.as_deref());
    slot_field(doc, y, MODEL_NUMBER, "Model Number", &model);
    slot_field(doc, y, SERIAL_NUMBER, "Serial Number", &serial);

    doc.set_font(ACCESSORIES_FONT);
    let accessories = fit(&accessories_summary(item), ACCESSORIES_WIDTH, |s| {
        doc.text_width(s)
    });
    doc.text(MARGIN_LEFT, y + ACCESSORIES_DY, &accessories, Alignment::Left);

    y + COMMON_HEIGHT
}

/// Empty tick boxes, filled in by hand at the counter.
fn draw_checkboxes(doc: &mut dyn DrawingBackend, y: f32) {
    doc.set_font(CHECKBOX_FONT);
    for slot in CHECKBOXES {
        let top = y + slot.dy;
        doc.rect(slot.x, top, CHECKBOX_WIDTH, CHECKBOX_HEIGHT);
        doc.text(
            slot.label_x,
            top + CHECKBOX_LABEL_DROP,
            slot.label,
            Alignment::Left,
        );
    }
}
