//! # Layout Constants
//!
//! Every coordinate, box size, field width and font used by the two forms.
//!
//! The values reproduce the legacy printed form. Changing any of them moves
//! ink on paper, so they are collected here rather than scattered through the
//! drawing code.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ─────────────── x (mm) ──────────────► 210
//!   │   ┌── 14 ────────── 182 mm content ──────────── 196 ──┐
//!   │   │ letterhead / title                                │
//!   y   │ common block            44 ─► 146 (fixed 102 mm)  │
//!   │   │ variant body                                      │
//!   ▼   │ footer line                          290          │
//!  297  └───────────────────────────────────────────────────┘
//! ```
//!
//! Text `y` values are baselines. Offsets inside the common block are relative
//! to the block's starting `y`.

use crate::metrics::FontStyle;

/// Physical page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    /// ISO A4 portrait.
    pub const A4: Self = Self {
        width: 210.0,
        height: 297.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// One "value over line, label under line" field, positioned relative to the
/// top of its section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSlot {
    pub x: f32,
    pub dy: f32,
    pub width: f32,
}

impl FieldSlot {
    pub const fn new(x: f32, dy: f32, width: f32) -> Self {
        Self { x, dy, width }
    }
}

/// A labelled tick box, positioned relative to the top of its section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxSlot {
    pub x: f32,
    pub dy: f32,
    pub label: &'static str,
    pub label_x: f32,
}

impl CheckboxSlot {
    pub const fn new(x: f32, dy: f32, label: &'static str, label_x: f32) -> Self {
        Self {
            x,
            dy,
            label,
            label_x,
        }
    }
}

// ============================================================================
// PAGE
// ============================================================================

pub const PAGE: PageSize = PageSize::A4;
pub const MARGIN_LEFT: f32 = 14.0;
pub const CONTENT_RIGHT: f32 = 196.0;
pub const CONTENT_WIDTH: f32 = CONTENT_RIGHT - MARGIN_LEFT;

/// Top margin used when content continues on a fresh page.
pub const CONTINUATION_TOP: f32 = 14.0;

/// Lowest baseline a continued table row may reach.
pub const CONTINUATION_BOTTOM: f32 = PAGE.height - 14.0;

/// Baseline of the single footer line (timestamp or warranty).
pub const FOOTER_Y: f32 = 290.0;
pub const FOOTER_FONT: FontStyle = FontStyle::normal(9.0);

// ============================================================================
// LETTERHEAD
// ============================================================================

pub const SHOP_NAME_Y: f32 = 14.0;
pub const SHOP_NAME_FONT: FontStyle = FontStyle::bold(18.0);

pub const CONTACT_FIRST_Y: f32 = 19.0;
pub const CONTACT_LINE_STEP: f32 = 4.5;
pub const CONTACT_FONT: FontStyle = FontStyle::normal(8.5);

pub const TITLE_Y: f32 = 31.0;
pub const TITLE_FONT: FontStyle = FontStyle::bold(16.0);

pub const TITLE_RULE_Y: f32 = 34.0;
pub const TITLE_RULE_WIDTH: f32 = 0.5;

// ============================================================================
// FIELD RENDERER
// ============================================================================

pub const FIELD_FONT: FontStyle = FontStyle::normal(11.0);

/// Value starts this far right of the rule's left end.
pub const FIELD_VALUE_INSET: f32 = 1.0;

/// Value baseline sits this far above the anchor.
pub const FIELD_VALUE_RAISE: f32 = 1.2;

/// Horizontal room lost to the inset on both sides when fitting the value.
pub const FIELD_FIT_PADDING: f32 = 2.0;

/// Rule is drawn this far below the anchor.
pub const FIELD_RULE_OFFSET: f32 = 0.6;

/// Label baseline sits this far below the anchor.
pub const FIELD_LABEL_OFFSET: f32 = 4.5;

// ============================================================================
// COMMON BLOCK (offsets from the block's starting y)
// ============================================================================

pub const COMMON_TOP: f32 = 44.0;

/// Fixed height of the common block; the next section always starts here.
pub const COMMON_HEIGHT: f32 = 102.0;

pub const COMMON_HEADING_FONT: FontStyle = FontStyle::bold(12.0);
pub const DATE_RECEIVED_X: f32 = 112.0;

pub const FIRST_NAME: FieldSlot = FieldSlot::new(14.0, 13.0, 40.0);
pub const LAST_NAME: FieldSlot = FieldSlot::new(60.0, 13.0, 40.0);
pub const ADDRESS: FieldSlot = FieldSlot::new(106.0, 13.0, 86.0);

pub const SUITE: FieldSlot = FieldSlot::new(14.0, 24.0, 40.0);
pub const CITY: FieldSlot = FieldSlot::new(60.0, 24.0, 40.0);
pub const EMAIL: FieldSlot = FieldSlot::new(106.0, 24.0, 86.0);

pub const HOME_PHONE: FieldSlot = FieldSlot::new(14.0, 35.0, 40.0);
pub const WORK_PHONE: FieldSlot = FieldSlot::new(60.0, 35.0, 40.0);
pub const EXTENSION: FieldSlot = FieldSlot::new(106.0, 35.0, 40.0);

pub const CHECKBOX_FONT: FontStyle = FontStyle::normal(11.0);
pub const CHECKBOX_WIDTH: f32 = 12.0;
pub const CHECKBOX_HEIGHT: f32 = 5.0;

/// Label baseline relative to the top edge of its box.
pub const CHECKBOX_LABEL_DROP: f32 = 4.0;

pub const CHECKBOXES: [CheckboxSlot; 6] = [
    CheckboxSlot::new(14.0, 40.0, "Location", 29.0),
    CheckboxSlot::new(58.0, 40.0, "Cord", 73.0),
    CheckboxSlot::new(102.0, 40.0, "Remote Control", 117.0),
    CheckboxSlot::new(14.0, 49.0, "Albums/CDs/Cassettes", 29.0),
    CheckboxSlot::new(74.0, 49.0, "DVDs/VHS", 91.0),
    CheckboxSlot::new(112.0, 49.0, "Cables", 127.0),
];

pub const DEPOSIT: FieldSlot = FieldSlot::new(54.0, 58.0, 34.0);
pub const PAYMENT_METHOD: FieldSlot = FieldSlot::new(100.0, 58.0, 50.0);

pub const SEPARATOR_DY: f32 = 66.0;
pub const SEPARATOR_WIDTH: f32 = 0.8;

pub const ITEM: FieldSlot = FieldSlot::new(14.0, 79.0, 46.0);
pub const BRAND: FieldSlot = FieldSlot::new(64.0, 79.0, 40.0);
pub const REPEATED_ID_DY: f32 = 79.0;
pub const REPEATED_ID_LABEL_X: f32 = 112.0;
pub const REPEATED_ID_VALUE_X: f32 = 150.0;

pub const MODEL_NUMBER: FieldSlot = FieldSlot::new(14.0, 91.0, 46.0);
pub const SERIAL_NUMBER: FieldSlot = FieldSlot::new(64.0, 91.0, 40.0);

pub const ACCESSORIES_DY: f32 = 100.0;
pub const ACCESSORIES_WIDTH: f32 = 180.0;
pub const ACCESSORIES_FONT: FontStyle = FontStyle::normal(10.0);

// ============================================================================
// TEXT BOXES (shared by both variants)
// ============================================================================

pub const BOX_TITLE_FONT: FontStyle = FontStyle::bold(11.0);
pub const BOX_TEXT_FONT: FontStyle = FontStyle::normal(10.0);
pub const BOX_LINE_WIDTH: f32 = 0.3;

/// Lowest baseline inside a box sits this far above its bottom edge.
pub const BOX_TEXT_BOTTOM_PAD: f32 = 2.0;

// ============================================================================
// DROP-OFF BODY (offsets from the end of the common block)
// ============================================================================

pub const DROP_OFF_BOX_HEIGHT: f32 = 58.0;
pub const DROP_OFF_SECOND_BOX_DY: f32 = 65.0;
pub const DROP_OFF_TITLE_X: f32 = 16.0;
pub const DROP_OFF_TITLE_DY: f32 = 6.0;
pub const DROP_OFF_TEXT_DY: f32 = 12.0;
pub const DROP_OFF_WRAP_WIDTH: f32 = 176.0;

// ============================================================================
// PICK-UP BODY (offsets from the table's final y)
// ============================================================================

/// Gap between the common block and the line-item table.
pub const TABLE_GAP: f32 = 2.0;

pub const PICK_UP_TITLE_DY: f32 = 8.0;
pub const PICK_UP_BOX_DY: f32 = 10.0;
pub const PICK_UP_TEXT_DY: f32 = 16.0;
pub const PICK_UP_BOX_WIDTH: f32 = 88.0;
pub const PICK_UP_BOX_HEIGHT: f32 = 44.0;
pub const PICK_UP_LEFT_BOX_X: f32 = 14.0;
pub const PICK_UP_RIGHT_BOX_X: f32 = 108.0;
pub const PICK_UP_TEXT_INSET: f32 = 2.0;
pub const PICK_UP_WRAP_WIDTH: f32 = 84.0;

pub const TOTALS_DY: f32 = 62.0;

/// Offsets of the totals lines below the first one.
pub const PARTS_DY: f32 = 0.0;
pub const DELIVERY_DY: f32 = 7.0;
pub const LABOUR_DY: f32 = 14.0;
pub const DEPOSIT_DY: f32 = 21.0;
pub const TOTAL_DY: f32 = 29.0;
pub const PAYABLE_DY: f32 = 37.0;

pub const TOTALS_FONT: FontStyle = FontStyle::normal(10.0);
pub const TOTALS_EMPHASIS_FONT: FontStyle = FontStyle::bold(10.0);

/// Technician and finish date share rows with the bold totals.
pub const TECHNICIANS_DY: f32 = TOTAL_DY;
pub const FINISHED_DY: f32 = 36.0;

/// Room left of the right-aligned totals for the technician names.
pub const TECHNICIANS_WIDTH: f32 = 120.0;

/// Vertical space the pick-up body needs below the table.
pub const PICK_UP_BODY_HEIGHT: f32 = TOTALS_DY + PAYABLE_DY;

/// Last baseline the pick-up body may use before it moves to a new page.
pub const PICK_UP_BODY_LIMIT: f32 = FOOTER_Y - 6.0;

// ============================================================================
// LINE-ITEM TABLE
// ============================================================================

pub const TABLE_FONT_SIZE: f32 = 9.0;
pub const TABLE_CELL_PADDING: f32 = 1.8;
pub const TABLE_LINE_WIDTH: f32 = 0.1;

/// Header row fill, 238/255 grey.
pub const TABLE_HEAD_FILL: f32 = 238.0 / 255.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_width() {
        assert_eq!(CONTENT_WIDTH, 182.0);
        assert_eq!(MARGIN_LEFT + CONTENT_WIDTH, CONTENT_RIGHT);
    }

    #[test]
    fn test_common_block_fits_its_height() {
        assert!(ACCESSORIES_DY < COMMON_HEIGHT);
        assert!(MODEL_NUMBER.dy + FIELD_LABEL_OFFSET < ACCESSORIES_DY);
    }

    #[test]
    fn test_fields_stay_inside_content() {
        for slot in [
            FIRST_NAME,
            LAST_NAME,
            ADDRESS,
            SUITE,
            CITY,
            EMAIL,
            HOME_PHONE,
            WORK_PHONE,
            EXTENSION,
            DEPOSIT,
            PAYMENT_METHOD,
            ITEM,
            BRAND,
            MODEL_NUMBER,
            SERIAL_NUMBER,
        ] {
            assert!(slot.x >= MARGIN_LEFT);
            assert!(slot.x + slot.width <= CONTENT_RIGHT);
        }
    }

    #[test]
    fn test_pick_up_boxes_side_by_side() {
        assert!(PICK_UP_LEFT_BOX_X + PICK_UP_BOX_WIDTH < PICK_UP_RIGHT_BOX_X);
        assert_eq!(PICK_UP_RIGHT_BOX_X + PICK_UP_BOX_WIDTH, CONTENT_RIGHT);
    }
}
