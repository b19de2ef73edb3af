//! # Line Items and Totals
//!
//! The pick-up form's billing section: a grid of line items followed by the
//! money summary.
//!
//! Line totals and quantities are printed as the API formatted them. Only the
//! form totals are computed here:
//!
//! ```text
//! total   = parts + delivery + labour      (missing amounts count as 0)
//! payable = total - deposit
//! ```

use crate::backend::{DrawingBackend, TableSpec};
use crate::format::{DASH, ZERO_MONEY, money, money_decimal, text_or_dash, to_decimal};
use crate::ir::Alignment;
use crate::layout::{
    CONTENT_RIGHT, DELIVERY_DY, DEPOSIT_DY, LABOUR_DY, PARTS_DY, PAYABLE_DY, TOTAL_DY,
    TOTALS_EMPHASIS_FONT, TOTALS_FONT,
};
use crate::model::WorkOrderDetail;
use rust_decimal::Decimal;

/// Column headings of the line-item table.
pub const LINE_ITEM_HEAD: [&str; 4] = ["Item", "Price", "Quantity", "Total"];

/// Body rows for the line-item table.
///
/// A work order without line items still gets one placeholder row so the
/// printed grid never collapses to a bare header.
pub fn line_item_rows(item: &WorkOrderDetail) -> Vec<Vec<String>> {
    if item.line_items.is_empty() {
        return vec![vec![
            DASH.to_string(),
            ZERO_MONEY.to_string(),
            DASH.to_string(),
            DASH.to_string(),
        ]];
    }

    item.line_items
        .iter()
        .map(|line| {
            vec![
                text_or_dash(line.item_name.as_deref()),
                money(line.unit_price),
                text_or_dash(line.quantity_text.as_deref()),
                text_or_dash(line.line_total_text.as_deref()),
            ]
        })
        .collect()
}

/// Draw the line-item table from `start_y`; returns the `y` below it.
pub fn draw_line_items(doc: &mut dyn DrawingBackend, item: &WorkOrderDetail, start_y: f32) -> f32 {
    let head = LINE_ITEM_HEAD.iter().map(|h| h.to_string()).collect();
    let spec = TableSpec::new(start_y, head, line_item_rows(item));
    doc.table(&spec)
}

/// Money summary derived from a work order, computed in decimal so sums of
/// API amounts never pick up binary rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub parts: Decimal,
    pub delivery: Decimal,
    pub labour: Decimal,
    pub deposit: Decimal,
    pub total: Decimal,
    pub payable: Decimal,
}

impl Totals {
    pub fn from_item(item: &WorkOrderDetail) -> Self {
        let amount = |value: Option<f64>| value.and_then(to_decimal).unwrap_or(Decimal::ZERO);

        let parts = amount(item.parts_total);
        let delivery = amount(item.delivery_total);
        let labour = amount(item.labour_total);
        let deposit = amount(Some(item.deposit));
        let total = parts.saturating_add(delivery).saturating_add(labour);

        Self {
            parts,
            delivery,
            labour,
            deposit,
            total,
            payable: total.saturating_sub(deposit),
        }
    }
}

/// Draw the six right-aligned totals lines starting at baseline `totals_y`.
///
/// Leaves the emphasis font selected.
pub fn draw_totals(doc: &mut dyn DrawingBackend, item: &WorkOrderDetail, totals_y: f32) {
    let totals = Totals::from_item(item);

    doc.set_font(TOTALS_FONT);
    let lines = [
        (PARTS_DY, format!("Parts Total: {}", money(item.parts_total))),
        (
            DELIVERY_DY,
            format!("Pick Up / Delivery: {}", money(item.delivery_total)),
        ),
        (LABOUR_DY, format!("Labour Total: {}", money(item.labour_total))),
        (DEPOSIT_DY, format!("Deposit: {}", money(Some(item.deposit)))),
    ];
    for (dy, line) in &lines {
        doc.text(CONTENT_RIGHT, totals_y + dy, line, Alignment::Right);
    }

    doc.set_font(TOTALS_EMPHASIS_FONT);
    let total = format!("Total: {}", money_decimal(totals.total));
    let payable = format!("Total Payable: {}", money_decimal(totals.payable));
    doc.text(CONTENT_RIGHT, totals_y + TOTAL_DY, &total, Alignment::Right);
    doc.text(CONTENT_RIGHT, totals_y + PAYABLE_DY, &payable, Alignment::Right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PdfBackend;
    use crate::ir::Op;
    use crate::model::LineItem;
    use pretty_assertions::assert_eq;

    fn billed() -> WorkOrderDetail {
        WorkOrderDetail {
            reference_id: 7,
            parts_total: Some(10.0),
            delivery_total: Some(5.0),
            labour_total: Some(20.0),
            deposit: 7.0,
            ..WorkOrderDetail::default()
        }
    }

    #[test]
    fn test_placeholder_row() {
        let rows = line_item_rows(&WorkOrderDetail::default());
        assert_eq!(rows, vec![vec!["-", "$0.00", "-", "-"]]);
    }

    #[test]
    fn test_rows_use_formatters() {
        let item = WorkOrderDetail {
            line_items: vec![
                LineItem {
                    line_item_id: 1,
                    item_name: Some("  Stylus  ".into()),
                    unit_price: Some(1234.5),
                    quantity_text: Some("2".into()),
                    line_total_text: Some("$2,469.00".into()),
                },
                LineItem {
                    line_item_id: 2,
                    ..LineItem::default()
                },
            ],
            ..WorkOrderDetail::default()
        };

        assert_eq!(
            line_item_rows(&item),
            vec![
                vec!["Stylus", "$1,234.50", "2", "$2,469.00"],
                vec!["-", "$0.00", "-", "-"],
            ]
        );
    }

    #[test]
    fn test_totals_arithmetic() {
        let totals = Totals::from_item(&billed());
        assert_eq!(totals.total, Decimal::from(35));
        assert_eq!(totals.payable, Decimal::from(28));
    }

    #[test]
    fn test_totals_missing_amounts_are_zero() {
        let item = WorkOrderDetail {
            labour_total: Some(40.0),
            deposit: 50.0,
            ..WorkOrderDetail::default()
        };
        let totals = Totals::from_item(&item);
        assert_eq!(totals.total, Decimal::from(40));
        assert_eq!(totals.payable, Decimal::from(-10));
    }

    #[test]
    fn test_totals_are_exact_decimal_sums() {
        let item = WorkOrderDetail {
            parts_total: Some(0.1),
            delivery_total: Some(0.2),
            labour_total: Some(1.005),
            deposit: 0.3,
            ..WorkOrderDetail::default()
        };
        let totals = Totals::from_item(&item);
        assert_eq!(totals.total, Decimal::new(1305, 3));
        assert_eq!(totals.payable, Decimal::new(1005, 3));

        let mut doc = PdfBackend::a4();
        draw_totals(&mut doc, &item, 200.0);
        let texts: Vec<&str> = doc.program().texts().collect();
        assert_eq!(&texts[4..], &["Total: $1.31", "Total Payable: $1.01"]);
    }

    #[test]
    fn test_draw_totals_text() {
        let mut doc = PdfBackend::a4();
        draw_totals(&mut doc, &billed(), 200.0);

        let texts: Vec<&str> = doc.program().texts().collect();
        assert_eq!(
            texts,
            vec![
                "Parts Total: $10.00",
                "Pick Up / Delivery: $5.00",
                "Labour Total: $20.00",
                "Deposit: $7.00",
                "Total: $35.00",
                "Total Payable: $28.00",
            ]
        );
    }

    #[test]
    fn test_draw_totals_geometry() {
        let mut doc = PdfBackend::a4();
        draw_totals(&mut doc, &billed(), 200.0);

        let placed: Vec<(f32, f32, Alignment)> = doc
            .program()
            .iter()
            .filter_map(|op| match op {
                Op::Text { x, y, align, .. } => Some((*x, *y, *align)),
                _ => None,
            })
            .collect();
        let ys: Vec<f32> = placed.iter().map(|p| p.1).collect();
        assert_eq!(ys, vec![200.0, 207.0, 214.0, 221.0, 229.0, 237.0]);
        assert!(placed
            .iter()
            .all(|(x, _, align)| *x == 196.0 && *align == Alignment::Right));
    }

    #[test]
    fn test_totals_emphasis_font() {
        let mut doc = PdfBackend::a4();
        draw_totals(&mut doc, &billed(), 200.0);
        assert_eq!(doc.font(), TOTALS_EMPHASIS_FONT);
    }

    #[test]
    fn test_draw_line_items_returns_table_end() {
        let mut doc = PdfBackend::a4();
        let end = draw_line_items(&mut doc, &billed(), 148.0);
        assert!(end > 148.0);

        let texts: Vec<&str> = doc.program().texts().collect();
        assert_eq!(
            texts,
            vec!["Item", "Price", "Quantity", "Total", "-", "$0.00", "-", "-"]
        );
    }
}
