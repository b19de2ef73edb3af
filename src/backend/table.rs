//! # Grid Tables
//!
//! Lays out a header row plus body rows as a ruled grid, the way the printed
//! pick-up form shows its line items.
//!
//! ## Column Widths
//!
//! Every column is at least as wide as its header. Space left over after the
//! minimums goes to the columns whose content wants it, in proportion to how
//! much more they want. When everything fits on one line the columns are
//! stretched proportionally to fill the table width.
//!
//! ## Pagination
//!
//! A row that would cross the bottom margin moves to a new page, where the
//! header row is drawn again at the top margin.

use crate::ir::{DrawState, Op, RectStyle};
use crate::layout::{self, PageSize};
use crate::metrics::{self, FontStyle, PT_PER_MM};

/// Visual parameters of a grid table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    /// Font size in points for header and body cells.
    pub font_size: f32,
    pub cell_padding: f32,
    pub line_width: f32,
    /// Grey level of the header row fill.
    pub head_fill: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Where continuation pages start drawing.
    pub page_top: f32,
    /// No row may extend below this `y`.
    pub page_bottom: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            font_size: layout::TABLE_FONT_SIZE,
            cell_padding: layout::TABLE_CELL_PADDING,
            line_width: layout::TABLE_LINE_WIDTH,
            head_fill: layout::TABLE_HEAD_FILL,
            margin_left: layout::MARGIN_LEFT,
            margin_right: layout::PAGE.width - layout::CONTENT_RIGHT,
            page_top: layout::CONTINUATION_TOP,
            page_bottom: layout::CONTINUATION_BOTTOM,
        }
    }
}

/// A table to draw: header cells, body rows and where to start.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub start_y: f32,
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl TableSpec {
    pub fn new(start_y: f32, head: Vec<String>, body: Vec<Vec<String>>) -> Self {
        Self {
            start_y,
            head,
            body,
            style: TableStyle::default(),
        }
    }

    fn column_count(&self) -> usize {
        self.body
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.head.len()))
            .max()
            .unwrap_or(0)
    }

    fn head_font(&self) -> FontStyle {
        FontStyle::bold(self.style.font_size)
    }

    fn body_font(&self) -> FontStyle {
        FontStyle::normal(self.style.font_size)
    }
}

/// Drawing ops for a table plus the `y` just below its last row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TableLayout {
    pub ops: Vec<Op>,
    pub final_y: f32,
}

/// Lay out `spec` on pages of `page` size. `state` is the drawing state in
/// effect before the table; the returned ops restore it afterwards.
pub(crate) fn layout_table(spec: &TableSpec, page: PageSize, state: &DrawState) -> TableLayout {
    let columns = spec.column_count();
    if columns == 0 {
        return TableLayout {
            ops: Vec::new(),
            final_y: spec.start_y,
        };
    }

    let style = &spec.style;
    let available = page.width - style.margin_left - style.margin_right;
    let widths = column_widths(spec, columns, available);

    let head = wrap_row(&spec.head, &widths, spec.head_font(), style.cell_padding);
    let body: Vec<WrappedRow> = spec
        .body
        .iter()
        .map(|row| wrap_row(row, &widths, spec.body_font(), style.cell_padding))
        .collect();

    let mut ops = vec![Op::SetLineWidth(style.line_width)];
    let mut y = spec.start_y;

    if y + head.height > style.page_bottom {
        ops.push(Op::NewPage);
        y = style.page_top;
    }
    y = draw_row(&mut ops, spec, &widths, &head, y, RowKind::Head);
    let mut rows_on_page = 0;

    for row in &body {
        if rows_on_page > 0 && y + row.height > style.page_bottom {
            ops.push(Op::NewPage);
            y = draw_row(&mut ops, spec, &widths, &head, style.page_top, RowKind::Head);
            rows_on_page = 0;
        }
        y = draw_row(&mut ops, spec, &widths, row, y, RowKind::Body);
        rows_on_page += 1;
    }

    ops.push(Op::SetFont(state.font));
    ops.push(Op::SetLineWidth(state.line_width));

    TableLayout { ops, final_y: y }
}

fn column_widths(spec: &TableSpec, columns: usize, available: f32) -> Vec<f32> {
    let pad = 2.0 * spec.style.cell_padding;
    let head_font = spec.head_font();
    let body_font = spec.body_font();

    let minimum: Vec<f32> = (0..columns)
        .map(|i| {
            let label = spec.head.get(i).map(String::as_str).unwrap_or("");
            metrics::text_width(label, &head_font) + pad
        })
        .collect();

    let preferred: Vec<f32> = (0..columns)
        .map(|i| {
            spec.body
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| metrics::text_width(cell, &body_font) + pad)
                .fold(minimum[i], f32::max)
        })
        .collect();

    let total_preferred: f32 = preferred.iter().sum();
    if total_preferred <= available {
        return preferred
            .iter()
            .map(|w| w * available / total_preferred)
            .collect();
    }

    let total_minimum: f32 = minimum.iter().sum();
    if total_minimum >= available {
        return minimum
            .iter()
            .map(|w| w * available / total_minimum)
            .collect();
    }

    let slack = available - total_minimum;
    let wanted = total_preferred - total_minimum;
    minimum
        .iter()
        .zip(&preferred)
        .map(|(min, pref)| min + slack * (pref - min) / wanted)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Head,
    Body,
}

/// A row whose cells are already wrapped to their column widths.
struct WrappedRow {
    cells: Vec<Vec<String>>,
    height: f32,
}

fn wrap_row(cells: &[String], widths: &[f32], font: FontStyle, padding: f32) -> WrappedRow {
    let cells: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let content = cells.get(i).map(String::as_str).unwrap_or("");
            metrics::split_text(content, width - 2.0 * padding, &font)
        })
        .collect();

    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    WrappedRow {
        cells,
        height: 2.0 * padding + lines as f32 * font.line_height(),
    }
}

/// Emit one row at `top` and return the `y` below it.
fn draw_row(
    ops: &mut Vec<Op>,
    spec: &TableSpec,
    widths: &[f32],
    row: &WrappedRow,
    top: f32,
    kind: RowKind,
) -> f32 {
    let style = &spec.style;
    let (font, rect_style) = match kind {
        RowKind::Head => (
            spec.head_font(),
            RectStyle::FillStroke {
                gray: style.head_fill,
            },
        ),
        RowKind::Body => (spec.body_font(), RectStyle::Stroke),
    };
    // First baseline sits one cap height below the padding.
    let first_baseline = top + style.cell_padding + font.size * 0.8 / PT_PER_MM;

    ops.push(Op::SetFont(font));
    let mut x = style.margin_left;
    for (width, lines) in widths.iter().zip(&row.cells) {
        ops.push(Op::Rect {
            x,
            y: top,
            width: *width,
            height: row.height,
            style: rect_style,
        });
        for (i, line) in lines.iter().enumerate() {
            ops.push(Op::Text {
                x: x + style.cell_padding,
                y: first_baseline + i as f32 * font.line_height(),
                content: line.clone(),
                align: Default::default(),
            });
        }
        x += width;
    }

    top + row.height
}
