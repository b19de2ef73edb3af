//! PDF implementation of [`DrawingBackend`].

use super::table::{self, TableSpec};
use super::{DrawingBackend, RenderedForm};
use crate::error::FormError;
use crate::ir::{Alignment, DrawState, Op, Program, RectStyle};
use crate::layout::PageSize;
use crate::metrics::{self, FontStyle};

/// Records drawing calls as IR and compiles them to PDF on save.
///
/// The backend starts like a fresh document: one A4 page, 16pt Helvetica and
/// the default stroke width. Fonts and line widths are emitted exactly when
/// the caller sets them; redundant changes are dropped by the optimizer when
/// the document is saved, not while recording.
#[derive(Debug, Clone)]
pub struct PdfBackend {
    program: Program,
    state: DrawState,
    page: PageSize,
}

impl Default for PdfBackend {
    fn default() -> Self {
        Self::a4()
    }
}

impl PdfBackend {
    /// A backend drawing on A4 paper.
    pub fn a4() -> Self {
        Self::new(PageSize::A4)
    }

    pub fn new(page: PageSize) -> Self {
        Self {
            program: Program::new(),
            state: DrawState::default(),
            page,
        }
    }

    /// Everything recorded so far, unoptimized.
    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_program(self) -> Program {
        self.program
    }

    /// Number of pages drawn on so far.
    pub fn page_count(&self) -> usize {
        self.program.page_count()
    }

    fn compile(&self) -> Result<Vec<u8>, FormError> {
        let optimized = self.program.clone().optimize();
        log::debug!(
            "optimized {} ops to {} across {} page(s)",
            self.program.len(),
            optimized.len(),
            optimized.page_count()
        );
        optimized.to_pdf_with_page(self.page)
    }
}

impl DrawingBackend for PdfBackend {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn set_font(&mut self, font: FontStyle) {
        self.state.font = font;
        self.program.push(Op::SetFont(font));
    }

    fn font(&self) -> FontStyle {
        self.state.font
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
        self.program.push(Op::SetLineWidth(width));
    }

    fn text(&mut self, x: f32, y: f32, content: &str, align: Alignment) {
        self.program.push(Op::Text {
            x,
            y,
            content: content.to_string(),
            align,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.program.push(Op::Line { x1, y1, x2, y2 });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.program.push(Op::Rect {
            x,
            y,
            width,
            height,
            style: RectStyle::Stroke,
        });
    }

    fn text_width(&self, content: &str) -> f32 {
        metrics::text_width(content, &self.state.font)
    }

    fn line_height(&self) -> f32 {
        self.state.font.line_height()
    }

    fn split_text(&self, content: &str, max_width: f32) -> Vec<String> {
        metrics::split_text(content, max_width, &self.state.font)
    }

    fn table(&mut self, spec: &TableSpec) -> f32 {
        let layout = table::layout_table(spec, self.page, &self.state);
        log::debug!(
            "table: {} body row(s), ends at y={:.2}",
            spec.body.len(),
            layout.final_y
        );
        self.program.extend(layout.ops);
        layout.final_y
    }

    fn add_page(&mut self) {
        self.program.push(Op::NewPage);
    }

    fn save(&mut self, filename: &str) -> Result<RenderedForm, FormError> {
        let pdf = self.compile()?;
        log::info!(
            "rendered {} ({} page(s), {} bytes)",
            filename,
            self.page_count(),
            pdf.len()
        );
        Ok(RenderedForm {
            filename: filename.to_string(),
            pdf,
        })
    }
}
