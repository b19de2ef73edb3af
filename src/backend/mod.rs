//! # Drawing Backend
//!
//! The capability the form composers draw through: an A4 page measured in
//! millimetres with a top-left origin, a current font, a current stroke width,
//! text measurement, word wrap, grid tables and a page break.
//!
//! Composers are written against [`DrawingBackend`] and never see the concrete
//! document. [`PdfBackend`] records every call as an [`ir::Op`](crate::ir::Op)
//! so tests can inspect exactly what a form draws, then compiles the recording
//! to PDF on [`save`](DrawingBackend::save).

mod pdf;
mod table;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FormError;
use crate::ir::Alignment;
use crate::layout::PageSize;
use crate::metrics::FontStyle;

pub use pdf::PdfBackend;
pub use table::{TableSpec, TableStyle};

/// Page-drawing capability used by every form composer.
pub trait DrawingBackend {
    /// Physical page size in millimetres.
    fn page_size(&self) -> PageSize;

    /// Select the font for subsequent text and measurements.
    fn set_font(&mut self, font: FontStyle);

    /// The currently selected font.
    fn font(&self) -> FontStyle;

    /// Stroke width in millimetres for subsequent lines and rectangles.
    fn set_line_width(&mut self, width: f32);

    /// Draw one line of text with its baseline at `y`.
    fn text(&mut self, x: f32, y: f32, content: &str, align: Alignment);

    /// Draw left-aligned lines starting at baseline `y`, one line height apart.
    fn text_lines(&mut self, x: f32, y: f32, lines: &[String]) {
        let step = self.line_height();
        for (i, line) in lines.iter().enumerate() {
            self.text(x, y + step * i as f32, line, Alignment::Left);
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Stroke a rectangle whose top-left corner is `(x, y)`.
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Width of `content` in the current font, in millimetres.
    fn text_width(&self, content: &str) -> f32;

    /// Baseline-to-baseline distance for the current font.
    fn line_height(&self) -> f32;

    /// Word-wrap `content` to `max_width` using the current font.
    fn split_text(&self, content: &str, max_width: f32) -> Vec<String>;

    /// Lay out a grid table, breaking pages as needed. Returns the `y` just
    /// below the last row drawn.
    fn table(&mut self, spec: &TableSpec) -> f32;

    /// Start a new page; subsequent drawing lands on it.
    fn add_page(&mut self);

    /// Finish the document and return it under `filename`.
    fn save(&mut self, filename: &str) -> Result<RenderedForm, FormError>;
}

/// A finished form document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedForm {
    pub filename: String,
    pub pdf: Vec<u8>,
}

impl RenderedForm {
    /// Write the document into `dir` and return its path.
    ///
    /// The bytes go to a temporary sibling first and are renamed into place,
    /// so an interrupted write never leaves a truncated PDF under the final
    /// name.
    pub fn persist(&self, dir: impl AsRef<Path>) -> Result<PathBuf, FormError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let path = dir.join(&self.filename);
        let tmp = dir.join(format!(".{}.tmp", self.filename));

        let written = write_synced(&tmp, &self.pdf).and_then(|()| fs::rename(&tmp, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        log::debug!("persisted {} ({} bytes)", path.display(), self.pdf.len());
        Ok(path)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
