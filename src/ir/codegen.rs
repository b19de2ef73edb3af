//! # Code Generation
//!
//! Converts IR programs to PDF bytes.
//!
//! Text is set in the base-14 fonts with WinAnsi encoding, so no font
//! program is embedded. Page content streams are Flate-compressed.
//!
//! IR coordinates are millimetres from the top-left corner; PDF user space is
//! points from the bottom-left, so every `y` is flipped against the page
//! height here and nowhere else.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use super::ops::{Alignment, DrawState, Op, Program, RectStyle};
use crate::error::FormError;
use crate::layout::PageSize;
use crate::metrics::{self, PT_PER_MM};

impl Program {
    /// Compile the IR program to a PDF on A4 paper.
    pub fn to_pdf(&self) -> Result<Vec<u8>, FormError> {
        self.to_pdf_with_page(PageSize::A4)
    }

    /// Compile the IR program to a PDF with a specific page size.
    pub fn to_pdf_with_page(&self, page: PageSize) -> Result<Vec<u8>, FormError> {
        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let fonts = FontTable::collect(self, &mut alloc);
        let pages = PageWriter::new(page, &fonts).write_all(self);

        let mut page_ids = Vec::with_capacity(pages.len());
        for content in pages {
            let page_id = alloc();
            let content_id = alloc();
            let compressed = deflate(&content.finish())?;
            pdf.stream(content_id, &compressed)
                .filter(Filter::FlateDecode);
            page_ids.push((page_id, content_id));
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for (page_id, content_id) in &page_ids {
            let mut pdf_page = pdf.page(*page_id);
            pdf_page
                .media_box(Rect::new(
                    0.0,
                    0.0,
                    page.width * PT_PER_MM,
                    page.height * PT_PER_MM,
                ))
                .parent(pages_id)
                .contents(*content_id);
            let mut resources = pdf_page.resources();
            let mut font_dict = resources.fonts();
            for entry in &fonts.entries {
                font_dict.pair(Name(entry.resource.as_bytes()), entry.id);
            }
        }

        for entry in &fonts.entries {
            pdf.type1_font(entry.id)
                .base_font(Name(entry.base_font.as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        Ok(pdf.finish())
    }
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>, FormError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// One base-14 font referenced by the program.
struct FontEntry {
    base_font: &'static str,
    resource: String,
    id: Ref,
}

/// Fonts in order of first use, each with a page resource name (`F1`, `F2`…).
struct FontTable {
    entries: Vec<FontEntry>,
}

impl FontTable {
    fn collect(program: &Program, alloc: &mut impl FnMut() -> Ref) -> Self {
        let mut entries: Vec<FontEntry> = Vec::new();
        let mut state = DrawState::default();

        for op in program {
            match op {
                Op::SetFont(font) => state.font = *font,
                Op::Text { .. } => {
                    let base_font = state.font.base_font();
                    if !entries.iter().any(|e| e.base_font == base_font) {
                        entries.push(FontEntry {
                            base_font,
                            resource: format!("F{}", entries.len() + 1),
                            id: alloc(),
                        });
                    }
                }
                _ => {}
            }
        }

        Self { entries }
    }

    fn resource(&self, base_font: &str) -> &str {
        self.entries
            .iter()
            .find(|e| e.base_font == base_font)
            .map(|e| e.resource.as_str())
            .unwrap_or("F1")
    }
}

/// Walks the ops, splitting them into one content stream per page.
struct PageWriter<'a> {
    page: PageSize,
    fonts: &'a FontTable,
    state: DrawState,
}

impl<'a> PageWriter<'a> {
    fn new(page: PageSize, fonts: &'a FontTable) -> Self {
        Self {
            page,
            fonts,
            state: DrawState::default(),
        }
    }

    fn write_all(mut self, program: &Program) -> Vec<Content> {
        let mut pages = Vec::new();
        let mut content = self.begin_page();

        for op in program {
            match op {
                Op::NewPage => {
                    pages.push(std::mem::replace(&mut content, self.begin_page()));
                }
                Op::SetFont(font) => self.state.font = *font,
                Op::SetLineWidth(width) => {
                    self.state.line_width = *width;
                    content.set_line_width(width * PT_PER_MM);
                }
                Op::Text {
                    x,
                    y,
                    content: text,
                    align,
                } => self.text(&mut content, *x, *y, text, *align),
                Op::Line { x1, y1, x2, y2 } => {
                    content.move_to(self.px(*x1), self.py(*y1));
                    content.line_to(self.px(*x2), self.py(*y2));
                    content.stroke();
                }
                Op::Rect {
                    x,
                    y,
                    width,
                    height,
                    style,
                } => self.rect(&mut content, *x, *y, *width, *height, *style),
            }
        }

        pages.push(content);
        pages
    }

    /// Fresh content stream carrying the current stroke width.
    fn begin_page(&self) -> Content {
        let mut content = Content::new();
        content.set_line_width(self.state.line_width * PT_PER_MM);
        content
    }

    fn text(&self, content: &mut Content, x: f32, y: f32, text: &str, align: Alignment) {
        let width = metrics::text_width(text, &self.state.font);
        let left = match align {
            Alignment::Left => x,
            Alignment::Right => x - width,
        };
        let resource = self.fonts.resource(self.state.font.base_font());
        let encoded = encode_win_ansi(text);

        content
            .begin_text()
            .set_font(Name(resource.as_bytes()), self.state.font.size)
            .next_line(self.px(left), self.py(y))
            .show(Str(&encoded))
            .end_text();
    }

    fn rect(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    ) {
        // PDF rectangles grow upward from their lower-left corner.
        let (rx, ry) = (self.px(x), self.py(y + height));
        let (rw, rh) = (width * PT_PER_MM, height * PT_PER_MM);

        match style {
            RectStyle::Stroke => {
                content.rect(rx, ry, rw, rh);
                content.stroke();
            }
            RectStyle::FillStroke { gray } => {
                content.save_state();
                content.set_fill_gray(gray);
                content.rect(rx, ry, rw, rh);
                content.fill_nonzero_and_stroke();
                content.restore_state();
            }
        }
    }

    fn px(&self, x: f32) -> f32 {
        x * PT_PER_MM
    }

    fn py(&self, y: f32) -> f32 {
        (self.page.height - y) * PT_PER_MM
    }
}

/// Encode text for a WinAnsi (CP-1252) base-14 font. Characters outside the
/// code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            ' '..='~' => ch as u8,
            '\u{A0}'..='\u{FF}' => ch as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontStyle;

    fn sample_program() -> Program {
        Program::from_iter([
            Op::SetFont(FontStyle::bold(16.0)),
            Op::Text {
                x: 14.0,
                y: 31.0,
                content: "Customer Drop Off Form".into(),
                align: Alignment::Left,
            },
            Op::SetLineWidth(0.5),
            Op::Line {
                x1: 14.0,
                y1: 34.0,
                x2: 196.0,
                y2: 34.0,
            },
            Op::Rect {
                x: 14.0,
                y: 40.0,
                width: 12.0,
                height: 5.0,
                style: RectStyle::Stroke,
            },
            Op::SetFont(FontStyle::normal(10.0)),
            Op::Text {
                x: 196.0,
                y: 60.0,
                content: "Total: $35.00".into(),
                align: Alignment::Right,
            },
        ])
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        let bytes = sample_program().to_pdf().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(32)..]);
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn test_fonts_registered() {
        let bytes = sample_program().to_pdf().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Helvetica-Bold"));
        assert!(text.contains("/Helvetica"));
        assert!(text.contains("/WinAnsiEncoding"));
    }

    #[test]
    fn test_one_page_per_new_page_op() {
        let mut program = sample_program();
        program.push(Op::NewPage);
        program.push(Op::Text {
            x: 14.0,
            y: 20.0,
            content: "continued".into(),
            align: Alignment::Left,
        });
        let bytes = program.to_pdf().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn test_empty_program_still_has_a_page() {
        let bytes = Program::new().to_pdf().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn test_deterministic_output() {
        let a = sample_program().to_pdf().unwrap();
        let b = sample_program().to_pdf().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Cord: 2"), b"Cord: 2".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("5€"), vec![b'5', 0x80]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
