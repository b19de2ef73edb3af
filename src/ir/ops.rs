//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for form drawing.
//! The IR is a sequence of opcodes that can be inspected, optimized, and
//! compiled to a PDF.
//!
//! ## Design Philosophy
//!
//! The IR sits between the form composers and the finished document:
//!
//! ```text
//! Form drivers → DrawingBackend → IR (inspectable) → Optimizer → Codegen → PDF
//! ```
//!
//! Each opcode is one atomic drawing call in page millimetres with a top-left
//! origin. State changes (font, line width) are individual ops so the
//! optimizer can drop redundant ones and tests can assert exact sequences.

use crate::metrics::FontStyle;

/// Horizontal anchoring of a text op relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// How a rectangle is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectStyle {
    /// Outline only.
    Stroke,
    /// Grey fill (0.0 black … 1.0 white) with a black outline.
    FillStroke { gray: f32 },
}

/// Drawing state tracked for optimization and code generation.
///
/// Starts from the same defaults as a fresh document: 16pt Helvetica and a
/// 0.2mm stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub font: FontStyle,
    pub line_width: f32,
}

/// Stroke width of a fresh document, in millimetres.
pub const DEFAULT_LINE_WIDTH: f32 = 0.200025;

impl Default for DrawState {
    fn default() -> Self {
        Self {
            font: FontStyle::default(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// IR opcodes - the drawing commands of one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Pages ==========
    /// Finish the current page and start drawing on a new one.
    NewPage,

    // ========== State Changes ==========
    /// Select the font used by subsequent text.
    SetFont(FontStyle),

    /// Stroke width in millimetres for subsequent lines and rectangles.
    SetLineWidth(f32),

    // ========== Content ==========
    /// Single line of text with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        content: String,
        align: Alignment,
    },

    /// Straight stroked segment.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },

    /// Rectangle with its top-left corner at `(x, y)`.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: RectStyle,
    },
}

impl Op {
    /// True for ops that put ink on the page.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Op::Text { .. } | Op::Line { .. } | Op::Rect { .. })
    }

    /// Text content of a text op.
    pub fn text(&self) -> Option<&str> {
        match self {
            Op::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// A compiled IR program.
///
/// Contains a sequence of ops that can be optimized and compiled to a PDF.
/// Drawing starts on page one; every [`Op::NewPage`] adds another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Number of pages the program draws on.
    pub fn page_count(&self) -> usize {
        1 + self.ops.iter().filter(|op| matches!(op, Op::NewPage)).count()
    }

    /// All text content in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(Op::text)
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str) -> Op {
        Op::Text {
            x: 0.0,
            y: 0.0,
            content: content.into(),
            align: Alignment::Left,
        }
    }

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.page_count(), 1);
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::SetFont(FontStyle::bold(12.0)));
        program.push(text("Hello"));
        program.push(Op::NewPage);
        program.push(text("World"));
        assert_eq!(program.len(), 4);
        assert_eq!(program.page_count(), 2);
        assert_eq!(program.texts().collect::<Vec<_>>(), vec!["Hello", "World"]);
    }

    #[test]
    fn test_draw_state_default() {
        let state = DrawState::default();
        assert_eq!(state.font, FontStyle::normal(16.0));
        assert_eq!(state.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_is_drawing() {
        assert!(text("x").is_drawing());
        assert!(
            Op::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 0.0
            }
            .is_drawing()
        );
        assert!(!Op::SetLineWidth(0.5).is_drawing());
        assert!(!Op::NewPage.is_drawing());
    }

    #[test]
    fn test_op_debug() {
        let debug = format!("{:?}", text("Customer ID: 42"));
        assert!(debug.contains("Text"));
        assert!(debug.contains("Customer ID: 42"));
    }
}
