//! # IR Optimizer
//!
//! Optimization passes that transform IR programs to reduce redundancy
//! before code generation.
//!
//! ## Optimization Passes
//!
//! 1. **Remove empty text**: Text ops with nothing to show
//! 2. **Eliminate dead state changes**: A font or line width that is replaced
//!    before anything is drawn with it
//! 3. **Remove redundant state**: Don't emit SetFont(f) if `f` is already active
//!
//! None of the passes changes what ends up on the page.

use super::ops::{DrawState, Op, Program};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = self.ops;
        let ops = remove_empty_text(ops);
        let ops = remove_dead_state_changes(ops);
        let ops = remove_redundant_state(ops);
        Program { ops }
    }
}

/// Drop text ops whose content is empty.
fn remove_empty_text(ops: Vec<Op>) -> Vec<Op> {
    ops.into_iter()
        .filter(|op| !matches!(op, Op::Text { content, .. } if content.is_empty()))
        .collect()
}

/// Drop a state change when another change of the same kind follows before
/// any drawing op.
fn remove_dead_state_changes(ops: Vec<Op>) -> Vec<Op> {
    let mut result: Vec<Op> = Vec::with_capacity(ops.len());
    let mut pending_font: Option<usize> = None;
    let mut pending_width: Option<usize> = None;
    let mut dead = vec![false; ops.len()];

    for (i, op) in ops.iter().enumerate() {
        match op {
            Op::SetFont(_) => {
                if let Some(prev) = pending_font.replace(i) {
                    dead[prev] = true;
                }
            }
            Op::SetLineWidth(_) => {
                if let Some(prev) = pending_width.replace(i) {
                    dead[prev] = true;
                }
            }
            op if op.is_drawing() => {
                pending_font = None;
                pending_width = None;
            }
            _ => {}
        }
    }

    for (op, is_dead) in ops.into_iter().zip(dead) {
        if !is_dead {
            result.push(op);
        }
    }
    result
}

/// Remove state changes that don't change the current state.
fn remove_redundant_state(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = DrawState::default();

    for op in ops {
        match &op {
            Op::SetFont(font) => {
                if *font != state.font {
                    state.font = *font;
                    result.push(op);
                }
            }
            Op::SetLineWidth(width) => {
                if *width != state.line_width {
                    state.line_width = *width;
                    result.push(op);
                }
            }

            // Non-state ops pass through unchanged
            _ => result.push(op),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Alignment;
    use crate::metrics::FontStyle;

    fn text(content: &str) -> Op {
        Op::Text {
            x: 14.0,
            y: 20.0,
            content: content.into(),
            align: Alignment::Left,
        }
    }

    #[test]
    fn test_remove_empty_text() {
        let ops = vec![text(""), text("a"), text("")];
        let result = remove_empty_text(ops);
        assert_eq!(result, vec![text("a")]);
    }

    #[test]
    fn test_remove_redundant_font() {
        let ops = vec![
            Op::SetFont(FontStyle::bold(12.0)),
            text("a"),
            Op::SetFont(FontStyle::bold(12.0)), // Redundant
            text("b"),
        ];
        let result = remove_redundant_state(ops);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_remove_redundant_default_state() {
        let ops = vec![
            Op::SetFont(FontStyle::normal(16.0)), // Redundant (document default)
            Op::SetLineWidth(crate::ir::DEFAULT_LINE_WIDTH), // Redundant (document default)
            text("a"),
        ];
        let result = remove_redundant_state(ops);
        assert_eq!(result, vec![text("a")]);
    }

    #[test]
    fn test_state_survives_page_break() {
        let ops = vec![
            Op::SetLineWidth(0.8),
            text("a"),
            Op::NewPage,
            Op::SetLineWidth(0.8), // Redundant: codegen carries state across pages
            text("b"),
        ];
        let result = remove_redundant_state(ops);
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_dead_state_changes() {
        let ops = vec![
            Op::SetFont(FontStyle::normal(11.0)), // Dead
            Op::SetLineWidth(0.3),                // Dead
            Op::SetFont(FontStyle::bold(11.0)),
            Op::SetLineWidth(0.5),
            text("a"),
            Op::SetFont(FontStyle::normal(10.0)), // Live: nothing replaces it
        ];
        let result = remove_dead_state_changes(ops);
        assert_eq!(
            result,
            vec![
                Op::SetFont(FontStyle::bold(11.0)),
                Op::SetLineWidth(0.5),
                text("a"),
                Op::SetFont(FontStyle::normal(10.0)),
            ]
        );
    }

    #[test]
    fn test_full_optimization() {
        let ops = vec![
            Op::SetFont(FontStyle::normal(11.0)), // Dead
            Op::SetFont(FontStyle::bold(12.0)),
            text("Customer ID: 7"),
            Op::SetFont(FontStyle::bold(12.0)), // Redundant
            text(""),                           // Empty
            text("Date Received: -"),
        ];

        let optimized = Program { ops }.optimize();

        assert_eq!(optimized.len(), 3);
        assert_eq!(optimized.ops[0], Op::SetFont(FontStyle::bold(12.0)));
        assert_eq!(optimized.ops[1], text("Customer ID: 7"));
        assert_eq!(optimized.ops[2], text("Date Received: -"));
    }
}
