//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for form drawing. The IR is a
//! "bytecode" representation that sits between the form composers and the
//! finished PDF document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │    Forms    │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │  (drivers)  │     │  (Vec<Op>)  │     │           │     │  (PDF)   │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Dump exactly what will be drawn (`workform --ir`)
//! 2. **Optimizable**: Remove redundant font and line-width changes
//! 3. **Testable**: Assert form layout without parsing a PDF
//!
//! ## Example
//!
//! ```
//! use workform::ir::{Alignment, Op, Program};
//! use workform::metrics::FontStyle;
//!
//! let mut program = Program::new();
//! program.push(Op::SetFont(FontStyle::bold(16.0)));
//! program.push(Op::Text {
//!     x: 14.0,
//!     y: 31.0,
//!     content: "Customer Pick Up Form".into(),
//!     align: Alignment::Left,
//! });
//! program.push(Op::SetLineWidth(0.5));
//! program.push(Op::Line { x1: 14.0, y1: 34.0, x2: 196.0, y2: 34.0 });
//!
//! // Inspect the IR
//! println!("{:#?}", program);
//!
//! // Optimize and generate the document
//! let pdf = program.optimize().to_pdf().unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod codegen;
mod ops;
mod optimize;

// Re-export the ops types (codegen and optimize add methods to Program via impl)
pub use codegen::encode_win_ansi;
pub use ops::*;
