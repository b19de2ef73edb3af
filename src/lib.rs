//! # Workform - Work-Order Paper Forms
//!
//! Workform draws the two fixed-format paper forms of a repair shop from a
//! work-order record:
//!
//! - **Drop-off form**: customer and equipment details plus space for the
//!   problem description and bench notes
//! - **Pick-up form**: the same details plus the billed line items and totals
//!
//! Layout reproduces the legacy printed form exactly: every field sits at a
//! fixed coordinate on A4 paper, overlong values are truncated with `...`,
//! and missing data prints as `-` or `$0.00`. Rendering never fails because
//! of the content of a record.
//!
//! ## Quick Start
//!
//! ```
//! use workform::{FormConfig, WorkOrderDetail};
//! use workform::backend::PdfBackend;
//! use workform::forms::{DropOffForm, Form};
//!
//! let item = WorkOrderDetail::from_json(r#"{
//!     "reference_id": 1042,
//!     "customer": { "first_name": "Jane", "last_name": "Doe" },
//!     "item_name": "Turntable",
//!     "deposit": 20.0
//! }"#)?;
//!
//! let mut doc = PdfBackend::a4();
//! let form = DropOffForm::new(&item).render(&mut doc, &FormConfig::default())?;
//!
//! assert_eq!(form.filename, "drop-off-form-1042.pdf");
//! # Ok::<(), workform::FormError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Work-order record (serde) |
//! | [`format`] | Field formatters with `-` / `$0.00` fallbacks |
//! | [`fit`] | Truncation of text to a measured width |
//! | [`metrics`] | Helvetica advance widths and word wrap |
//! | [`layout`] | Every coordinate and size on the forms |
//! | [`ir`] | Drawing ops, optimizer and PDF codegen |
//! | [`backend`] | The drawing capability forms are written against |
//! | [`forms`] | Header, common block, tables and the two forms |
//! | [`config`] | Shop letterhead and warranty text |
//! | [`error`] | Error types |

pub mod backend;
pub mod config;
pub mod error;
pub mod fit;
pub mod format;
pub mod forms;
pub mod ir;
pub mod layout;
pub mod metrics;
pub mod model;

// Re-exports for convenience
pub use backend::{DrawingBackend, PdfBackend, RenderedForm};
pub use config::FormConfig;
pub use error::FormError;
pub use forms::{Form, generate_drop_off_form, generate_pickup_form};
pub use model::WorkOrderDetail;
