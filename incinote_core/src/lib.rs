#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Incident note generation: free text in, four French ticket fields out.
//!
//! The crate exposes two pure functions, [`extract`] and [`render`], plus the
//! [`ExportRecord`] shape consumed by the ticketing system.

pub mod export;
pub mod extract;
pub mod fields;
pub mod render;

pub use export::{ExportRecord, generate, generate_with_clock};
pub use extract::{LabelMatcher, extract, extract_steps};
pub use fields::{Field, FieldRecord, STEP_LABELS};
pub use render::{Clock, FixedClock, RenderedNotes, SystemClock, render, render_with_clock};
