//! Ticketing-system export shape and the end-to-end pipeline.

use serde::{Deserialize, Serialize};

use crate::extract::extract;
use crate::fields::FieldRecord;
use crate::render::{Clock, RenderedNotes, SystemClock, render_with_clock};

/// The four ticket fields, keyed by their ticketing-system names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub short_description: String,
    pub description: String,
    pub work_notes: String,
    pub comments: String,
}

impl ExportRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<RenderedNotes> for ExportRecord {
    fn from(notes: RenderedNotes) -> Self {
        Self {
            short_description: notes.title,
            description: notes.description,
            work_notes: notes.work_notes,
            comments: notes.user_comment,
        }
    }
}

impl From<&RenderedNotes> for ExportRecord {
    fn from(notes: &RenderedNotes) -> Self {
        Self::from(notes.clone())
    }
}

/// Extract then render, using the local wall clock.
#[must_use]
pub fn generate(raw: &str) -> (FieldRecord, RenderedNotes) {
    generate_with_clock(raw, &SystemClock)
}

#[must_use]
pub fn generate_with_clock(raw: &str, clock: &impl Clock) -> (FieldRecord, RenderedNotes) {
    let fields = extract(raw);
    let notes = render_with_clock(&fields, clock);
    (fields, notes)
}
