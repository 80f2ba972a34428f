//! Label-based extraction of incident fields from free text.
//!
//! Each field is matched independently against the whole input: the first
//! `<label> [:=] <value>` occurrence in document order wins, and the value runs
//! to the end of its line. The step list is a greedy block capture from the
//! first `steps:` label to the end of the input.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::fields::{Field, FieldRecord, STEP_LABELS};

#[expect(clippy::expect_used, reason = "label table is static and covered by tests")]
static FIELD_MATCHERS: Lazy<Vec<(Field, LabelMatcher)>> = Lazy::new(|| {
    Field::ALL
        .iter()
        .map(|field| {
            let matcher = LabelMatcher::line(field.labels()).expect("field labels should compile");
            (*field, matcher)
        })
        .collect()
});

#[expect(clippy::expect_used, reason = "step labels are static and covered by tests")]
static STEP_MATCHER: Lazy<LabelMatcher> =
    Lazy::new(|| LabelMatcher::block(STEP_LABELS).expect("step labels should compile"));

#[expect(clippy::expect_used, reason = "pattern is a literal")]
static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|-)\s+").expect("ordinal pattern should compile"));

/// Characters separating individual steps inside the step block.
const STEP_SEPARATORS: [char; 4] = ['\n', ';', '•', '-'];

/// A compiled "any of these labels, then `:` or `=`" matcher.
#[derive(Debug, Clone)]
pub struct LabelMatcher {
    regex: Regex,
}

impl LabelMatcher {
    /// Matcher whose value runs from the delimiter to the end of the line.
    ///
    /// The value must start with a non-blank character, so `impact:` on its
    /// own does not count as a match.
    pub fn line(labels: &[&str]) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"(?i)\b(?:{})[ \t]*[:=][ \t]*([^\s][^\r\n]*)",
            Self::alternation(labels)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Matcher whose value runs from the delimiter to the end of the input.
    pub fn block(labels: &[&str]) -> Result<Self, regex::Error> {
        let pattern = format!(
            r"(?is)\b(?:{})[ \t]*[:=](.*)",
            Self::alternation(labels)
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Captured value of the first match in document order, untrimmed.
    #[must_use]
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    fn alternation(labels: &[&str]) -> String {
        labels
            .iter()
            .map(|label| {
                label
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"[ \t]+")
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Parse free text into a [`FieldRecord`]. Never fails.
#[must_use]
pub fn extract(raw: &str) -> FieldRecord {
    let text = raw.trim();
    let mut record = FieldRecord {
        raw_summary: text.to_string(),
        ..FieldRecord::default()
    };

    if text.is_empty() {
        return record;
    }

    for (field, matcher) in FIELD_MATCHERS.iter() {
        if let Some(value) = matcher.find(text) {
            record.set(*field, value);
        }
    }
    record.steps = extract_steps(text);

    debug!(
        "Extracted {} fields and {} steps from {} bytes",
        record.present_count(),
        record.steps.len(),
        text.len()
    );
    record
}

/// Ordered step list following the first `steps:` label, or empty.
///
/// The block is split on newlines, semicolons, bullets and hyphens; leading
/// `1. ` style ordinals are stripped and empty fragments dropped.
#[must_use]
pub fn extract_steps(text: &str) -> Vec<String> {
    let Some(block) = STEP_MATCHER.find(text) else {
        return Vec::new();
    };

    block
        .split(STEP_SEPARATORS)
        .map(|fragment| ORDINAL.replace(fragment.trim(), "").trim().to_string())
        .filter(|step| !step.is_empty())
        .collect()
}
