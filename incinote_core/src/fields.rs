//! Field names, label synonyms and the extracted field record.

use serde::{Deserialize, Serialize};

/// Labels introducing the step list. The step capture runs to end of input.
pub const STEP_LABELS: &[&str] = &["steps", "step"];

/// A scalar field that can be extracted from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Application,
    Environment,
    Impact,
    Urgency,
    ErrorCode,
    ObservedWhen,
    Region,
    Reporter,
    TicketRef,
}

impl Field {
    /// Every scalar field, in rendering order.
    pub const ALL: [Self; 9] = [
        Self::Application,
        Self::Environment,
        Self::Impact,
        Self::Urgency,
        Self::ErrorCode,
        Self::ObservedWhen,
        Self::Region,
        Self::Reporter,
        Self::TicketRef,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Environment => "environment",
            Self::Impact => "impact",
            Self::Urgency => "urgency",
            Self::ErrorCode => "errorCode",
            Self::ObservedWhen => "observedWhen",
            Self::Region => "region",
            Self::Reporter => "reporter",
            Self::TicketRef => "ticketRef",
        }
    }

    /// Label synonyms accepted for this field, matched case-insensitively.
    ///
    /// Multi-word labels accept any run of blanks between their words.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Application => &["app", "application", "service", "system"],
            Self::Environment => &["env", "environment"],
            Self::Impact => &["impact"],
            Self::Urgency => &["urgency", "priority", "prio", "severity"],
            Self::ErrorCode => &["error code", "error", "err", "code"],
            Self::ObservedWhen => &["since", "started", "start", "when", "timestamp", "time", "date"],
            Self::Region => &["region", "zone", "site", "area"],
            Self::Reporter => &["reporter", "reported by", "caller", "user"],
            Self::TicketRef => &["ticket", "ref", "incident", "inc"],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of extraction.
///
/// A `None` field means the label was not found. Present values are trimmed
/// and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_when: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_ref: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub raw_summary: String,
}

impl FieldRecord {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Store a value, dropping it if it is blank after trimming.
    pub fn set(&mut self, field: Field, value: &str) {
        let value = value.trim();
        *self.slot_mut(field) = (!value.is_empty()).then(|| value.to_string());
    }

    /// Number of scalar fields that were found.
    #[must_use]
    pub fn present_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }

    const fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Application => &self.application,
            Field::Environment => &self.environment,
            Field::Impact => &self.impact,
            Field::Urgency => &self.urgency,
            Field::ErrorCode => &self.error_code,
            Field::ObservedWhen => &self.observed_when,
            Field::Region => &self.region,
            Field::Reporter => &self.reporter,
            Field::TicketRef => &self.ticket_ref,
        }
    }

    const fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Application => &mut self.application,
            Field::Environment => &mut self.environment,
            Field::Impact => &mut self.impact,
            Field::Urgency => &mut self.urgency,
            Field::ErrorCode => &mut self.error_code,
            Field::ObservedWhen => &mut self.observed_when,
            Field::Region => &mut self.region,
            Field::Reporter => &mut self.reporter,
            Field::TicketRef => &mut self.ticket_ref,
        }
    }
}
