//! French ticket templates rendered from a [`FieldRecord`].
//!
//! Every template is a pure function of the record; the work notes also embed
//! the current time, which comes from a [`Clock`] so it can be frozen.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::fields::FieldRecord;

/// Hard cap on the title length, in characters.
pub const TITLE_MAX_CHARS: usize = 120;

/// Title used when neither application, error nor impact is known.
pub const FALLBACK_TITLE: &str = "Incident — détails à préciser";

pub const UNKNOWN_APPLICATION: &str = "application non précisée";

pub const NO_STEPS: &str = "Aucune étape communiquée pour le moment.";

pub const NEXT_ACTIONS: &str = "Prochaines actions : analyse des journaux, corrélation des alertes et vérification des dépendances.";

pub const MONITORING: &str =
    "Surveillance continue en place, le ticket sera mis à jour à chaque évolution.";

pub const GREETING: &str = "Bonjour,";

pub const REASSURANCE: &str = "Nos équipes sont pleinement mobilisées pour rétablir le service dans les meilleurs délais.";

pub const CLOSING: &str =
    "Nous reviendrons vers vous dès que nous aurons plus d'informations. Cordialement.";

/// fr-FR date and time, as embedded in the work notes.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Source of the timestamp written into the work notes.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The four generated ticket fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNotes {
    pub title: String,
    pub description: String,
    pub work_notes: String,
    pub user_comment: String,
}

/// Render all four templates using the local wall clock.
#[must_use]
pub fn render(fields: &FieldRecord) -> RenderedNotes {
    render_with_clock(fields, &SystemClock)
}

#[must_use]
pub fn render_with_clock(fields: &FieldRecord, clock: &impl Clock) -> RenderedNotes {
    RenderedNotes {
        title: title(fields),
        description: description(fields),
        work_notes: work_notes(fields, clock.now()),
        user_comment: user_comment(fields),
    }
}

/// `"<app>: <error> – impact <impact>"`, skipping absent parts.
#[must_use]
pub fn title(fields: &FieldRecord) -> String {
    let parts: Vec<String> = [
        fields.application.as_ref().map(|app| format!("{app}:")),
        fields.error_code.clone(),
        fields.impact.as_ref().map(|impact| format!("– impact {impact}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let title = if parts.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        parts.join(" ")
    };

    title.chars().take(TITLE_MAX_CHARS).collect()
}

/// Context lines, one per known field.
#[must_use]
pub fn description(fields: &FieldRecord) -> String {
    let application = fields
        .application
        .as_deref()
        .unwrap_or(UNKNOWN_APPLICATION);
    let mut context = format!("Contexte : {application}");
    if let Some(env) = &fields.environment {
        context.push_str(&format!(" (env : {env})"));
    }

    let mut lines = vec![context];
    lines.extend(labeled("Début constaté", fields.observed_when.as_deref()));
    lines.extend(labeled("Périmètre impacté", fields.region.as_deref()));
    lines.extend(labeled("Impact déclaré", fields.impact.as_deref()));
    lines.extend(labeled("Priorité/Sévérité", fields.urgency.as_deref()));
    lines.extend(labeled("Symptômes/erreur", fields.error_code.as_deref()));
    lines.join("\n")
}

/// Internal log: acknowledgement, caller, context, actions and follow-up,
/// separated by blank lines.
#[must_use]
pub fn work_notes(fields: &FieldRecord, now: NaiveDateTime) -> String {
    let mut blocks = vec![format!(
        "[{}] Incident pris en compte.",
        now.format(TIMESTAMP_FORMAT)
    )];

    if let Some(reporter) = &fields.reporter {
        blocks.push(format!("Appelant : {reporter}."));
    }

    blocks.push(description(fields));

    let actions = if fields.steps.is_empty() {
        NO_STEPS.to_string()
    } else {
        fields
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("- Étape {} : {step}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };
    blocks.push(format!("Actions réalisées :\n{actions}"));

    blocks.push(NEXT_ACTIONS.to_string());
    blocks.push(MONITORING.to_string());
    blocks.join("\n\n")
}

/// Customer-facing status update. Lines are joined with a single newline.
#[must_use]
pub fn user_comment(fields: &FieldRecord) -> String {
    let error = fields
        .error_code
        .as_ref()
        .map(|code| format!(" (erreur : {code})"))
        .unwrap_or_default();

    let status = fields.application.as_ref().map_or_else(
        || format!("Nous analysons actuellement un incident en cours{error}."),
        |app| format!("Nous analysons actuellement un incident affectant {app}{error}."),
    );

    let mut lines = vec![GREETING.to_string(), status];
    if let Some(impact) = &fields.impact {
        lines.push(format!("Impact déclaré : {impact}."));
    }
    lines.push(REASSURANCE.to_string());
    lines.push(CLOSING.to_string());
    lines.join("\n")
}

fn labeled(label: &str, value: Option<&str>) -> Option<String> {
    value.map(|value| format!("{label} : {value}"))
}
