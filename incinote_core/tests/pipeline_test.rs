//! End-to-end tests for extraction and rendering.

use chrono::NaiveDate;
use incinote_core::render::{FALLBACK_TITLE, NO_STEPS, TITLE_MAX_CHARS};
use incinote_core::{ExportRecord, Field, FixedClock, extract, generate_with_clock, render_with_clock};

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 3, 1)
            .and_then(|date| date.and_hms_opt(23, 59, 0))
            .expect("valid test timestamp"),
    )
}

#[test]
fn checkout_incident_end_to_end() {
    let input = "app: Checkout\nerror: HTTP 500\nimpact: high\nsteps: restart pod; clear cache";
    let (fields, notes) = generate_with_clock(input, &clock());

    assert_eq!(fields.get(Field::Application), Some("Checkout"));
    assert_eq!(fields.get(Field::ErrorCode), Some("HTTP 500"));
    assert_eq!(fields.get(Field::Impact), Some("high"));
    assert_eq!(fields.steps, vec!["restart pod", "clear cache"]);

    assert_eq!(notes.title, "Checkout: HTTP 500 – impact high");
    assert!(notes.work_notes.starts_with("[01/03/2026 23:59:00] Incident pris en compte."));
    assert!(notes.work_notes.contains("- Étape 2 : clear cache"));

    let export = ExportRecord::from(&notes);
    assert_eq!(export.short_description, notes.title);
    assert_eq!(export.comments, notes.user_comment);
}

#[test]
fn unlabeled_inputs_produce_fallbacks() {
    for input in ["", "the site is down", "error in prod, impact unclear", "1. 2. 3."] {
        let fields = extract(input);
        for field in Field::ALL {
            assert_eq!(fields.get(field), None, "{field} matched in {input:?}");
        }
        assert!(fields.steps.is_empty());

        let notes = render_with_clock(&fields, &clock());
        assert_eq!(notes.title, FALLBACK_TITLE);
        assert!(notes.work_notes.contains(NO_STEPS));
    }
}

#[test]
fn full_record_renders_every_line() {
    let input = "\
Ticket: INC0012345
Application: Payments
Environment: production
Since: 16/10 07:30
Region: eu-west
Impact: all card payments rejected
Severity: P1
Error code: PAY_DECLINED
Reporter: Service desk
Steps:
1. Checked gateway status
2. Restarted payment workers";

    let (fields, notes) = generate_with_clock(input, &clock());
    assert_eq!(fields.get(Field::TicketRef), Some("INC0012345"));
    assert_eq!(fields.steps, vec!["Checked gateway status", "Restarted payment workers"]);

    assert_eq!(
        notes.description,
        "Contexte : Payments (env : production)\n\
         Début constaté : 16/10 07:30\n\
         Périmètre impacté : eu-west\n\
         Impact déclaré : all card payments rejected\n\
         Priorité/Sévérité : P1\n\
         Symptômes/erreur : PAY_DECLINED"
    );
    assert!(notes.work_notes.contains("Appelant : Service desk."));
    assert!(notes.user_comment.contains("affectant Payments (erreur : PAY_DECLINED)."));
}

#[test]
fn title_never_exceeds_cap() {
    let inputs = [
        format!("app: {}", "x".repeat(500)),
        format!("error: {}\nimpact: {}", "y".repeat(90), "z".repeat(90)),
        "app: short".to_string(),
    ];
    for input in &inputs {
        let notes = render_with_clock(&extract(input), &clock());
        assert!(notes.title.chars().count() <= TITLE_MAX_CHARS);
    }
}

#[test]
fn frozen_clock_renders_identical_notes() {
    let fields = extract("app: Checkout\ncaller: Ana\nsteps: - check logs");
    let first = render_with_clock(&fields, &clock());
    let second = render_with_clock(&fields, &clock());
    assert_eq!(first.work_notes, second.work_notes);
    assert_eq!(first, second);
}
