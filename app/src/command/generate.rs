use anyhow::Context;
use incinote_config::Config;
use incinote_core::{ExportRecord, RenderedNotes, generate};
use incinote_translate::{Provider, Translator, transform_notes};
use std::path::PathBuf;
use tracing::info;

use super::InputSource;

/// Input parameters for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateInput {
    pub source: InputSource,
    pub translate: bool,
    pub provider: Option<Provider>,
    pub json: bool,
    pub out: Option<PathBuf>,
}

/// Strategy for turning an incident description into the four ticket fields.
///
/// Extraction and rendering run first; the optional translation pass is
/// applied to each field independently, then the result is printed and
/// optionally written to disk as an export record.
#[derive(Debug, Clone, Copy)]
pub struct GenerateStrategy;

impl super::CommandStrategy for GenerateStrategy {
    type Input = GenerateInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let raw = input.source.read()?;

        let (fields, notes) = generate(&raw);
        info!(
            "Extracted {} fields and {} steps",
            fields.present_count(),
            fields.steps.len()
        );

        let notes = if input.translate || config.generate.translate {
            let mut translation = config.translation.clone();
            if let Some(provider) = input.provider {
                translation.provider = provider;
            }
            let translator = Translator::from_config(&translation)?;
            transform_notes(&translator, &notes).await
        } else {
            notes
        };

        let export = ExportRecord::from(&notes);
        if input.json || config.generate.json {
            println!("{}", export.to_json()?);
        } else {
            print!("{}", format_sections(&notes));
        }

        if let Some(path) = input.out {
            std::fs::write(&path, export.to_json()?)
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;
            info!("Wrote export record to {}", path.display());
        }

        Ok(())
    }
}

fn format_sections(notes: &RenderedNotes) -> String {
    [
        ("Titre", &notes.title),
        ("Description", &notes.description),
        ("Notes de travail", &notes.work_notes),
        ("Commentaire client", &notes.user_comment),
    ]
    .iter()
    .map(|(heading, body)| format!("=== {heading} ===\n{body}\n\n"))
    .collect()
}
