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

//! Text transforms applied to generated notes before export.
//!
//! Two strategies share the [`TextTransform`] contract: an offline glossary
//! pass and a remote translation endpoint. The remote strategy never fails;
//! any error degrades to the offline pass.

use async_trait::async_trait;
use incinote_core::RenderedNotes;
use tracing::info;

pub mod config;
pub mod error;
pub mod offline;
pub mod remote;

pub use config::{Provider, TranslationConfig};
pub use error::{Result, TranslateError};
pub use offline::{DRAFT_MARKER, OfflineGlossary, default_glossary};
pub use remote::RemoteTranslator;

/// Rewrites a piece of generated text. Infallible by contract.
#[async_trait]
pub trait TextTransform: Send + Sync {
    async fn transform(&self, text: &str) -> String;

    fn name(&self) -> &'static str;
}

/// Transform selected from configuration.
pub enum Translator {
    Offline(OfflineGlossary),
    Remote(RemoteTranslator),
}

impl Translator {
    pub fn from_config(config: &TranslationConfig) -> Result<Self> {
        let glossary = OfflineGlossary::new(&config.glossary)?;
        let translator = match config.provider {
            Provider::Offline => Self::Offline(glossary),
            Provider::Remote => Self::Remote(RemoteTranslator::new(config, glossary)?),
        };
        info!("Using {} text transform", translator.name());
        Ok(translator)
    }
}

#[async_trait]
impl TextTransform for Translator {
    async fn transform(&self, text: &str) -> String {
        match self {
            Self::Offline(glossary) => glossary.transform(text).await,
            Self::Remote(remote) => remote.transform(text).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Offline(glossary) => glossary.name(),
            Self::Remote(remote) => remote.name(),
        }
    }
}

/// Apply a transform to each of the four fields independently.
pub async fn transform_notes<T>(transform: &T, notes: &RenderedNotes) -> RenderedNotes
where
    T: TextTransform + ?Sized,
{
    let (title, description, work_notes, user_comment) = tokio::join!(
        transform.transform(&notes.title),
        transform.transform(&notes.description),
        transform.transform(&notes.work_notes),
        transform.transform(&notes.user_comment),
    );

    RenderedNotes {
        title,
        description,
        work_notes,
        user_comment,
    }
}
