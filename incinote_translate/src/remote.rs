//! Remote translation through a LibreTranslate-compatible endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::TextTransform;
use crate::config::TranslationConfig;
use crate::error::{Result, TranslateError};
use crate::offline::OfflineGlossary;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Posts text to `<endpoint>/translate`.
///
/// [`TextTransform::transform`] never surfaces an error: a non-2xx status,
/// a transport failure or an unexpected body all fall back to the offline
/// glossary, with the same output as calling it directly.
pub struct RemoteTranslator {
    client: Client,
    base_url: String,
    source: String,
    target: String,
    api_key: Option<String>,
    fallback: OfflineGlossary,
}

impl RemoteTranslator {
    pub fn new(config: &TranslationConfig, fallback: OfflineGlossary) -> Result<Self> {
        let base_url = config.endpoint.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(TranslateError::Endpoint(config.endpoint.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!("Creating RemoteTranslator for {base_url}");
        Ok(Self {
            client,
            base_url,
            source: config.source.clone(),
            target: config.target.clone(),
            api_key: config.api_key.clone(),
            fallback,
        })
    }

    /// Single request with no retry.
    pub async fn try_translate(&self, text: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: &self.source,
            target: &self.target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<TranslateResponse>()
            .await?;

        Ok(response.translated_text)
    }
}

#[async_trait]
impl TextTransform for RemoteTranslator {
    async fn transform(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match self.try_translate(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Remote translation failed, using offline glossary: {e}");
                self.fallback.translate(text)
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
