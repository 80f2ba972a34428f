//! Offline glossary substitution.
//!
//! Replaces known English incident vocabulary with French terms, whole words
//! only, and prefixes the result with a draft marker so readers know it was
//! not reviewed by a translator.

use async_trait::async_trait;
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};

use crate::TextTransform;
use crate::error::Result;

/// Prefix marking text produced by the offline pass.
pub const DRAFT_MARKER: &str = "[Brouillon FR] ";

/// Built-in English to French incident vocabulary.
#[must_use]
pub fn default_glossary() -> Vec<(&'static str, &'static str)> {
    vec![
        ("clear cache", "vider le cache"),
        ("check logs", "vérifier les journaux"),
        ("roll back", "retour arrière"),
        ("rollback", "retour arrière"),
        ("restart", "redémarrer"),
        ("restarted", "redémarré"),
        ("reboot", "redémarrage"),
        ("critical", "critique"),
        ("high", "élevé"),
        ("medium", "moyen"),
        ("low", "faible"),
        ("down", "indisponible"),
        ("unavailable", "indisponible"),
        ("outage", "panne"),
        ("slow", "lent"),
        ("error", "erreur"),
        ("errors", "erreurs"),
        ("failed", "en échec"),
        ("failure", "défaillance"),
        ("timeout", "délai dépassé"),
        ("logs", "journaux"),
        ("log", "journal"),
        ("users", "utilisateurs"),
        ("user", "utilisateur"),
        ("customers", "clients"),
        ("database", "base de données"),
        ("server", "serveur"),
        ("network", "réseau"),
        ("login", "connexion"),
        ("payment", "paiement"),
        ("payments", "paiements"),
        ("deployment", "déploiement"),
        ("deploy", "déployer"),
        ("checked", "vérifié"),
        ("check", "vérifier"),
        ("all", "tous"),
        ("production", "production"),
        ("staging", "préproduction"),
    ]
}

/// Whole-word glossary substitution.
#[derive(Debug, Clone)]
pub struct OfflineGlossary {
    pattern: Option<Regex>,
    terms: HashMap<String, String>,
}

impl OfflineGlossary {
    /// Build from the default glossary plus `extra` entries, which win on
    /// conflicts.
    pub fn new(extra: &BTreeMap<String, String>) -> Result<Self> {
        let mut terms: HashMap<String, String> = default_glossary()
            .into_iter()
            .map(|(en, fr)| (en.to_lowercase(), fr.to_string()))
            .collect();
        for (en, fr) in extra {
            let key = en.trim().to_lowercase();
            if !key.is_empty() {
                terms.insert(key, fr.clone());
            }
        }

        Ok(Self {
            pattern: Self::compile(&terms)?,
            terms,
        })
    }

    /// Substitute glossary terms and prefix the draft marker.
    ///
    /// Blank input stays blank; text already carrying the marker is not
    /// marked twice.
    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let body = text.strip_prefix(DRAFT_MARKER).unwrap_or(text);
        let substituted = self.pattern.as_ref().map_or_else(
            || body.to_string(),
            |pattern| {
                pattern
                    .replace_all(body, |caps: &Captures<'_>| self.replacement(&caps[0]))
                    .into_owned()
            },
        );
        format!("{DRAFT_MARKER}{substituted}")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn replacement(&self, matched: &str) -> String {
        let key = matched.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let Some(term) = self.terms.get(&key) else {
            return matched.to_string();
        };

        if matched.chars().next().is_some_and(char::is_uppercase) {
            capitalize(term)
        } else {
            term.clone()
        }
    }

    /// One alternation over every term, longest first so multi-word entries
    /// take precedence over their parts.
    fn compile(terms: &HashMap<String, String>) -> Result<Option<Regex>> {
        if terms.is_empty() {
            return Ok(None);
        }

        let mut keys: Vec<&String> = terms.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|key| {
                key.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|");

        Ok(Some(Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?))
    }
}

#[async_trait]
impl TextTransform for OfflineGlossary {
    async fn transform(&self, text: &str) -> String {
        self.translate(text)
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn glossary() -> OfflineGlossary {
        OfflineGlossary::new(&BTreeMap::new()).expect("default glossary should compile")
    }

    #[test]
    fn substitutes_whole_words_only() {
        let out = glossary().translate("Impact déclaré : high. Highway closed.");
        assert_eq!(out, "[Brouillon FR] Impact déclaré : élevé. Highway closed.");
    }

    #[test]
    fn multi_word_terms_win_over_parts() {
        let out = glossary().translate("- Étape 1 : check logs");
        assert_eq!(out, "[Brouillon FR] - Étape 1 : vérifier les journaux");
    }

    #[test]
    fn preserves_leading_capital() {
        let out = glossary().translate("Restart the server");
        assert_eq!(out, "[Brouillon FR] Redémarrer the serveur");
    }

    #[test]
    fn marker_is_not_doubled() {
        let glossary = glossary();
        let once = glossary.translate("slow login");
        let twice = glossary.translate(&once);
        assert_eq!(once, "[Brouillon FR] lent connexion");
        assert_eq!(once, twice);
    }

    #[test]
    fn blank_text_stays_blank() {
        assert_eq!(glossary().translate(""), "");
        assert_eq!(glossary().translate("  \n"), "  \n");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn extra_entries_override_defaults() {
        let mut extra = BTreeMap::new();
        extra.insert("high".to_string(), "haut".to_string());
        extra.insert("pod".to_string(), "conteneur".to_string());
        let glossary = OfflineGlossary::new(&extra).expect("glossary should compile");

        assert_eq!(glossary.translate("high pod"), "[Brouillon FR] haut conteneur");
        assert_eq!(glossary.len(), default_glossary().len() + 1);
    }
}
