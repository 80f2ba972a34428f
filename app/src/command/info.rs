use incinote_config::Config;
use incinote_translate::{OfflineGlossary, Provider};

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location
/// - Generate defaults
/// - Translation provider, endpoint and languages (API key masked)
/// - Glossary size
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::config_path()?;
        let config = Config::load()?;

        println!("=== incinote Configuration ===\n");

        println!("Config File:");
        if path.exists() {
            println!("  Path: {}", path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", path.display());
        }
        println!();

        println!("Generate:");
        println!("  Translate: {}", config.generate.translate);
        println!("  JSON Output: {}", config.generate.json);
        println!();

        let translation = &config.translation;
        println!("Translation:");
        println!("  Provider: {}", translation.provider.as_str());
        if translation.provider == Provider::Remote {
            println!("  Endpoint: {}/translate", translation.endpoint.trim_end_matches('/'));
            println!("  Timeout: {}s", translation.timeout_secs);
        }
        println!("  Languages: {} -> {}", translation.source, translation.target);
        println!(
            "  API Key: {}",
            translation
                .api_key
                .as_deref()
                .map_or_else(|| "(not set)".to_string(), mask_secret)
        );

        let glossary = OfflineGlossary::new(&translation.glossary)?;
        println!(
            "  Glossary: {} entries ({} from config)",
            glossary.len(),
            translation.glossary.len()
        );

        Ok(())
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_secrets_keep_their_ends() {
        assert_eq!(mask_secret("abcd1234efgh5678"), "abcd...5678");
    }

    #[test]
    fn short_secrets_are_hidden() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("12345678"), "***");
    }
}
