//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use anyhow::Context;
use std::io::Read;
use std::path::PathBuf;

mod extract;
mod generate;
mod info;
mod init;
mod version;

pub use extract::ExtractStrategy;
pub use generate::{GenerateInput, GenerateStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Where the incident description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
    Stdin,
}

impl InputSource {
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            Self::Text(text) => Ok(text.clone()),
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read incident description from stdin")?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn reads_file_and_inline_text() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("incident.txt");
        std::fs::write(&path, "app: Checkout").expect("Failed to write input");

        assert_eq!(
            InputSource::File(path).read().expect("file should be readable"),
            "app: Checkout"
        );
        assert_eq!(
            InputSource::Text("impact: high".to_string())
                .read()
                .expect("inline text is always readable"),
            "impact: high"
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = InputSource::File(PathBuf::from("/nonexistent/incident.txt")).read();
        assert!(err.is_err());
    }
}
