use incinote_core::extract;

use super::InputSource;

/// Strategy for printing the extracted field record as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = InputSource;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let fields = extract(&input.read()?);
        println!("{}", serde_json::to_string_pretty(&fields)?);
        Ok(())
    }
}
