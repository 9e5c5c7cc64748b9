//! Classify command handler.

use super::print_json;
use clap::Args;
use olympia_core::AppResult;
use olympia_prompt::TopicClassifier;

/// Check whether a question is linear algebra / olympiad style
#[derive(Args, Debug)]
pub struct ClassifyCommand {
    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassifyCommand {
    pub fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing classify command");

        let result = TopicClassifier::new().classify(&self.text.join(" "));

        if self.json {
            return print_json(&result);
        }

        println!("Linear algebra: {}", result.is_linear_algebra);
        println!("Olympiad style: {}", result.is_olympic);
        println!("Confidence:     {:?}", result.confidence);
        for pattern in &result.olympic_patterns {
            println!("  matched: {}", pattern);
        }

        Ok(())
    }
}
