//! Select command handler.
//!
//! Activates a catalog entry and forwards its prompt to stdout.

use super::{print_json, workspace_builder, workspace_catalog};
use clap::Args;
use olympia_core::{config::AppConfig, AppResult};
use olympia_prompt::{TopicKind, TopicSelector};
use serde_json::json;

/// Select a topic by id and emit its prompt
#[derive(Args, Debug)]
pub struct SelectCommand {
    /// Catalog to select from (exam, problem)
    pub kind: TopicKind,

    /// Topic id (see `olympia topics`)
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SelectCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing select command for {} topic '{}'", self.kind, self.id);

        let plain = !self.json;
        let selection = self.select_with(config, |prompt: &str| {
            if plain {
                println!("{}", prompt);
            }
        })?;

        if self.json {
            print_json(&json!({
                "kind": self.kind,
                "id": self.id,
                "name": selection.name,
                "prompt": selection.prompt,
            }))?;
        }

        Ok(())
    }

    /// Run the selection against the workspace catalogs, handing the prompt
    /// to `on_topic_select`.
    fn select_with<F>(&self, config: &AppConfig, on_topic_select: F) -> AppResult<Selection>
    where
        F: FnMut(&str),
    {
        let exams = workspace_catalog(config, TopicKind::Exam)?;
        let problems = workspace_catalog(config, TopicKind::Problem)?;
        let builder = workspace_builder(config)?;

        let mut selector = TopicSelector::new(exams, problems, builder, on_topic_select)?;
        let prompt = selector.select(self.kind, &self.id)?;
        let name = selector
            .catalog(self.kind)
            .find(&self.id)
            .map(|e| e.display_name.clone());

        Ok(Selection { name, prompt })
    }
}

struct Selection {
    name: Option<String>,
    prompt: String,
}
