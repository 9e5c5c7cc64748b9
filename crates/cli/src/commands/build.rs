//! Build command handler.

use super::workspace_builder;
use clap::Args;
use olympia_core::{config::AppConfig, AppResult};
use olympia_prompt::TopicKind;

/// Build a prompt from an arbitrary display name
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Prompt kind (exam, problem)
    pub kind: TopicKind,

    /// Display name, e.g. "Đề Thi Bảng A" or "Ma Trận"
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl BuildCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let name = self.name.join(" ");
        tracing::info!("Executing build command for {} '{}'", self.kind, name);

        let prompt = workspace_builder(config)?.render_name(self.kind, &name)?;
        println!("{}", prompt);

        Ok(())
    }
}
