//! Command handlers for the Olympia CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod build;
pub mod classify;
pub mod parse;
pub mod select;
pub mod topics;

// Re-export command types for convenience
pub use build::BuildCommand;
pub use classify::ClassifyCommand;
pub use parse::ParseCommand;
pub use select::SelectCommand;
pub use topics::TopicsCommand;

use olympia_core::{config::AppConfig, AppResult};
use olympia_prompt::{load_catalog, Catalog, PromptBuilder, TopicKind};
use serde::Serialize;

/// Load the catalog for a kind, honoring workspace overrides.
pub(crate) fn workspace_catalog(config: &AppConfig, kind: TopicKind) -> AppResult<Catalog> {
    load_catalog(&config.catalogs_dir(), kind)
}

/// Prompt builder configured from the workspace settings.
pub(crate) fn workspace_builder(config: &AppConfig) -> AppResult<PromptBuilder> {
    PromptBuilder::new(&config.prompts)
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
