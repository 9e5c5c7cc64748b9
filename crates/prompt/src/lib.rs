//! Topic prompts for Olympia.
//!
//! This crate provides:
//! - Built-in exam and problem catalogs, with YAML workspace overrides
//! - Prompt builders (fixed and Handlebars-templated)
//! - Selection dispatch to an `on_topic_select` callback
//! - Query parsing into retrieval filters
//! - Linear-algebra topic classification

pub mod builder;
pub mod catalog;
pub mod classifier;
pub mod loader;
pub mod query;
pub mod selector;
pub mod types;

// Re-export main types
pub use builder::{build_exam_prompt, build_problem_prompt, PromptBuilder};
pub use catalog::{builtin_catalog, exam_catalog, problem_catalog};
pub use classifier::{Classification, Confidence, TopicClassifier};
pub use loader::{list_catalog_files, load_catalog};
pub use query::{parse_query, ParsedQuery, QueryCategory, SearchFilter};
pub use selector::TopicSelector;
pub use types::{Catalog, TopicEntry, TopicKind};
