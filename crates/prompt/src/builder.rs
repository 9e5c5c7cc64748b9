//! Prompt builders for turning a selected topic into a request string.
//!
//! `build_exam_prompt` and `build_problem_prompt` are the fixed, total
//! builders. `PromptBuilder` renders the same prompts through Handlebars so
//! the wording and exam year can be configured per workspace; with default
//! settings both paths produce identical strings.

use crate::types::{TopicEntry, TopicKind};
use handlebars::Handlebars;
use olympia_core::config::{PromptSettings, DEFAULT_EXAM_YEAR};
use olympia_core::{AppError, AppResult};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Default exam prompt template.
pub const DEFAULT_EXAM_TEMPLATE: &str = "Cho tôi đề thi {{topic}} năm {{year}}";

/// Default problem prompt template.
pub const DEFAULT_PROBLEM_TEMPLATE: &str = "Cho tôi dạng bài về {{topic}}";

/// Leading "Đề Thi" plus whitespace, any case.
static EXAM_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Đề Thi\s+").expect("static pattern"));

/// Strip the leading "Đề Thi " (any case) and lowercase the rest.
///
/// Names without the prefix are only lowercased.
pub fn normalize_exam_name(display_name: &str) -> String {
    EXAM_PREFIX.replace(display_name, "").to_lowercase()
}

/// Lowercase a problem category name.
pub fn normalize_problem_name(display_name: &str) -> String {
    display_name.to_lowercase()
}

/// Build the request for an exam paper.
///
/// # Example
/// ```
/// use olympia_prompt::build_exam_prompt;
///
/// assert_eq!(
///     build_exam_prompt("Đề Thi Bảng A"),
///     "Cho tôi đề thi bảng a năm 2024"
/// );
/// ```
pub fn build_exam_prompt(display_name: &str) -> String {
    format!(
        "Cho tôi đề thi {} năm {}",
        normalize_exam_name(display_name),
        DEFAULT_EXAM_YEAR
    )
}

/// Build the request for a problem category.
///
/// # Example
/// ```
/// use olympia_prompt::build_problem_prompt;
///
/// assert_eq!(build_problem_prompt("Ma Trận"), "Cho tôi dạng bài về ma trận");
/// ```
pub fn build_problem_prompt(display_name: &str) -> String {
    format!("Cho tôi dạng bài về {}", normalize_problem_name(display_name))
}

/// Template-driven prompt builder.
///
/// Template variables:
/// - `topic`: normalized name (prefix stripped for exams, lowercased)
/// - `name`: raw display name
/// - `id`: entry id, empty when rendering a bare name
/// - `year`: configured exam year
pub struct PromptBuilder {
    registry: Handlebars<'static>,
    year: u16,
}

impl PromptBuilder {
    /// Create a builder from prompt settings, compiling both templates.
    ///
    /// Fails with `AppError::Prompt` if a custom template does not parse.
    pub fn new(settings: &PromptSettings) -> AppResult<Self> {
        let mut registry = Handlebars::new();

        // Prompts are plain text, not HTML
        registry.register_escape_fn(handlebars::no_escape);

        let exam = settings
            .exam_template
            .as_deref()
            .unwrap_or(DEFAULT_EXAM_TEMPLATE);
        let problem = settings
            .problem_template
            .as_deref()
            .unwrap_or(DEFAULT_PROBLEM_TEMPLATE);

        for (kind, template) in [(TopicKind::Exam, exam), (TopicKind::Problem, problem)] {
            registry
                .register_template_string(kind.as_str(), template)
                .map_err(|e| {
                    AppError::Prompt(format!("Failed to register {} template: {}", kind, e))
                })?;
        }

        tracing::debug!(
            "Prompt builder ready (year {}, custom exam template: {}, custom problem template: {})",
            settings.year,
            settings.exam_template.is_some(),
            settings.problem_template.is_some()
        );

        Ok(Self {
            registry,
            year: settings.year,
        })
    }

    /// Builder with the built-in templates and a given exam year.
    pub fn with_year(year: u16) -> AppResult<Self> {
        Self::new(&PromptSettings {
            year,
            ..PromptSettings::default()
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// Render the prompt for a catalog entry.
    pub fn render(&self, kind: TopicKind, entry: &TopicEntry) -> AppResult<String> {
        self.render_parts(kind, &entry.id, &entry.display_name)
    }

    /// Render the prompt for a bare display name.
    pub fn render_name(&self, kind: TopicKind, display_name: &str) -> AppResult<String> {
        self.render_parts(kind, "", display_name)
    }

    fn render_parts(&self, kind: TopicKind, id: &str, display_name: &str) -> AppResult<String> {
        let topic = match kind {
            TopicKind::Exam => normalize_exam_name(display_name),
            TopicKind::Problem => normalize_problem_name(display_name),
        };

        let data = json!({
            "topic": topic,
            "name": display_name,
            "id": id,
            "year": self.year,
        });

        self.registry
            .render(kind.as_str(), &data)
            .map_err(|e| AppError::Prompt(format!("Failed to render {} prompt: {}", kind, e)))
    }
}
