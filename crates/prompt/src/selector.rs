//! Topic selection dispatch.
//!
//! A `TopicSelector` stands in for the two topic menus: it owns the exam
//! and problem catalogs, renders the prompt for whichever entry is
//! activated, and hands the prompt to a single `on_topic_select` callback.

use crate::builder::PromptBuilder;
use crate::catalog::{exam_catalog, problem_catalog};
use crate::types::{Catalog, TopicEntry, TopicKind};
use olympia_core::{AppError, AppResult};

/// Dispatches topic selections to a callback.
pub struct TopicSelector<F>
where
    F: FnMut(&str),
{
    exams: Catalog,
    problems: Catalog,
    builder: PromptBuilder,
    on_topic_select: F,
}

impl<F> TopicSelector<F>
where
    F: FnMut(&str),
{
    /// Create a selector over explicit catalogs.
    ///
    /// Fails if either catalog is of the wrong kind.
    pub fn new(
        exams: Catalog,
        problems: Catalog,
        builder: PromptBuilder,
        on_topic_select: F,
    ) -> AppResult<Self> {
        for (expected, catalog) in [(TopicKind::Exam, &exams), (TopicKind::Problem, &problems)] {
            if catalog.kind() != expected {
                return Err(AppError::Catalog(format!(
                    "Expected a {} catalog, got a {} catalog",
                    expected,
                    catalog.kind()
                )));
            }
        }

        Ok(Self {
            exams,
            problems,
            builder,
            on_topic_select,
        })
    }

    /// Create a selector over the built-in catalogs.
    pub fn with_builtin(builder: PromptBuilder, on_topic_select: F) -> Self {
        Self {
            exams: exam_catalog(),
            problems: problem_catalog(),
            builder,
            on_topic_select,
        }
    }

    pub fn catalog(&self, kind: TopicKind) -> &Catalog {
        match kind {
            TopicKind::Exam => &self.exams,
            TopicKind::Problem => &self.problems,
        }
    }

    /// Select a topic by id.
    ///
    /// Invokes the callback exactly once with the rendered prompt and
    /// returns it. Unknown ids fail without invoking the callback.
    pub fn select(&mut self, kind: TopicKind, id: &str) -> AppResult<String> {
        let entry = self.catalog(kind).find(id).cloned().ok_or_else(|| {
            AppError::Catalog(format!("Unknown {} topic id: {}", kind, id))
        })?;

        self.select_entry(kind, &entry)
    }

    /// Select an entry the caller already holds.
    pub fn select_entry(&mut self, kind: TopicKind, entry: &TopicEntry) -> AppResult<String> {
        let prompt = self.builder.render(kind, entry)?;

        tracing::info!(kind = %kind, id = %entry.id, "Topic selected");
        tracing::debug!("Prompt: {}", prompt);

        (self.on_topic_select)(&prompt);

        Ok(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_core::config::PromptSettings;

    fn default_builder() -> PromptBuilder {
        PromptBuilder::new(&PromptSettings::default()).unwrap()
    }

    #[test]
    fn test_select_exam_invokes_callback_once() {
        let mut received = Vec::new();
        let mut selector = TopicSelector::with_builtin(default_builder(), |prompt: &str| {
            received.push(prompt.to_string())
        });

        let prompt = selector.select(TopicKind::Exam, "bangA").unwrap();
        drop(selector);

        assert_eq!(prompt, "Cho tôi đề thi bảng a năm 2024");
        assert_eq!(received, vec!["Cho tôi đề thi bảng a năm 2024".to_string()]);
    }

    #[test]
    fn test_select_problem() {
        let mut received = Vec::new();
        let mut selector = TopicSelector::with_builtin(default_builder(), |prompt: &str| {
            received.push(prompt.to_string())
        });

        selector.select(TopicKind::Problem, "gtr").unwrap();
        selector.select(TopicKind::Problem, "mt").unwrap();
        drop(selector);

        assert_eq!(
            received,
            vec![
                "Cho tôi dạng bài về giá trị riêng".to_string(),
                "Cho tôi dạng bài về ma trận".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_id_skips_callback() {
        let mut calls = 0;
        let mut selector = TopicSelector::with_builtin(default_builder(), |_: &str| calls += 1);

        let result = selector.select(TopicKind::Problem, "bangA");
        assert!(matches!(result, Err(AppError::Catalog(_))));
        drop(selector);

        assert_eq!(calls, 0);
    }

    #[test]
    fn test_select_entry_outside_catalog() {
        let mut calls = 0;
        let mut selector = TopicSelector::with_builtin(default_builder(), |_: &str| calls += 1);

        let entry = TopicEntry::new("custom", "Dạng Toàn Phương", "");
        let prompt = selector.select_entry(TopicKind::Problem, &entry).unwrap();
        drop(selector);

        assert_eq!(prompt, "Cho tôi dạng bài về dạng toàn phương");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_new_rejects_swapped_catalogs() {
        let result = TopicSelector::new(
            problem_catalog(),
            exam_catalog(),
            default_builder(),
            |_: &str| {},
        );
        assert!(result.is_err());
    }
}
