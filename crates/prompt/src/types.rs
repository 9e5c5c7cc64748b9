//! Topic catalog types.
//!
//! This module defines the domain entities for topic selection.

use olympia_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Which catalog a topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    /// Full exam papers, one per olympiad board
    Exam,
    /// Problem categories
    Problem,
}

impl TopicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKind::Exam => "exam",
            TopicKind::Problem => "problem",
        }
    }

    /// Short title shown on the menu trigger.
    pub fn title(&self) -> &'static str {
        match self {
            TopicKind::Exam => "Đề Thi",
            TopicKind::Problem => "Dạng Bài",
        }
    }

    /// Heading shown above the menu entries.
    pub fn menu_label(&self) -> &'static str {
        match self {
            TopicKind::Exam => "Chọn loại đề thi",
            TopicKind::Problem => "Chọn dạng bài tập",
        }
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exam" | "dethi" => Ok(TopicKind::Exam),
            "problem" | "baitap" => Ok(TopicKind::Problem),
            other => Err(AppError::Catalog(format!(
                "Unknown topic kind: {}. Supported: exam, problem",
                other
            ))),
        }
    }
}

/// A single selectable topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Identifier, unique within its catalog
    pub id: String,

    /// Name shown in the menu and fed to the prompt builder
    #[serde(rename = "name")]
    pub display_name: String,

    /// One-line hint shown under the name
    #[serde(default)]
    pub description: String,
}

impl TopicEntry {
    pub fn new(id: &str, display_name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
        }
    }
}

/// An ordered, validated list of topics of one kind.
///
/// Entries are fixed once the catalog is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    kind: TopicKind,
    entries: Vec<TopicEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids and empty names.
    pub fn new(kind: TopicKind, entries: Vec<TopicEntry>) -> AppResult<Self> {
        let mut seen = HashSet::new();

        for entry in &entries {
            if entry.id.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "{} catalog contains an entry with an empty id",
                    kind
                )));
            }
            if entry.display_name.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "{} topic '{}' has an empty name",
                    kind, entry.id
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(AppError::Catalog(format!(
                    "Duplicate {} topic id: {}",
                    kind, entry.id
                )));
            }
        }

        Ok(Self { kind, entries })
    }

    /// Wrap entries that are known to be valid.
    pub(crate) fn from_trusted(kind: TopicKind, entries: Vec<TopicEntry>) -> Self {
        Self { kind, entries }
    }

    pub fn kind(&self) -> TopicKind {
        self.kind
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id.
    pub fn find(&self, id: &str) -> Option<&TopicEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_entry_deserialization() {
        let yaml = r#"
id: mt
name: Ma Trận
description: Phép toán ma trận, nghịch đảo
"#;

        let entry: TopicEntry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.id, "mt");
        assert_eq!(entry.display_name, "Ma Trận");
        assert_eq!(entry.description, "Phép toán ma trận, nghịch đảo");
    }

    #[test]
    fn test_description_is_optional() {
        let entry: TopicEntry = serde_yaml::from_str("id: x\nname: X").unwrap();
        assert!(entry.description.is_empty());
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(
            TopicKind::Problem,
            vec![
                TopicEntry::new("mt", "Ma Trận", ""),
                TopicEntry::new("mt", "Ma Trận Khác", ""),
            ],
        );
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_catalog_rejects_empty_fields() {
        let no_id = Catalog::new(TopicKind::Exam, vec![TopicEntry::new(" ", "Đề", "")]);
        assert!(no_id.is_err());

        let no_name = Catalog::new(TopicKind::Exam, vec![TopicEntry::new("a", "", "")]);
        assert!(no_name.is_err());
    }

    #[test]
    fn test_catalog_find_preserves_order() {
        let catalog = Catalog::new(
            TopicKind::Problem,
            vec![
                TopicEntry::new("b", "B", ""),
                TopicEntry::new("a", "A", ""),
            ],
        )
        .unwrap();

        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.find("a").unwrap().display_name, "A");
        assert!(catalog.find("c").is_none());
    }

    #[test]
    fn test_topic_kind_parsing() {
        assert_eq!("exam".parse::<TopicKind>().unwrap(), TopicKind::Exam);
        assert_eq!(" Problem ".parse::<TopicKind>().unwrap(), TopicKind::Problem);
        assert_eq!("dethi".parse::<TopicKind>().unwrap(), TopicKind::Exam);
        assert!("quiz".parse::<TopicKind>().is_err());
    }
}
