//! Catalog loader for workspace-local topic overrides.
//!
//! A workspace may replace either built-in catalog by placing a YAML list of
//! entries at `.olympia/catalogs/exam.yml` or `.olympia/catalogs/problem.yml`:
//!
//! ```yaml
//! - id: bangA
//!   name: Đề Thi Bảng A
//!   description: Trường top - Khó
//! ```

use crate::catalog::builtin_catalog;
use crate::types::{Catalog, TopicEntry, TopicKind};
use olympia_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Path of the override file for a catalog kind.
pub fn catalog_file(catalogs_dir: &Path, kind: TopicKind) -> PathBuf {
    catalogs_dir.join(format!("{}.yml", kind))
}

/// Load the catalog for a kind, falling back to the built-in one when the
/// workspace has no override.
///
/// # Example
/// ```no_run
/// use olympia_prompt::{load_catalog, TopicKind};
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = load_catalog(Path::new(".olympia/catalogs"), TopicKind::Problem)?;
/// println!("{} problem topics", catalog.len());
/// # Ok(())
/// # }
/// ```
pub fn load_catalog(catalogs_dir: &Path, kind: TopicKind) -> AppResult<Catalog> {
    let path = catalog_file(catalogs_dir, kind);

    if !path.exists() {
        tracing::debug!("No {} catalog override at {:?}, using built-in", kind, path);
        return Ok(builtin_catalog(kind));
    }

    let catalog = load_catalog_file(&path, kind)?;
    tracing::info!(
        "Loaded {} catalog override with {} topics from {:?}",
        kind,
        catalog.len(),
        path
    );

    Ok(catalog)
}

/// Parse and validate a catalog file.
pub fn load_catalog_file(path: &Path, kind: TopicKind) -> AppResult<Catalog> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::Catalog(format!("Failed to read catalog file {:?}: {}", path, e))
    })?;

    let entries: Vec<TopicEntry> = serde_yaml::from_str(&contents).map_err(|e| {
        AppError::Catalog(format!("Failed to parse catalog YAML {:?}: {}", path, e))
    })?;

    if entries.is_empty() {
        return Err(AppError::Catalog(format!(
            "Catalog file {:?} has no topics",
            path
        )));
    }

    Catalog::new(kind, entries)
}

/// List the catalog override files present in the workspace.
pub fn list_catalog_files(catalogs_dir: &Path) -> AppResult<Vec<String>> {
    if !catalogs_dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();

    for entry in walkdir::WalkDir::new(catalogs_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("yml") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path, kind: TopicKind, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(catalog_file(dir, kind), content).unwrap();
    }

    #[test]
    fn test_missing_override_uses_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = load_catalog(temp_dir.path(), TopicKind::Exam).unwrap();
        assert_eq!(catalog, builtin_catalog(TopicKind::Exam));
    }

    #[test]
    fn test_load_override() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            temp_dir.path(),
            TopicKind::Problem,
            r#"
- id: dtp
  name: Dạng Toàn Phương
  description: Đưa về dạng chính tắc
- id: mt
  name: Ma Trận
"#,
        );

        let catalog = load_catalog(temp_dir.path(), TopicKind::Problem).unwrap();
        assert_eq!(catalog.kind(), TopicKind::Problem);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("dtp").unwrap().display_name, "Dạng Toàn Phương");
        assert!(catalog.find("mt").unwrap().description.is_empty());
    }

    #[test]
    fn test_override_with_duplicate_ids_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            temp_dir.path(),
            TopicKind::Exam,
            "- id: bangA\n  name: A\n- id: bangA\n  name: B\n",
        );

        let result = load_catalog(temp_dir.path(), TopicKind::Exam);
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(temp_dir.path(), TopicKind::Exam, "invalid: yaml: content:");

        assert!(load_catalog(temp_dir.path(), TopicKind::Exam).is_err());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(temp_dir.path(), TopicKind::Problem, "[]");

        assert!(load_catalog(temp_dir.path(), TopicKind::Problem).is_err());
    }

    #[test]
    fn test_list_catalog_files() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(temp_dir.path(), TopicKind::Problem, "[]");
        write_catalog(temp_dir.path(), TopicKind::Exam, "[]");
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let files = list_catalog_files(temp_dir.path()).unwrap();
        assert_eq!(files, vec!["exam".to_string(), "problem".to_string()]);

        let missing = list_catalog_files(&temp_dir.path().join("absent")).unwrap();
        assert!(missing.is_empty());
    }
}
