//! Topics command handler.
//!
//! Lists the exam and problem catalogs the way the topic menus show them.

use super::{print_json, workspace_catalog};
use clap::Args;
use olympia_core::{config::AppConfig, AppResult};
use olympia_prompt::{list_catalog_files, Catalog, TopicKind};

/// List exam and problem topics
#[derive(Args, Debug)]
pub struct TopicsCommand {
    /// Only list one catalog (exam, problem)
    #[arg(short, long)]
    pub kind: Option<TopicKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl TopicsCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing topics command");
        tracing::debug!("Topics options: {:?}", self);

        let overrides = list_catalog_files(&config.catalogs_dir())?;
        if !overrides.is_empty() {
            tracing::debug!("Catalog overrides present: {}", overrides.join(", "));
        }

        let kinds = match self.kind {
            Some(kind) => vec![kind],
            None => vec![TopicKind::Exam, TopicKind::Problem],
        };

        let catalogs = kinds
            .into_iter()
            .map(|kind| workspace_catalog(config, kind))
            .collect::<AppResult<Vec<_>>>()?;

        if self.json {
            return print_json(&catalogs);
        }

        let sections: Vec<String> = catalogs.iter().map(render_catalog).collect();
        println!("{}", sections.join("\n"));

        Ok(())
    }
}

/// Render one catalog as a text menu.
fn render_catalog(catalog: &Catalog) -> String {
    let kind = catalog.kind();
    let id_width = catalog.iter().map(|e| e.id.chars().count()).max().unwrap_or(0);

    let mut out = format!("{} - {}\n", kind.title(), kind.menu_label());
    for entry in catalog.iter() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            entry.id,
            entry.display_name,
            width = id_width
        ));
        if !entry.description.is_empty() {
            out.push_str(&format!(
                "  {:<width$}    {}\n",
                "",
                entry.description,
                width = id_width
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use olympia_prompt::exam_catalog;

    #[test]
    fn test_render_exam_catalog() {
        let rendered = render_catalog(&exam_catalog());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Đề Thi - Chọn loại đề thi");
        assert_eq!(lines[1], "  bangA  Đề Thi Bảng A");
        assert_eq!(lines[2], "           Trường top - Khó");
        assert_eq!(lines.len(), 5);
    }
}
