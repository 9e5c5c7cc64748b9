//! Built-in topic catalogs.

use crate::types::{Catalog, TopicEntry, TopicKind};

/// Exam boards: (id, name, description).
const EXAM_TOPICS: &[(&str, &str, &str)] = &[
    ("bangA", "Đề Thi Bảng A", "Trường top - Khó"),
    ("bangB", "Đề Thi Bảng B", "Cơ bản - Vừa"),
];

/// Problem categories: (id, name, description).
const PROBLEM_TOPICS: &[(&str, &str, &str)] = &[
    ("mt", "Ma Trận", "Phép toán ma trận, nghịch đảo"),
    ("hpt", "Hệ Phương Trình", "Giải hệ PT tuyến tính"),
    ("dt", "Định Thức", "Tính định thức ma trận"),
    ("tohop", "Tổ Hợp", "Tổ hợp và xác suất"),
    ("kgvt", "Không Gian Vector", "Vector và không gian"),
    ("gtr", "Giá Trị Riêng", "Eigenvalue và eigenvector"),
    ("dathuc", "Đa Thức", "Đa thức đặc trưng"),
];

/// The built-in catalog for a kind.
pub fn builtin_catalog(kind: TopicKind) -> Catalog {
    let rows = match kind {
        TopicKind::Exam => EXAM_TOPICS,
        TopicKind::Problem => PROBLEM_TOPICS,
    };

    let entries = rows
        .iter()
        .map(|(id, name, description)| TopicEntry::new(id, name, description))
        .collect();

    // Uniqueness of the rows above is covered by test_builtin_catalogs_validate.
    Catalog::from_trusted(kind, entries)
}

pub fn exam_catalog() -> Catalog {
    builtin_catalog(TopicKind::Exam)
}

pub fn problem_catalog() -> Catalog {
    builtin_catalog(TopicKind::Problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_validate() {
        for kind in [TopicKind::Exam, TopicKind::Problem] {
            let catalog = builtin_catalog(kind);
            let revalidated = Catalog::new(kind, catalog.entries().to_vec());
            assert!(revalidated.is_ok(), "{} catalog must have unique ids", kind);
        }
    }

    #[test]
    fn test_exam_catalog_contents() {
        let catalog = exam_catalog();
        assert_eq!(catalog.kind(), TopicKind::Exam);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("bangA").unwrap().display_name, "Đề Thi Bảng A");
        assert_eq!(catalog.find("bangB").unwrap().description, "Cơ bản - Vừa");
    }

    #[test]
    fn test_problem_catalog_order() {
        let ids: Vec<String> = problem_catalog().iter().map(|e| e.id.clone()).collect();
        assert_eq!(
            ids,
            vec!["mt", "hpt", "dt", "tohop", "kgvt", "gtr", "dathuc"]
        );
    }
}
