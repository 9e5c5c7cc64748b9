//! Query parser for Vietnamese topic requests.
//!
//! Recovers retrieval filters (category, subcategory, year, question
//! number) from free text, including the prompts produced by the builders.
//! Keyword matching is plain substring containment on the normalized
//! query; the first keyword table entry that hits wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Broad document category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryCategory {
    /// Exercises
    #[serde(rename = "baitap")]
    Exercise,
    /// Exam papers
    #[serde(rename = "dethi")]
    Exam,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Exercise => "baitap",
            QueryCategory::Exam => "dethi",
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CATEGORY_KEYWORDS: &[(QueryCategory, &[&str])] = &[
    (QueryCategory::Exercise, &["bài tập", "baitap", "bt"]),
    (QueryCategory::Exam, &["đề thi", "dethi", "đề", "de thi"]),
];

const SUBCATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("mt", &["ma trận", "ma-trận", "matrix", "mt"]),
    ("dt", &["định thức", "dinh thuc", "det", "dt"]),
    ("gtr", &["giá trị riêng", "gia tri rieng", "eigenvalue", "gtr"]),
    ("hpt", &["hệ phương trình", "he phuong trinh", "system", "hpt"]),
    ("kgvt", &["không gian vector", "khong gian vector", "vector space", "kgvt"]),
    ("tohop", &["tổ hợp", "to hop", "combination", "tohop"]),
    ("bangA", &["bảng a", "bang a", "banga", "board a"]),
    ("bangB", &["bảng b", "bang b", "bangb", "board b"]),
    ("dathuc", &["đa thức", "da thuc", "polynomial", "dathuc"]),
];

/// Subcategories that name an exam board rather than a problem type.
const EXAM_BOARDS: &[&str] = &["bangA", "bangB"];

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(201[0-9]|202[0-9])\b").expect("static pattern"));
static QUESTION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbài\s+(\d+\.\d+)\b").expect("static pattern"));
static QUESTION_NUM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bbài\s+(\d+)\b").expect("static pattern"));

/// Filters extracted from a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// NFC-composed, trimmed, lowercased query
    pub normalized_query: String,

    pub category: Option<QueryCategory>,

    /// Topic id such as "mt" or "bangA"
    pub subcategory: Option<String>,

    pub year: Option<u16>,

    /// Exact question code, e.g. "1.2"
    pub question_code: Option<String>,

    /// Question section number, e.g. "1"
    pub question_num: Option<String>,
}

/// Compose to NFC, then trim and lowercase a query.
///
/// Keyword tables are precomposed, so decomposed input must be composed
/// before matching.
pub fn normalize_query(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_lowercase()
}

/// Parse a query into retrieval filters.
///
/// # Example
/// ```
/// use olympia_prompt::{parse_query, QueryCategory};
///
/// let parsed = parse_query("Cho tôi đề thi bảng a năm 2024");
/// assert_eq!(parsed.category, Some(QueryCategory::Exam));
/// assert_eq!(parsed.subcategory.as_deref(), Some("bangA"));
/// assert_eq!(parsed.year, Some(2024));
/// ```
pub fn parse_query(text: &str) -> ParsedQuery {
    let normalized_query = normalize_query(text);

    let year = extract_year(&normalized_query);
    let mut category = match_keyword(&normalized_query, CATEGORY_KEYWORDS);
    let subcategory = match_keyword(&normalized_query, SUBCATEGORY_KEYWORDS).map(str::to_string);
    let (question_code, question_num) = extract_question_info(&normalized_query);

    // An exam board only makes sense for exam papers
    if subcategory
        .as_deref()
        .is_some_and(|sub| EXAM_BOARDS.contains(&sub))
    {
        category = Some(QueryCategory::Exam);
    }

    tracing::debug!(
        "Parsed query: category={:?} subcategory={:?} year={:?} code={:?} num={:?}",
        category,
        subcategory,
        year,
        question_code,
        question_num
    );

    ParsedQuery {
        normalized_query,
        category,
        subcategory,
        year,
        question_code,
        question_num,
    }
}

fn match_keyword<K: Copy>(text: &str, table: &[(K, &[&str])]) -> Option<K> {
    table
        .iter()
        .find(|(_, variants)| variants.iter().any(|v| text.contains(v)))
        .map(|(key, _)| *key)
}

fn extract_year(text: &str) -> Option<u16> {
    YEAR_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract `(question_code, question_num)` from "bài N.M" or "bài N".
fn extract_question_info(text: &str) -> (Option<String>, Option<String>) {
    if let Some(code) = QUESTION_CODE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
    {
        let code = code.as_str().to_string();
        let num = code.split('.').next().map(str::to_string);
        return (Some(code), num);
    }

    let num = QUESTION_NUM_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    (None, num)
}

/// A retrieval filter: every condition must match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    pub must: Vec<FieldCondition>,
}

/// Exact-match condition on one payload field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCondition {
    pub key: String,
    #[serde(rename = "match")]
    pub matches: MatchValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchValue {
    pub value: Value,
}

impl FieldCondition {
    fn new(key: &str, value: impl Into<Value>) -> Self {
        Self {
            key: key.to_string(),
            matches: MatchValue {
                value: value.into(),
            },
        }
    }
}

impl SearchFilter {
    /// Build a filter over category, subcategory and year.
    ///
    /// Returns `None` when nothing was extracted.
    pub fn from_parts(
        category: Option<QueryCategory>,
        subcategory: Option<&str>,
        year: Option<u16>,
    ) -> Option<Self> {
        let mut must = Vec::new();

        if let Some(category) = category {
            must.push(FieldCondition::new("category", category.as_str()));
        }
        if let Some(subcategory) = subcategory {
            must.push(FieldCondition::new("subcategory", subcategory));
        }
        if let Some(year) = year {
            must.push(FieldCondition::new("metadata.year", year));
        }

        if must.is_empty() {
            None
        } else {
            Some(Self { must })
        }
    }

    pub fn from_parsed(parsed: &ParsedQuery) -> Option<Self> {
        Self::from_parts(parsed.category, parsed.subcategory.as_deref(), parsed.year)
    }
}
