//! Linear-algebra topic classifier.
//!
//! Decides whether a question belongs to linear algebra and whether it looks
//! like an olympiad-style problem, using case-insensitive keyword patterns in
//! Vietnamese and English.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const LINEAR_ALGEBRA_KEYWORDS_VI: &[&str] = &[
    // Subject
    r"đại số tuyến tính",
    r"đstt",
    r"đại số tt",
    // Vector spaces
    r"không gian vect[oơ]",
    r"vector",
    r"vect[oơ] cơ sở",
    r"vect[oơ] đơn vị",
    r"không gian con",
    r"độc lập tuyến tính",
    r"phụ thuộc tuyến tính",
    r"tọa độ",
    r"hạng",
    // Matrices
    r"ma trận",
    r"định thức",
    r"đường chéo[hóa]*",
    r"tam giác[hóa]*",
    r"nghịch đảo",
    r"chéo hóa",
    r"đồng dạng",
    r"tương tự",
    r"trực giao",
    r"trực chuẩn",
    r"khả nghịch",
    r"đối xứng",
    // Linear maps
    r"ánh xạ tuyến tính",
    r"phép biến đổi tuyến tính",
    r"toán tử tuyến tính",
    r"nhân",
    r"phép chiếu",
    r"kernel",
    r"hạt nhân",
    r"ảnh",
    // Eigenvalues
    r"trị riêng",
    r"giá trị riêng",
    r"vect[oơ] riêng",
    r"không gian riêng",
    r"đa thức đặc trưng",
    r"phương trình đặc trưng",
    // Quadratic forms
    r"dạng toàn phương",
    r"dạng chính tắc",
    r"dạng chuẩn tắc",
    r"chỉ số quán tính",
    // Competitions
    r"olympic",
    r"thi học sinh giỏi",
    r"hsg",
    r"đội tuyển",
    // Techniques
    r"hạng của ma trận",
    r"dấu của hoán vị",
    r"phần tử bội",
    r"phép khử gauss",
    r"gauss-jordan",
    r"ma trận bậc thang",
    r"bậc thang rút gọn",
    r"ma trận đơn vị",
    r"ma trận không",
    r"ma trận chuyển vị",
    r"chuyển vị",
    r"tích vô hướng",
    r"không gian euclid",
    r"ma trận trực giao",
    r"trực giao hóa gram-schmidt",
    r"trực giao hóa",
    r"chuẩn hóa",
];

const LINEAR_ALGEBRA_KEYWORDS_EN: &[&str] = &[
    r"linear algebra",
    r"vector space",
    r"basis",
    r"span",
    r"linear independence",
    r"linear dependence",
    r"coordinates",
    r"rank",
    r"dimension",
    r"subspace",
    r"null space",
    r"matrix",
    r"matrices",
    r"determinant",
    r"diagonal",
    r"triangular",
    r"inverse",
    r"diagonalization",
    r"similar",
    r"orthogonal",
    r"orthonormal",
    r"invertible",
    r"symmetric",
    r"linear map",
    r"linear transformation",
    r"linear operator",
    r"multiplication",
    r"projection",
    r"kernel",
    r"image",
    r"range",
    r"eigenvalue",
    r"eigenvector",
    r"eigenspace",
    r"characteristic polynomial",
    r"characteristic equation",
    r"quadratic form",
    r"canonical form",
    r"inertia index",
    r"matrix rank",
    r"permutation sign",
    r"multiplicity",
    r"gaussian elimination",
    r"gauss-jordan",
    r"row echelon form",
    r"reduced row echelon form",
    r"identity matrix",
    r"zero matrix",
    r"transpose",
    r"inner product",
    r"euclidean space",
    r"orthogonal matrix",
    r"gram-schmidt orthogonalization",
    r"normalization",
];

/// Typical olympiad problem phrasings.
const OLYMPIC_PATTERNS: &[&str] = &[
    r"tìm ma trận \w+ sao cho",
    r"chứng minh .*ma trận",
    r"hạng của ma trận",
    r"tính định thức",
    r"giá trị (của|lớn nhất|nhỏ nhất).*định thức",
    r"ma trận.*khả nghịch",
    r"trị riêng",
    r"vect[oơ] riêng",
    r"chéo hóa",
    r"đường chéo hóa",
    r"trực giao hóa",
    r"cơ sở trực giao",
    r"không gian sinh bởi",
    r"không gian con.*bởi",
    r"dạng toàn phương.*chính tắc",
    r"dạng toàn phương.*chỉ số quán tính",
];

fn compile(patterns: &[&'static str]) -> Vec<(Regex, &'static str)> {
    patterns
        .iter()
        .map(|p| (Regex::new(&format!("(?i){}", p)).expect("static pattern"), *p))
        .collect()
}

static LINEAR_ALGEBRA_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let mut patterns = LINEAR_ALGEBRA_KEYWORDS_VI.to_vec();
    patterns.extend_from_slice(LINEAR_ALGEBRA_KEYWORDS_EN);
    compile(&patterns)
});

static OLYMPIC_REGEXES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile(OLYMPIC_PATTERNS));

/// How sure the classifier is that a question is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Result of classifying a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_linear_algebra: bool,
    pub is_olympic: bool,
    /// Olympiad patterns that matched, in declaration order
    pub olympic_patterns: Vec<String>,
    pub confidence: Confidence,
}

/// Keyword-based topic classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct TopicClassifier;

impl TopicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a question.
    ///
    /// An olympiad pattern hit always counts as linear algebra.
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = text.to_lowercase();

        let olympic_patterns: Vec<String> = OLYMPIC_REGEXES
            .iter()
            .filter(|(re, _)| re.is_match(&normalized))
            .map(|(_, pattern)| pattern.to_string())
            .collect();
        let is_olympic = !olympic_patterns.is_empty();

        let is_linear_algebra = is_olympic
            || LINEAR_ALGEBRA_REGEXES
                .iter()
                .any(|(re, _)| re.is_match(&normalized));

        let confidence = if is_olympic {
            Confidence::High
        } else if is_linear_algebra {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        tracing::debug!(
            "Classified question: linear_algebra={} olympic={} confidence={:?}",
            is_linear_algebra,
            is_olympic,
            confidence
        );

        Classification {
            is_linear_algebra,
            is_olympic,
            olympic_patterns,
            confidence,
        }
    }
}
