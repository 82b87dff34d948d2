//! Requirement Catalog: static career title → ordered required-skill list.
//!
//! Order matters: it is the order gaps are reported in and the order
//! "Master {skill}" steps appear in a learning path.

/// Returned for any career title not present in the catalog.
pub const FALLBACK_REQUIREMENTS: &[&str] = &["Python"];

/// Every catalog entry carries a non-empty requirement list.
pub const CAREER_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "AI Engineer",
        &["Python", "TensorFlow", "SQL", "Machine Learning", "Deep Learning"],
    ),
    ("Data Engineer", &["Python", "SQL", "Spark", "Hadoop", "ETL"]),
    (
        "Web Developer",
        &["JavaScript", "TypeScript", "React", "Node.js", "CSS"],
    ),
    (
        "Cloud Architect",
        &["AWS", "Azure", "Kubernetes", "Docker", "Infrastructure"],
    ),
    (
        "DevOps Engineer",
        &["Docker", "Kubernetes", "CI/CD", "Linux", "AWS"],
    ),
    (
        "Machine Learning",
        &["Python", "Machine Learning", "TensorFlow", "PyTorch", "Statistics"],
    ),
    (
        "Data Scientist",
        &["Python", "SQL", "Statistics", "Machine Learning", "Data Visualization"],
    ),
];

/// Looks up the requirement list for a career.
///
/// Exact, case-sensitive key match. Unknown titles (custom careers, empty
/// strings) get `FALLBACK_REQUIREMENTS`, so the result is never empty.
pub fn lookup(career: &str) -> &'static [&'static str] {
    CAREER_REQUIREMENTS
        .iter()
        .find(|(title, _)| *title == career)
        .map(|(_, requirements)| *requirements)
        .unwrap_or(FALLBACK_REQUIREMENTS)
}

/// Catalog career titles in declaration order.
pub fn careers() -> impl Iterator<Item = &'static str> {
    CAREER_REQUIREMENTS.iter().map(|(title, _)| *title)
}
