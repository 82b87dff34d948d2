//! Readiness report: score, gap breakdown, learning path and a one-line summary.

use serde::{Deserialize, Serialize};

use crate::readiness::catalog;
use crate::readiness::learning_path::generate_path;
use crate::readiness::matching::is_satisfied;
use crate::readiness::scorer::score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    Foundational, // < 30%
    Developing,   // 30 – 59%
    Prepared,     // 60 – 89%
    Ready,        // ≥ 90%
}

impl ReadinessBand {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p < 30 => ReadinessBand::Foundational,
            p if p < 60 => ReadinessBand::Developing,
            p if p < 90 => ReadinessBand::Prepared,
            _ => ReadinessBand::Ready,
        }
    }

    fn advice(self) -> &'static str {
        match self {
            ReadinessBand::Foundational => "Start with foundational courses",
            ReadinessBand::Developing => "You have some skills, build on them",
            ReadinessBand::Prepared => "You're well-prepared, focus on advanced topics",
            ReadinessBand::Ready => "You're highly ready for this role!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub career: String,
    /// 0.0 – 1.0
    pub score: f64,
    /// round(score × 100)
    pub percent: u32,
    pub band: ReadinessBand,
    pub matched: Vec<String>,
    pub gaps: Vec<String>,
    pub learning_path: Vec<String>,
    pub summary: String,
}

/// Runs the scorer and the path generator for one career / skill set.
///
/// Nothing is cached: every call recomputes from the catalog.
pub fn analyze<S: AsRef<str>>(career: &str, user_skills: &[S]) -> ReadinessReport {
    let score = score(career, user_skills);
    let learning_path = generate_path(career, user_skills);

    let (matched, gaps): (Vec<&str>, Vec<&str>) = catalog::lookup(career)
        .iter()
        .copied()
        .partition(|requirement| is_satisfied(requirement, user_skills));

    let percent = (score * 100.0).round() as u32;
    let band = ReadinessBand::from_percent(percent);

    ReadinessReport {
        career: career.to_string(),
        score,
        percent,
        band,
        matched: matched.into_iter().map(str::to_string).collect(),
        gaps: gaps.into_iter().map(str::to_string).collect(),
        learning_path,
        summary: build_summary(percent, career, band),
    }
}

fn build_summary(percent: u32, career: &str, band: ReadinessBand) -> String {
    format!("You are {percent}% ready for {career} - {}", band.advice())
}
