//! Readiness Scorer: fraction of a career's requirements the user already covers.

use crate::readiness::catalog;
use crate::readiness::matching::is_satisfied;

/// Returns `satisfied / total` for the career's requirement list, in [0, 1].
///
/// Each requirement counts at most once no matter how many user skills hit it,
/// so duplicates in `user_skills` never inflate the score.
pub fn score<S: AsRef<str>>(career: &str, user_skills: &[S]) -> f64 {
    let requirements = catalog::lookup(career);
    let satisfied = requirements
        .iter()
        .filter(|requirement| is_satisfied(requirement, user_skills))
        .count();

    satisfied as f64 / requirements.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ai_engineer_with_python_and_sql_is_forty_percent() {
        let s = score("AI Engineer", &skills(&["Python", "SQL"]));
        assert!((s - 0.4).abs() < f64::EPSILON, "Score was {s}");
    }

    #[test]
    fn test_no_skills_scores_zero() {
        let s = score("Data Engineer", &skills(&[]));
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_full_coverage_scores_one() {
        let s = score(
            "DevOps Engineer",
            &skills(&["docker", "Kubernetes", "CI/CD", "linux", "AWS"]),
        );
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_unknown_career_scores_against_python_only() {
        assert_eq!(score("Chef", &skills(&["python3"])), 1.0);
        assert_eq!(score("Chef", &skills(&["Rust"])), 0.0);
    }

    #[test]
    fn test_duplicates_do_not_inflate_score() {
        let s = score("AI Engineer", &skills(&["Python", "python", "PYTHON"]));
        assert!((s - 0.2).abs() < f64::EPSILON, "Score was {s}");
    }

    #[test]
    fn test_skill_order_does_not_change_score() {
        let a = score("Data Scientist", &skills(&["Statistics", "SQL", "Go"]));
        let b = score("Data Scientist", &skills(&["Go", "SQL", "Statistics"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_bounded_0_to_1() {
        let inputs = [
            skills(&[]),
            skills(&["a"]),
            skills(&["Python", "SQL", "Spark", "Hadoop", "ETL", "extra"]),
        ];
        for career in ["Data Engineer", "Web Developer", "unknown", ""] {
            for user_skills in &inputs {
                let s = score(career, user_skills);
                assert!((0.0..=1.0).contains(&s), "{career}: {s}");
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let user_skills = skills(&["JavaScript", "CSS"]);
        let first = score("Web Developer", &user_skills);
        for _ in 0..5 {
            assert_eq!(score("Web Developer", &user_skills), first);
        }
    }

    #[test]
    fn test_accepts_str_slices() {
        let s = score("AI Engineer", &["Python", "SQL"]);
        assert!((s - 0.4).abs() < f64::EPSILON);
    }
}
