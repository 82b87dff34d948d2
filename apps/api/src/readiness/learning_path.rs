//! Gap-Path Generator: ordered remediation steps for the skills a user is missing.

use crate::readiness::catalog;
use crate::readiness::matching::is_satisfied;

/// Returned when the user already covers every requirement.
pub const ADVANCED_PATH: &[&str] = &["Advanced Topics", "Specialization", "Leadership Skills"];

/// Requirements not covered by any user skill, in catalog order.
pub fn gaps<S: AsRef<str>>(career: &str, user_skills: &[S]) -> Vec<&'static str> {
    catalog::lookup(career)
        .iter()
        .copied()
        .filter(|requirement| !is_satisfied(requirement, user_skills))
        .collect()
}

/// Builds the learning path: one "Master {skill}" step per gap, or
/// `ADVANCED_PATH` when there are none. Never empty.
pub fn generate_path<S: AsRef<str>>(career: &str, user_skills: &[S]) -> Vec<String> {
    let gaps = gaps(career, user_skills);

    if gaps.is_empty() {
        return ADVANCED_PATH.iter().map(|step| step.to_string()).collect();
    }

    gaps.into_iter()
        .map(|skill| format!("Master {skill}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_engineer_path_from_python_and_sql() {
        let path = generate_path("AI Engineer", &["Python", "SQL"]);
        assert_eq!(
            path,
            vec![
                "Master TensorFlow",
                "Master Machine Learning",
                "Master Deep Learning"
            ]
        );
    }

    #[test]
    fn test_full_coverage_returns_advanced_path() {
        let path = generate_path(
            "Data Engineer",
            &["python", "sql", "spark", "hadoop", "etl"],
        );
        assert_eq!(
            path,
            vec!["Advanced Topics", "Specialization", "Leadership Skills"]
        );
    }

    #[test]
    fn test_no_skills_lists_every_requirement_in_order() {
        let empty: [&str; 0] = [];
        let path = generate_path("Cloud Architect", &empty);
        assert_eq!(
            path,
            vec![
                "Master AWS",
                "Master Azure",
                "Master Kubernetes",
                "Master Docker",
                "Master Infrastructure"
            ]
        );
    }

    #[test]
    fn test_unknown_career_uses_python_fallback() {
        let empty: [&str; 0] = [];
        assert_eq!(generate_path("Florist", &empty), vec!["Master Python"]);
        assert_eq!(
            generate_path("Florist", &["Python"]),
            vec!["Advanced Topics", "Specialization", "Leadership Skills"]
        );
    }

    #[test]
    fn test_order_follows_catalog_not_user_skills() {
        let a = generate_path("Web Developer", &["CSS", "React"]);
        let b = generate_path("Web Developer", &["React", "CSS"]);
        assert_eq!(a, b);
        assert_eq!(
            a,
            vec!["Master JavaScript", "Master TypeScript", "Master Node.js"]
        );
    }

    #[test]
    fn test_path_never_longer_than_requirements() {
        let empty: [&str; 0] = [];
        for career in catalog::careers() {
            let path = generate_path(career, &empty);
            assert!(!path.is_empty());
            assert!(path.len() <= catalog::lookup(career).len());
        }
    }

    #[test]
    fn test_gaps_excludes_loose_matches() {
        // "Java" satisfies "JavaScript" through the substring rule.
        let missing = gaps("Web Developer", &["Java"]);
        assert!(!missing.contains(&"JavaScript"));
        assert!(missing.contains(&"TypeScript"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let skills = ["Python", "SQL"];
        assert_eq!(
            generate_path("AI Engineer", &skills),
            generate_path("AI Engineer", &skills)
        );

        let covered = ["python", "sql", "spark", "hadoop", "etl"];
        let first = generate_path("Data Engineer", &covered);
        assert_eq!(first, generate_path("Data Engineer", &covered));
        assert_eq!(first, ADVANCED_PATH);
    }
}
