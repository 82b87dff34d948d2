//! Static per-walker datasets substituted when the agent returns nothing usable,
//! plus the caller-side step that picks between live data and the fallback.

use serde::Serialize;
use tracing::warn;

use crate::agent_client::WalkerOutcome;
use crate::models::skill::{MentorRecord, SkillRecord};

/// Where a list handed to the dashboard came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Agent,
    Fallback,
}

/// Keeps live data on a non-empty `Ok`, otherwise substitutes `fallback`.
/// The substitution is logged with the walker name and reason.
pub fn select_or_fallback<T>(
    walker: &str,
    outcome: WalkerOutcome<T>,
    fallback: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, DataSource) {
    match outcome {
        WalkerOutcome::Ok(items) if !items.is_empty() => (items, DataSource::Agent),
        WalkerOutcome::Ok(_) => {
            warn!("Walker {walker} returned an empty list, using fallback data");
            (fallback(), DataSource::Fallback)
        }
        WalkerOutcome::Empty => {
            warn!("Walker {walker} returned empty reports, using fallback data");
            (fallback(), DataSource::Fallback)
        }
        WalkerOutcome::Error(reason) => {
            warn!("Walker {walker} failed ({reason}), using fallback data");
            (fallback(), DataSource::Fallback)
        }
    }
}

pub fn skill_graph() -> Vec<SkillRecord> {
    [
        ("Python", "AI/ML", 3.0, 0.9),
        ("TensorFlow", "AI/ML", 7.0, 0.8),
        ("SQL", "Data", 4.0, 0.7),
        ("JavaScript", "Web", 4.0, 0.85),
        ("TypeScript", "Web", 5.0, 0.8),
        ("Go", "Backend", 6.0, 0.75),
        ("Rust", "Systems", 8.0, 0.7),
    ]
    .into_iter()
    .map(|(name, category, difficulty, market_demand)| SkillRecord {
        name: name.to_string(),
        category: category.to_string(),
        difficulty,
        market_demand,
    })
    .collect()
}

pub fn mentors() -> Vec<MentorRecord> {
    let mentor = |name: &str, expertise: &[&str], score, overlap, rating, availability| {
        MentorRecord {
            mentor_name: name.to_string(),
            expertise: expertise.iter().map(|s| s.to_string()).collect(),
            score,
            overlap,
            rating,
            availability,
        }
    };

    vec![
        mentor(
            "Anna Mentor",
            &["Python", "TensorFlow", "Machine Learning"],
            0.9,
            3,
            4.8,
            85.0,
        ),
        mentor(
            "Bob Guide",
            &["SQL", "Data Engineering", "Python"],
            0.85,
            2,
            4.6,
            70.0,
        ),
        mentor(
            "Carol Expert",
            &["JavaScript", "React", "Web Development"],
            0.75,
            1,
            4.9,
            90.0,
        ),
        mentor(
            "David Coach",
            &["Cloud Architecture", "AWS", "DevOps"],
            0.65,
            1,
            4.7,
            60.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_outcome_keeps_live_data() {
        let (items, source) =
            select_or_fallback("w", WalkerOutcome::Ok(vec![1, 2]), || vec![9]);
        assert_eq!(items, vec![1, 2]);
        assert_eq!(source, DataSource::Agent);
    }

    #[test]
    fn test_empty_outcome_uses_fallback() {
        let (items, source) = select_or_fallback("w", WalkerOutcome::Empty, || vec![9]);
        assert_eq!(items, vec![9]);
        assert_eq!(source, DataSource::Fallback);
    }

    #[test]
    fn test_empty_list_outcome_uses_fallback() {
        let (items, source) = select_or_fallback("w", WalkerOutcome::Ok(vec![]), || vec![9]);
        assert_eq!(items, vec![9]);
        assert_eq!(source, DataSource::Fallback);
    }

    #[test]
    fn test_error_outcome_uses_fallback() {
        let (items, source) =
            select_or_fallback("w", WalkerOutcome::Error("boom".into()), || vec![9]);
        assert_eq!(items, vec![9]);
        assert_eq!(source, DataSource::Fallback);
    }

    #[test]
    fn test_fallback_skill_graph_contents() {
        let skills = skill_graph();
        assert_eq!(skills.len(), 7);
        assert_eq!(skills[0].name, "Python");
        assert_eq!(skills[6].difficulty, 8.0);
        assert!(skills
            .iter()
            .all(|s| (0.0..=1.0).contains(&s.market_demand) && s.difficulty <= 10.0));
    }

    #[test]
    fn test_fallback_mentors_contents() {
        let mentors = mentors();
        assert_eq!(mentors.len(), 4);
        assert_eq!(mentors[0].mentor_name, "Anna Mentor");
        assert_eq!(mentors[0].overlap, 3);
        assert!(mentors.iter().all(|m| m.rating <= 5.0 && m.availability <= 100.0));
    }
}
