/// Case-insensitive bidirectional substring match between a required skill
/// and a skill the user claims.
///
/// Loose on purpose: "Java" matches "JavaScript" and "SQL" matches "NoSQL".
/// An empty candidate matches every requirement (the empty string is a
/// substring of anything).
pub fn matches(requirement: &str, candidate: &str) -> bool {
    let requirement = requirement.to_lowercase();
    let candidate = candidate.to_lowercase();
    candidate.contains(&requirement) || requirement.contains(&candidate)
}

/// True if any skill in `user_skills` satisfies `requirement`. Stops at the first hit.
pub fn is_satisfied<S: AsRef<str>>(requirement: &str, user_skills: &[S]) -> bool {
    user_skills
        .iter()
        .any(|skill| matches(requirement, skill.as_ref()))
}
