//! Sample job listings and course catalogue shown on the jobs and learning pages.

pub mod handlers;

use crate::models::market::{Course, JobListing};

/// Five listings at different seniority levels, titled from `career`.
pub fn sample_jobs(career: &str) -> Vec<JobListing> {
    let listing = |title: String, company: &str, location: &str, salary: &str, skills: &[&str]| {
        JobListing {
            title,
            company: company.to_string(),
            location: location.to_string(),
            salary: salary.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    };

    vec![
        listing(
            format!("Senior {career}"),
            "Tech Corp",
            "San Francisco, CA",
            "$150k - $200k",
            &["Python", "TensorFlow", "SQL"],
        ),
        listing(
            format!("{career} - Mid Level"),
            "StartUp Inc",
            "Remote",
            "$120k - $160k",
            &["Python", "SQL", "JavaScript"],
        ),
        listing(
            format!("Junior {career}"),
            "Learning Labs",
            "New York, NY",
            "$80k - $120k",
            &["Python", "SQL"],
        ),
        listing(
            format!("Lead {career}"),
            "Enterprise Solutions",
            "Austin, TX",
            "$180k - $250k",
            &["Python", "TensorFlow", "Kubernetes", "AWS"],
        ),
        listing(
            format!("{career} Intern"),
            "Tech Startup",
            "Boston, MA",
            "$25/hr - $35/hr",
            &["Python", "Git"],
        ),
    ]
}

const COURSES: &[(&str, &str, &str, &str)] = &[
    ("Python Fundamentals", "Coursera", "4 weeks", "Beginner"),
    ("Advanced Machine Learning", "Udacity", "8 weeks", "Advanced"),
    (
        "Data Engineering Essentials",
        "LinkedIn Learning",
        "6 weeks",
        "Intermediate",
    ),
    ("Web Development Bootcamp", "Codecademy", "12 weeks", "Intermediate"),
    (
        "Cloud Architecture Fundamentals",
        "A Cloud Guru",
        "5 weeks",
        "Intermediate",
    ),
    ("System Design Interview Prep", "Educative", "6 weeks", "Advanced"),
];

pub fn courses() -> Vec<Course> {
    COURSES
        .iter()
        .map(|(title, provider, duration, difficulty)| Course {
            title: title.to_string(),
            provider: provider.to_string(),
            duration: duration.to_string(),
            difficulty: difficulty.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_jobs_are_titled_from_career() {
        let jobs = sample_jobs("Data Engineer");
        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Senior Data Engineer",
                "Data Engineer - Mid Level",
                "Junior Data Engineer",
                "Lead Data Engineer",
                "Data Engineer Intern"
            ]
        );
    }

    #[test]
    fn test_lead_listing_skills() {
        let jobs = sample_jobs("X");
        assert_eq!(jobs[3].skills, vec!["Python", "TensorFlow", "Kubernetes", "AWS"]);
        assert_eq!(jobs[4].salary, "$25/hr - $35/hr");
    }

    #[test]
    fn test_course_catalogue() {
        let courses = courses();
        assert_eq!(courses.len(), 6);
        assert_eq!(courses[0].title, "Python Fundamentals");
        assert_eq!(courses[5].provider, "Educative");
    }
}
