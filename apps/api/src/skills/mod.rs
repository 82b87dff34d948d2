// Skill-graph, mentor and skill-extraction collaborators.
// Nothing here feeds the readiness core except extracted skill names,
// which replace a session's skill set before the next analysis.

pub mod extraction;
pub mod graph;
pub mod handlers;
