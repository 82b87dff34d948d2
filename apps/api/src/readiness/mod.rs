// Readiness engine: requirement catalog, skill matching, scoring and
// gap-driven learning paths. Pure and synchronous; no I/O, no cached state.

pub mod catalog;
pub mod handlers;
pub mod learning_path;
pub mod matching;
pub mod report;
pub mod scorer;
