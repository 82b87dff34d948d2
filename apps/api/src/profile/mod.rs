// Session / profile handling for dashboard users.
// The session replaces ambient "current user / current career" globals:
// handlers read it, then pass career and skills explicitly into readiness.

pub mod handlers;
pub mod store;
