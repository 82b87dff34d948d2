pub mod market;
pub mod session;
pub mod skill;
