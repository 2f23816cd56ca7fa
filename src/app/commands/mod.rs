pub mod create_universe;
pub mod propose;
pub mod show;
pub mod vote;
