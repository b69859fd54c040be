//! Terminal companion for tracking daily tasks, mood and priorities.
//! Tasks belong to exactly one calendar day, moods are recorded at most once
//! per day, and everything is mirrored to plain JSON files so state survives
//! between invocations.
//!

pub mod cli;
pub mod planner;
pub mod utils;
