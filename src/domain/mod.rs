//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, roles, errors)
//! - `user` - Profiles, scores and levels
//! - `topic` - Debate topics gated by difficulty
//! - `debate` - Debates against the chatbot, messages and grading
//! - `report` - Problem reports and moderation

pub mod debate;
pub mod foundation;
pub mod report;
pub mod topic;
pub mod user;
