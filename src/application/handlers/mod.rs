//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod debate;
pub mod report;
pub mod topic;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use debate::*;
pub use report::*;
pub use topic::*;
pub use user::*;
