//! Users: profiles, scores and the levels they unlock.

mod level;
mod profile;

pub use level::Level;
pub use profile::UserProfile;
