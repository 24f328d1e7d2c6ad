//! User handlers.

mod get_me;

pub use get_me::{GetMeHandler, ProfileView};
