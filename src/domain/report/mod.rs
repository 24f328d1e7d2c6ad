//! User-filed problem reports and their moderation.

mod aggregate;
mod errors;
mod values;

pub use aggregate::{Report, MAX_COMMENT_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
pub use errors::ReportError;
pub use values::{ProblemType, ReportStatus};
