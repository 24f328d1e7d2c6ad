//! Debates against the chatbot: lifecycle, messages, grading and the fixed
//! copy exchanged with the chatbot service.

mod aggregate;
mod errors;
mod grading;
mod message;
pub mod script;
mod values;

pub use aggregate::{Debate, MAX_GRADE, PASSING_GRADE};
pub use errors::DebateError;
pub use grading::extract_grade;
pub use message::{Author, Message, MAX_MESSAGE_LENGTH};
pub use values::{ChatbotMode, DebateKind, DebateStatus, Stance};
