//! Report handlers - Filing problems and moderating them.

mod file_report;
mod moderation;

pub use file_report::{
    CreateReportCommand, CreateReportHandler, GetReportHandler, GetReportQuery, MyReportsHandler,
    MyReportsQuery,
};
pub use moderation::{
    ListReportsHandler, ListReportsQuery, ProcessReportCommand, ProcessReportHandler,
};
