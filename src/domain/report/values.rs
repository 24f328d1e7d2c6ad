use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Kind of problem a user reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemType {
    TechnicalBug,
    InappropriateContent,
    Harassment,
    Misinformation,
    Other,
}

impl ProblemType {
    pub const ALL: [ProblemType; 5] = [
        ProblemType::TechnicalBug,
        ProblemType::InappropriateContent,
        ProblemType::Harassment,
        ProblemType::Misinformation,
        ProblemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::TechnicalBug => "TECHNICAL_BUG",
            ProblemType::InappropriateContent => "INAPPROPRIATE_CONTENT",
            ProblemType::Harassment => "HARASSMENT",
            ProblemType::Misinformation => "MISINFORMATION",
            ProblemType::Other => "OTHER",
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_value("problem_type", format!("unknown problem type '{}'", s))
            })
    }
}

/// Moderation state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
        ReportStatus::Rejected,
    ];

    /// Resolved and Rejected close a report.
    pub fn is_closing(&self) -> bool {
        matches!(self, ReportStatus::Resolved | ReportStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::InProgress => "IN_PROGRESS",
            ReportStatus::Resolved => "RESOLVED",
            ReportStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_value("status", format!("unknown status '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_statuses() {
        assert!(ReportStatus::Resolved.is_closing());
        assert!(ReportStatus::Rejected.is_closing());
        assert!(!ReportStatus::InProgress.is_closing());
        assert_eq!(ReportStatus::default(), ReportStatus::Pending);
    }

    #[test]
    fn wire_names_roundtrip() {
        for p in ProblemType::ALL {
            assert_eq!(p.as_str().parse::<ProblemType>().unwrap(), p);
            assert_eq!(serde_json::to_string(&p).unwrap(), format!("\"{}\"", p.as_str()));
        }
        for s in ReportStatus::ALL {
            assert_eq!(s.as_str().parse::<ReportStatus>().unwrap(), s);
        }
    }
}
