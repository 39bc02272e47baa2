//! Identifier types used across the Tally platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Report identifier
///
/// Uniquely identifies a conversation/report entity. Reports are the unit
/// that settings (notification preferences, archival) attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl ReportId {
    /// Create a new random report ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report-{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("report-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(raw)?))
    }
}

impl From<Uuid> for ReportId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ReportId> for Uuid {
    fn from(report_id: ReportId) -> Self {
        report_id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        let id = ReportId::new();
        let parsed: ReportId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_bare_uuid() {
        let uuid = Uuid::new_v4();
        let parsed: ReportId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed.uuid(), uuid);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("report-not-a-uuid".parse::<ReportId>().is_err());
    }
}
