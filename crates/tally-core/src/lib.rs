//! # Tally Core
//!
//! Domain types shared across the Tally platform: report snapshots,
//! archival metadata, notification preferences, identifiers, and the
//! unified error type.
//!
//! This crate is pure data + predicates. It has no reactive, runtime, or
//! UI dependencies; those live in `tally-app` and the frontends.

pub mod errors;
pub mod identifiers;
pub mod preference;
pub mod report;

pub use errors::TallyError;
pub use identifiers::ReportId;
pub use preference::NotificationPreference;
pub use report::{ArchiveReason, ArchiveRecord, ChatType, Report, ReportType};
