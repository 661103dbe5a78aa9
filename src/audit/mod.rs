//! Audit logging for the expense book
//!
//! Records every ledger change with before/after values in an append-only
//! audit log.
//!
//! - `AuditEntry`: one logged operation, built from a
//!   [`LedgerChange`](crate::commands::LedgerChange)
//! - `AuditLogger`: appends entries to `audit.log` as JSON lines
//! - `generate_diff`: field-level summary for updates
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_book::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entries: Vec<AuditEntry> = result.changes.iter().map(AuditEntry::from).collect();
//! logger.log_batch(&entries)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
