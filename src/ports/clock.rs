//! Clock port for obtaining the current time.

use chrono::{DateTime, Local, Utc};

/// Source of "now" for timestamped identifiers and date helpers.
///
/// Injecting the clock lets tests pin the timestamp half of a transaction ID.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant in the process-local zone.
    fn now_local(&self) -> DateTime<Local> {
        self.now().with_timezone(&Local)
    }
}
