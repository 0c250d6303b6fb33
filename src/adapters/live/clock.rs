//! System clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Reads the operating system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    #[test]
    fn tracks_wall_clock() {
        let before = Utc::now();
        let now = LiveClock.now();
        assert!(before <= now && now <= Utc::now());
    }

    #[test]
    fn local_view_is_the_same_instant() {
        let before = Local::now();
        let local = LiveClock.now_local();
        assert!(before <= local && local <= Local::now());
    }
}
