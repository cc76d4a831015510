//! Post-run accounting: did every requested meeting get booked?

use serde::{Deserialize, Serialize};

use crate::roster::Mentor;

/// Booked/unresolved totals across all schedulable mentors after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Meetings actually booked.
    pub booked: usize,
    /// Request occurrences left pending.
    pub unresolved: usize,
}

impl VerifyReport {
    /// True when every requested meeting was resolved.
    pub fn is_fully_booked(&self) -> bool {
        self.unresolved == 0
    }
}

/// Sum booked and still-pending request occurrences across `mentors`.
///
/// Advisory on its own; the engine uses it to decide the run-level
/// all-or-nothing verdict.
pub fn verify(mentors: &[Mentor]) -> VerifyReport {
    let booked = mentors.iter().map(|m| m.confirmed_meetings.len()).sum();
    let unresolved = mentors.iter().map(|m| m.pending_meetings.len()).sum();
    VerifyReport { booked, unresolved }
}
