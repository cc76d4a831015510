//! The company double-booking check.
//!
//! Conflict granularity is the `(day, slot)` pair: two meetings on the
//! same day in different slots never conflict.

use crate::roster::Company;
use crate::slots::SlotIndex;

/// Whether `company` can take a meeting at `(day, slot)`.
///
/// A company with no meetings at all on the given day is trivially
/// available.
pub fn is_company_available(company: &Company, day: &str, slot: SlotIndex) -> bool {
    !company
        .confirmed_meetings
        .iter()
        .any(|meeting| meeting.day == day && meeting.slot == slot)
}
