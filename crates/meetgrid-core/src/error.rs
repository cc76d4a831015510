//! Error types for allocation runs.

use thiserror::Error;

use crate::engine::Schedule;

/// Errors produced by the slot model and the allocation run.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A slot index outside the fixed `1..=24` grid was asked for its
    /// wall-clock time. Fatal to the call, not to a run.
    #[error("invalid slot index {slot}: the day grid spans 1..=24")]
    InvalidSlot { slot: u8 },

    /// One or more requested meetings could not be placed by the greedy
    /// pass. The run contract is all-or-nothing: the computed schedule is
    /// not a success result. It rides along here so callers can render a
    /// per-company diagnostic log before the operator fixes the input.
    #[error("{unresolved} requested meeting(s) could not be booked")]
    UnresolvedRequests {
        unresolved: usize,
        schedule: Box<Schedule>,
    },
}

/// Convenience alias used throughout meetgrid-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
