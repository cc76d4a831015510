//! # meetgrid-core
//!
//! Greedy one-on-one meeting allocation between mentors and companies over
//! a fixed day grid of 24 twenty-minute slots.
//!
//! A run is a single pure computation: normalize raw participant records
//! into a [`Roster`], hand the roster to [`allocate`], and either get a
//! complete [`Schedule`] back or an all-or-nothing failure naming how many
//! requests could not be placed.
//!
//! ## Quick start
//!
//! ```rust
//! use meetgrid_core::{allocate, MentorRecord, Roster, TimePeriod};
//!
//! let records = vec![MentorRecord {
//!     name: "Ada".into(),
//!     day: Some("Monday".into()),
//!     time_period: Some(TimePeriod::Morning),
//!     companies: vec!["Acme".into()],
//! }];
//!
//! let schedule = allocate(Roster::from_records(records)).unwrap();
//! assert_eq!(schedule.companies[0].confirmed_meetings[0].time, "8:00");
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — the fixed time grid and slot-index ↔ wall-clock mapping
//! - [`roster`] — participant normalization into the run-scoped roster
//! - [`engine`] — the greedy allocation pass
//! - [`availability`] — the company double-booking check
//! - [`verify`] — post-run accounting
//! - [`error`] — error types

pub mod availability;
pub mod engine;
pub mod error;
pub mod roster;
pub mod slots;
pub mod verify;

pub use availability::is_company_available;
pub use engine::{allocate, Schedule};
pub use error::ScheduleError;
pub use roster::{Company, CompanyMeeting, Mentor, MentorRecord, Roster};
pub use slots::{slots_for, time_of, SlotIndex, TimePeriod};
pub use verify::{verify, VerifyReport};
