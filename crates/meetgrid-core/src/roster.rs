//! Participant normalization: raw survey records into the run-scoped roster.
//!
//! Raw records arrive in survey order. Each becomes a [`Mentor`] carrying
//! the slot inventory implied by its day/period declaration; the company
//! table is derived from the union of every record's requests, first-seen
//! order. The [`Roster`] is the context object one allocation run owns;
//! no run state lives outside it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::slots::{self, SlotIndex, TimePeriod};

/// A raw participant record, as produced by the survey-export conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRecord {
    pub name: String,
    pub day: Option<String>,
    #[serde(rename = "timePeriod")]
    pub time_period: Option<TimePeriod>,
    #[serde(default)]
    pub companies: Vec<String>,
}

/// A mentor with a computed slot inventory and request ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub day: Option<String>,
    /// Slots still open for this mentor, ascending. Drained by the engine
    /// as meetings are confirmed.
    pub available_slots: BTreeSet<SlotIndex>,
    /// Requested company names not yet booked, in request order. The same
    /// name may appear more than once; each occurrence is a distinct
    /// request.
    pub pending_meetings: Vec<String>,
    /// Company names actually booked, in booking order.
    pub confirmed_meetings: Vec<String>,
}

/// A company and the meetings confirmed for it so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub confirmed_meetings: Vec<CompanyMeeting>,
}

/// One confirmed meeting, from the company's side of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyMeeting {
    pub mentor_name: String,
    pub day: String,
    pub slot: SlotIndex,
    /// Wall-clock rendering of `slot`, e.g. `"8:40"`.
    pub time: String,
}

/// Run-scoped context: the normalized collections one allocation run owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Mentors with at least one available slot, in survey order.
    pub schedulable: Vec<Mentor>,
    /// Mentors that declared no day or no period. They bypass the engine
    /// and are reported unchanged — missing availability is a follow-up
    /// for the program manager, not an error.
    pub unschedulable: Vec<Mentor>,
    /// Every company referenced by any request, first-seen order.
    pub companies: Vec<Company>,
}

impl Roster {
    /// Normalize raw records into the roster consumed by the engine.
    ///
    /// Empty company-name entries are survey placeholders and are dropped
    /// here, never treated as real requests. A mentor missing either the
    /// day or the period gets an empty slot inventory: a half-day
    /// preference without a day (or vice versa) cannot be placed on the
    /// grid.
    pub fn from_records(records: Vec<MentorRecord>) -> Self {
        let mut schedulable = Vec::new();
        let mut unschedulable = Vec::new();
        let mut companies: Vec<Company> = Vec::new();

        for record in records {
            let requests: Vec<String> = record
                .companies
                .into_iter()
                .filter(|name| !name.trim().is_empty())
                .collect();

            // First sighting of a name creates the company, so the table
            // ends up in mentor-input order, then request order.
            for name in &requests {
                if !companies.iter().any(|c| &c.name == name) {
                    companies.push(Company {
                        name: name.clone(),
                        confirmed_meetings: Vec::new(),
                    });
                }
            }

            let available_slots = if record.day.is_some() {
                slots::slots_for(record.time_period)
            } else {
                BTreeSet::new()
            };

            let mentor = Mentor {
                name: record.name,
                day: record.day,
                available_slots,
                pending_meetings: requests,
                confirmed_meetings: Vec::new(),
            };

            if mentor.available_slots.is_empty() {
                unschedulable.push(mentor);
            } else {
                schedulable.push(mentor);
            }
        }

        Roster {
            schedulable,
            unschedulable,
            companies,
        }
    }
}
