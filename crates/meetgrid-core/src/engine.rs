//! The greedy allocation pass.
//!
//! Mentors with the most requests go first; within a mentor, requests are
//! taken in survey order and placed into the lowest open slot where the
//! company is free. The heuristic is the contract, not an optimality
//! claim: a better global assignment may exist that the greedy order
//! misses, in which case the whole run fails.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::availability::is_company_available;
use crate::error::{Result, ScheduleError};
use crate::roster::{Company, CompanyMeeting, Mentor, Roster};
use crate::slots;
use crate::verify::verify;

/// The outcome of a fully booked allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Schedulable mentors after the run, most-requested first.
    pub mentors: Vec<Mentor>,
    /// Mentors that never entered the engine (no day or no period).
    pub unschedulable: Vec<Mentor>,
    /// Companies with their confirmed meetings.
    pub companies: Vec<Company>,
    /// Total meetings booked across all mentors.
    pub booked: usize,
}

/// Run the greedy pass over a normalized roster.
///
/// The roster is consumed: the engine owns all mentor and company state
/// for the duration of the run. Identical input ordering yields identical
/// output — there is nothing to gain from retrying a failed run on
/// unchanged data.
///
/// # Errors
/// [`ScheduleError::UnresolvedRequests`] when any request occurrence could
/// not be placed. The contract is all-or-nothing: the partial schedule is
/// attached for diagnostics only.
pub fn allocate(roster: Roster) -> Result<Schedule> {
    let Roster {
        mut schedulable,
        unschedulable,
        mut companies,
    } = roster;

    // Most-requested mentors first, so contested companies are placed
    // before less-constrained mentors drain their inventory. The sort must
    // be stable: tie order decides who wins a contested slot, and reruns
    // must reproduce it.
    schedulable.sort_by_key(|m| Reverse(m.pending_meetings.len()));

    let company_index: HashMap<String, usize> = companies
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name.clone(), i))
        .collect();

    for mentor in &mut schedulable {
        let day = mentor
            .day
            .clone()
            .expect("schedulable mentors always carry a day");

        let requests = std::mem::take(&mut mentor.pending_meetings);
        for company_name in &requests {
            // The normalizer derived the company table from these exact
            // requests, so a miss here is a bug, not a data problem.
            let idx = *company_index
                .get(company_name)
                .expect("requested company exists in the normalized roster");
            let company = &mut companies[idx];

            let chosen = mentor
                .available_slots
                .iter()
                .copied()
                .find(|&slot| is_company_available(company, &day, slot));

            if let Some(slot) = chosen {
                let time = slots::time_of(slot)?;
                mentor.confirmed_meetings.push(company_name.clone());
                company.confirmed_meetings.push(CompanyMeeting {
                    mentor_name: mentor.name.clone(),
                    day: day.clone(),
                    slot,
                    time,
                });
                // One mentor, one meeting per slot: a used slot is gone
                // even if another company would still pass the check.
                mentor.available_slots.remove(&slot);
            }
            // No slot found: the occurrence stays pending. Unmet requests
            // are collected and judged after the full pass.
        }

        mentor.pending_meetings = remaining_requests(&requests, &mentor.confirmed_meetings);
    }

    let report = verify(&schedulable);
    let schedule = Schedule {
        mentors: schedulable,
        unschedulable,
        companies,
        booked: report.booked,
    };

    if report.is_fully_booked() {
        Ok(schedule)
    } else {
        Err(ScheduleError::UnresolvedRequests {
            unresolved: report.unresolved,
            schedule: Box::new(schedule),
        })
    }
}

/// Order-preserving multiset difference: the original request sequence
/// minus one occurrence per confirmed booking.
///
/// A name requested twice but booked once stays pending once, so the
/// per-mentor accounting `pending + confirmed == requested` holds at the
/// occurrence level.
fn remaining_requests(requests: &[String], confirmed: &[String]) -> Vec<String> {
    let mut unmatched: HashMap<&str, usize> = HashMap::new();
    for name in confirmed {
        *unmatched.entry(name.as_str()).or_insert(0) += 1;
    }

    requests
        .iter()
        .filter(|name| match unmatched.get_mut(name.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
