//! Tests for participant normalization.

use meetgrid_core::roster::{MentorRecord, Roster};
use meetgrid_core::slots::TimePeriod;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn record(
    name: &str,
    day: Option<&str>,
    period: Option<TimePeriod>,
    companies: &[&str],
) -> MentorRecord {
    MentorRecord {
        name: name.to_string(),
        day: day.map(str::to_string),
        time_period: period,
        companies: companies.iter().map(|c| c.to_string()).collect(),
    }
}

// ── Slot inventory ──────────────────────────────────────────────────────────

#[test]
fn morning_mentor_gets_the_morning_inventory() {
    let roster = Roster::from_records(vec![record(
        "Ada",
        Some("Monday"),
        Some(TimePeriod::Morning),
        &["Acme"],
    )]);

    assert_eq!(roster.schedulable.len(), 1);
    let mentor = &roster.schedulable[0];
    assert_eq!(mentor.available_slots.len(), 12);
    assert_eq!(mentor.available_slots.iter().next(), Some(&1));
    assert_eq!(mentor.available_slots.iter().last(), Some(&12));
}

#[test]
fn mentor_without_period_is_unschedulable() {
    let roster = Roster::from_records(vec![record("Ada", Some("Monday"), None, &["Acme"])]);

    assert!(roster.schedulable.is_empty());
    assert_eq!(roster.unschedulable.len(), 1);
    assert!(roster.unschedulable[0].available_slots.is_empty());
}

#[test]
fn mentor_without_day_is_unschedulable_even_with_a_period() {
    // A half-day preference with no day cannot be placed on the grid.
    let roster = Roster::from_records(vec![record(
        "Ada",
        None,
        Some(TimePeriod::Afternoon),
        &["Acme"],
    )]);

    assert!(roster.schedulable.is_empty());
    assert_eq!(roster.unschedulable.len(), 1);
}

#[test]
fn mentor_with_neither_day_nor_period_is_unschedulable() {
    let roster = Roster::from_records(vec![record("Ada", None, None, &["Acme"])]);

    assert!(roster.schedulable.is_empty());
    assert_eq!(roster.unschedulable.len(), 1);
    // The request is kept for downstream reporting.
    assert_eq!(roster.unschedulable[0].pending_meetings, vec!["Acme"]);
}

// ── Request filtering ───────────────────────────────────────────────────────

#[test]
fn empty_company_entries_are_dropped() {
    let roster = Roster::from_records(vec![record(
        "Ada",
        Some("Monday"),
        Some(TimePeriod::Morning),
        &["Acme", "", "   ", "Globex"],
    )]);

    assert_eq!(
        roster.schedulable[0].pending_meetings,
        vec!["Acme", "Globex"]
    );
    // Placeholders never become companies either.
    assert_eq!(roster.companies.len(), 2);
}

#[test]
fn duplicate_requests_are_kept_as_distinct_occurrences() {
    let roster = Roster::from_records(vec![record(
        "Ada",
        Some("Monday"),
        Some(TimePeriod::Morning),
        &["Acme", "Acme"],
    )]);

    assert_eq!(roster.schedulable[0].pending_meetings, vec!["Acme", "Acme"]);
    // ...but the company table holds the name once.
    assert_eq!(roster.companies.len(), 1);
}

// ── Company derivation ──────────────────────────────────────────────────────

#[test]
fn companies_appear_in_first_seen_order() {
    let roster = Roster::from_records(vec![
        record(
            "Ada",
            Some("Monday"),
            Some(TimePeriod::Morning),
            &["Globex", "Acme"],
        ),
        record(
            "Grace",
            Some("Tuesday"),
            Some(TimePeriod::Afternoon),
            &["Acme", "Initech"],
        ),
    ]);

    let names: Vec<&str> = roster.companies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Globex", "Acme", "Initech"]);
}

#[test]
fn unschedulable_mentors_still_contribute_companies() {
    // The company table is derived from every record, matching the raw
    // survey scan — a company requested only by an unschedulable mentor
    // still exists, with zero meetings.
    let roster = Roster::from_records(vec![
        record("Ada", None, None, &["Hooli"]),
        record(
            "Grace",
            Some("Monday"),
            Some(TimePeriod::Morning),
            &["Acme"],
        ),
    ]);

    let names: Vec<&str> = roster.companies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Hooli", "Acme"]);
}

#[test]
fn fresh_mentors_start_with_no_confirmed_meetings() {
    let roster = Roster::from_records(vec![record(
        "Ada",
        Some("Monday"),
        Some(TimePeriod::Morning),
        &["Acme"],
    )]);

    assert!(roster.schedulable[0].confirmed_meetings.is_empty());
    assert!(roster.companies[0].confirmed_meetings.is_empty());
}
