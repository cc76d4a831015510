//! Tests for the company double-booking check and the verifier.

use meetgrid_core::availability::is_company_available;
use meetgrid_core::roster::{Company, CompanyMeeting, Mentor};
use meetgrid_core::verify::verify;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn meeting(mentor: &str, day: &str, slot: u8, time: &str) -> CompanyMeeting {
    CompanyMeeting {
        mentor_name: mentor.to_string(),
        day: day.to_string(),
        slot,
        time: time.to_string(),
    }
}

fn company(name: &str, meetings: Vec<CompanyMeeting>) -> Company {
    Company {
        name: name.to_string(),
        confirmed_meetings: meetings,
    }
}

fn mentor(name: &str, pending: &[&str], confirmed: &[&str]) -> Mentor {
    Mentor {
        name: name.to_string(),
        day: Some("Monday".to_string()),
        available_slots: Default::default(),
        pending_meetings: pending.iter().map(|c| c.to_string()).collect(),
        confirmed_meetings: confirmed.iter().map(|c| c.to_string()).collect(),
    }
}

// ── Availability ────────────────────────────────────────────────────────────

#[test]
fn company_with_no_meetings_is_available_everywhere() {
    let acme = company("Acme", vec![]);
    assert!(is_company_available(&acme, "Monday", 1));
    assert!(is_company_available(&acme, "Friday", 24));
}

#[test]
fn exact_day_and_slot_pair_conflicts() {
    let acme = company("Acme", vec![meeting("Ada", "Monday", 3, "8:40")]);
    assert!(!is_company_available(&acme, "Monday", 3));
}

#[test]
fn same_day_different_slot_is_fine() {
    // Conflict granularity is the slot, not the day.
    let acme = company("Acme", vec![meeting("Ada", "Monday", 3, "8:40")]);
    assert!(is_company_available(&acme, "Monday", 2));
    assert!(is_company_available(&acme, "Monday", 4));
}

#[test]
fn same_slot_different_day_is_fine() {
    let acme = company("Acme", vec![meeting("Ada", "Monday", 3, "8:40")]);
    assert!(is_company_available(&acme, "Tuesday", 3));
}

// ── Verifier ────────────────────────────────────────────────────────────────

#[test]
fn verifier_sums_across_mentors() {
    let mentors = vec![
        mentor("Ada", &[], &["Acme", "Globex"]),
        mentor("Grace", &["Hooli"], &["Acme"]),
    ];

    let report = verify(&mentors);
    assert_eq!(report.booked, 3);
    assert_eq!(report.unresolved, 1);
    assert!(!report.is_fully_booked());
}

#[test]
fn fully_booked_when_nothing_pends() {
    let mentors = vec![mentor("Ada", &[], &["Acme"])];
    let report = verify(&mentors);
    assert_eq!(report.booked, 1);
    assert_eq!(report.unresolved, 0);
    assert!(report.is_fully_booked());
}

#[test]
fn empty_roster_verifies_trivially() {
    let report = verify(&[]);
    assert_eq!(report.booked, 0);
    assert!(report.is_fully_booked());
}
