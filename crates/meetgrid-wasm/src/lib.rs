//! WASM bindings for meetgrid-core.
//!
//! Exposes schedule planning and the slot grid to JavaScript via
//! `wasm-bindgen`, so a browser front end can run the allocation locally
//! instead of shipping participant data to a server. All complex types
//! cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meetgrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meetgrid_wasm.wasm
//! ```

use meetgrid_core::roster::{MentorRecord, Roster};
use meetgrid_core::slots::{self, SLOTS_PER_DAY};
use meetgrid_core::{allocate, ScheduleError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One row of the slot grid, for rendering time pickers.
#[derive(Serialize)]
struct SlotTimeDto {
    slot: u8,
    time: String,
    period: String,
}

/// Plan a schedule from participant records.
///
/// `records_json` must be a JSON array of participant records:
/// `{"name", "day", "timePeriod" ("AM"/"PM"/null), "companies"}`.
/// Returns the full schedule as a JSON string.
///
/// The run contract is all-or-nothing: when any request cannot be placed,
/// this returns an error naming the unresolved count instead of a partial
/// schedule.
#[wasm_bindgen(js_name = "planSchedule")]
pub fn plan_schedule(records_json: &str) -> Result<String, JsValue> {
    let records: Vec<MentorRecord> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;

    let schedule = allocate(Roster::from_records(records)).map_err(|e| match e {
        ScheduleError::UnresolvedRequests { unresolved, .. } => JsValue::from_str(&format!(
            "{} requested meeting(s) could not be booked — update the input data",
            unresolved
        )),
        other => JsValue::from_str(&other.to_string()),
    })?;

    serde_json::to_string(&schedule)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The full slot grid as a JSON array of `{slot, time, period}` rows.
#[wasm_bindgen(js_name = "slotTimes")]
pub fn slot_times() -> Result<String, JsValue> {
    let rows: Vec<SlotTimeDto> = (1..=SLOTS_PER_DAY)
        .map(|slot| {
            let time = slots::time_of(slot)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let period = slots::period_of(slot)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(SlotTimeDto {
                slot,
                time,
                period: period.to_string(),
            })
        })
        .collect::<Result<_, JsValue>>()?;

    serde_json::to_string(&rows)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
