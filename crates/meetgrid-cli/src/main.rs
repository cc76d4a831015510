//! `meetgrid` CLI — plan mentor/company meeting schedules from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Plan a schedule from participant records (stdin → stdout)
//! cat mentors.json | meetgrid plan
//!
//! # Plan from file to file, machine-readable
//! meetgrid plan -i mentors.json -o schedule.json --json
//!
//! # Convert a raw survey export into clean participant records
//! meetgrid convert -i survey_export.json -o mentors.json
//!
//! # Print the slot grid
//! meetgrid grid
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

use meetgrid_core::roster::{MentorRecord, Roster};
use meetgrid_core::slots::{self, TimePeriod, SLOTS_PER_DAY};
use meetgrid_core::{allocate, Company, Schedule, ScheduleError};

#[derive(Parser)]
#[command(
    name = "meetgrid",
    version,
    about = "Mentor/company meeting-slot scheduler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate meeting slots from participant records
    Plan {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit the full schedule as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Convert a raw survey export into clean participant records
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the slot-index to wall-clock grid
    Grid,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            input,
            output,
            json,
        } => {
            let raw = read_input(input.as_deref())?;
            let records: Vec<MentorRecord> =
                serde_json::from_str(&raw).context("Failed to parse participant records")?;

            match allocate(Roster::from_records(records)) {
                Ok(schedule) => {
                    let rendered = if json {
                        serde_json::to_string_pretty(&schedule)?
                    } else {
                        render_report(&schedule)
                    };
                    write_output(output.as_deref(), &rendered)?;
                }
                Err(ScheduleError::UnresolvedRequests {
                    unresolved,
                    schedule,
                }) => {
                    // The run is a failure, but the partial company log is
                    // what lets the operator fix the input data.
                    eprint!("{}", render_company_log(&schedule.companies));
                    eprintln!("ERROR - there were {} meetings left to book", unresolved);
                    eprintln!("The greedy pass couldn't place every request. Please update the data.");
                    process::exit(1);
                }
                Err(other) => return Err(other.into()),
            }
        }
        Commands::Convert { input, output } => {
            let raw = read_input(input.as_deref())?;
            let rows: Vec<serde_json::Map<String, serde_json::Value>> =
                serde_json::from_str(&raw).context("Failed to parse survey export")?;

            let records = rows
                .into_iter()
                .map(convert_row)
                .collect::<Result<Vec<MentorRecord>>>()?;

            let rendered = serde_json::to_string_pretty(&records)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Grid => {
            let mut out = String::new();
            for slot in 1..=SLOTS_PER_DAY {
                let time = slots::time_of(slot)?;
                let period = slots::period_of(slot)?;
                out.push_str(&format!("{:>2}  {:>5}  {}\n", slot, time, period));
            }
            print!("{}", out);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render the human-readable schedule report: the company view, the mentor
/// view, any mentors still missing availability, and the verdict line.
fn render_report(schedule: &Schedule) -> String {
    let mut out = String::new();

    out.push_str("COMPANIES\n");
    out.push_str(&render_company_log(&schedule.companies));

    out.push_str("\nMENTORS\n");
    for mentor in &schedule.mentors {
        let day = mentor.day.as_deref().unwrap_or("-");
        out.push_str(&format!("\n{} - {}\n", mentor.name, day));
        for (company, time) in mentor_meetings(schedule, &mentor.name) {
            out.push_str(&format!("  {} at {}\n", company, time));
        }
    }

    if !schedule.unschedulable.is_empty() {
        out.push_str("\nMENTORS WITHOUT AVAILABILITY (follow up for a day/period)\n");
        for mentor in &schedule.unschedulable {
            out.push_str(&format!("  {}\n", mentor.name));
        }
    }

    out.push_str(&format!(
        "\nall {} meetings were booked successfully\n",
        schedule.booked
    ));
    out
}

/// Per-company meeting log, shared by the success report and the failure
/// diagnostic.
fn render_company_log(companies: &[Company]) -> String {
    let mut out = String::new();
    for company in companies {
        out.push_str(&format!("\n{}\n", company.name));
        for meeting in &company.confirmed_meetings {
            out.push_str(&format!(
                "  meeting with {} on {} at {}\n",
                meeting.mentor_name, meeting.day, meeting.time
            ));
        }
    }
    out
}

/// A mentor's meetings as (company, time) pairs, gathered from the company
/// side of the ledger so the report shows who they are meeting.
fn mentor_meetings<'a>(schedule: &'a Schedule, mentor_name: &str) -> Vec<(&'a str, &'a str)> {
    let mut meetings: Vec<(&str, &str, u8)> = schedule
        .companies
        .iter()
        .flat_map(|company| {
            company
                .confirmed_meetings
                .iter()
                .filter(|m| m.mentor_name == mentor_name)
                .map(|m| (company.name.as_str(), m.time.as_str(), m.slot))
        })
        .collect();
    meetings.sort_by_key(|&(_, _, slot)| slot);
    meetings
        .into_iter()
        .map(|(company, time, _)| (company, time))
        .collect()
}

// ---------------------------------------------------------------------------
// Survey-export conversion
// ---------------------------------------------------------------------------

/// Convert one raw survey row into a clean participant record.
///
/// The export uses `Name` / `Day` / `AMPM` columns, the literal string
/// `"Undefined"` for missing values, and any number of `Company N` columns
/// whose blank cells mean "no request".
fn convert_row(row: serde_json::Map<String, serde_json::Value>) -> Result<MentorRecord> {
    let mut record = MentorRecord {
        name: String::new(),
        day: None,
        time_period: None,
        companies: Vec::new(),
    };

    for (key, value) in row {
        let text = match value.as_str() {
            Some(s) => s.trim().to_string(),
            None => continue,
        };

        match key.as_str() {
            "Name" => record.name = text,
            "Day" => record.day = defined(text),
            "AMPM" => {
                record.time_period = match defined(text).as_deref() {
                    None => None,
                    Some("AM") => Some(TimePeriod::Morning),
                    Some("PM") => Some(TimePeriod::Afternoon),
                    Some(other) => {
                        anyhow::bail!("Unknown AMPM value '{}': expected AM, PM or Undefined", other)
                    }
                }
            }
            k if k.contains("Company") => {
                if !text.is_empty() {
                    record.companies.push(text);
                }
            }
            _ => {}
        }
    }

    if record.name.is_empty() {
        anyhow::bail!("Survey row is missing a Name column");
    }
    Ok(record)
}

/// Treat the export's `"Undefined"` marker (and blank cells) as absent.
fn defined(value: String) -> Option<String> {
    if value.is_empty() || value == "Undefined" {
        None
    } else {
        Some(value)
    }
}

// ---------------------------------------------------------------------------
// I/O plumbing
// ---------------------------------------------------------------------------

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
