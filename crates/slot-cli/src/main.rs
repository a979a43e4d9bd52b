//! `slots` CLI — check booking-calendar availability from the command line.
//!
//! Block records are supplied as the REST `Block[]` JSON array, read from a
//! file (`-i`) or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable times for a date (default 08:00-18:00 working window)
//! echo '[]' | slots times --date 2026-03-02
//!
//! # Same, with explicit working hours and blocks from a file
//! slots times --date 2026-03-02 --start 08:00 --end 12:00 -i blocks.json
//!
//! # Is a date selectable at all?
//! slots check --date 2026-03-02 -i blocks.json
//!
//! # Check in another timezone, weekends allowed
//! slots check --date 2026-03-07 --timezone America/New_York --allow-weekends -i blocks.json
//!
//! # Blocks still relevant to the admin table, as pretty JSON
//! slots active -i blocks.json
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use slot_engine::blocks::active_blocks;
use slot_engine::model::{parse_date, parse_hhmm};
use slot_engine::{generate_available_times, is_date_disabled, Block, DateRules, WorkingHours};

#[derive(Parser)]
#[command(name = "slots", version, about = "Booking-calendar availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable hourly times for a date
    Times {
        /// Date to generate slots for (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Working-window opening time (HH:MM)
        #[arg(long, default_value = "08:00")]
        start: String,
        /// Working-window closing time (HH:MM)
        #[arg(long, default_value = "18:00")]
        end: String,
        /// Blocks JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Check whether a date is selectable in the booking calendar
    Check {
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// IANA timezone for the check (default: business timezone)
        #[arg(long)]
        timezone: Option<String>,
        /// Allow weekend dates to be selected
        #[arg(long)]
        allow_weekends: bool,
        /// Disable same-day booking once the closing hour is reached
        #[arg(long)]
        strict_hours: bool,
        /// Blocks JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the blocks still relevant to the admin table, as pretty JSON
    Active {
        /// IANA timezone for the check (default: business timezone)
        #[arg(long)]
        timezone: Option<String>,
        /// Blocks JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            date,
            start,
            end,
            input,
        } => {
            let blocks = read_blocks(input.as_deref())?;
            let date = parse_date(&date)?;
            let hours = WorkingHours {
                start: parse_hhmm(&start)?,
                end: parse_hhmm(&end)?,
            };

            for time in generate_available_times(date, Some(&hours), &blocks) {
                println!("{}", time.format("%H:%M"));
            }
        }
        Commands::Check {
            date,
            timezone,
            allow_weekends,
            strict_hours,
            input,
        } => {
            let blocks = read_blocks(input.as_deref())?;
            let date = parse_date(&date)?;

            let mut rules = match timezone.as_deref() {
                Some(name) => DateRules::for_timezone(name)?,
                None => DateRules::default(),
            };
            rules.block_weekends = !allow_weekends;
            rules.allow_after_hours = !strict_hours;

            // Anchor the candidate at local noon so the calendar day survives
            // the conversion to UTC in either hemisphere.
            let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("noon is a valid time");
            let candidate = rules
                .timezone
                .from_local_datetime(&date.and_time(noon))
                .single()
                .context("date does not resolve to an unambiguous local time")?
                .with_timezone(&Utc);

            if is_date_disabled(candidate, Utc::now(), &rules, &blocks) {
                println!("blocked");
            } else {
                println!("bookable");
            }
        }
        Commands::Active { timezone, input } => {
            let blocks = read_blocks(input.as_deref())?;
            let rules = match timezone.as_deref() {
                Some(name) => DateRules::for_timezone(name)?,
                None => DateRules::default(),
            };

            let active = active_blocks(&blocks, Utc::now(), rules.timezone);
            let json =
                serde_json::to_string_pretty(&active).context("Failed to serialize blocks")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Read and parse the `Block[]` JSON array from a file or stdin.
fn read_blocks(path: Option<&str>) -> Result<Vec<Block>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse blocks JSON")
}

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
