//! Preview a recurrence rule from the command line.
//!
//! Usage: `cadence [RULE.json] [COUNT]`
//!
//! Reads a JSON rule (`-` for stdin; omitted for a demo rule starting
//! today), prints its summary, the generated occurrences, and a marked-up
//! month grid for the month of the first occurrence.

use std::io::Read;

use anyhow::Context;
use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use cadence_core::config::load_config;
use cadence_core::{Date, Weekday};
use cadence_recur::{describe, generate, month_grid, RecurrenceRule};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let mut args = std::env::args().skip(1);
    let rule = match args.next() {
        Some(source) => read_rule(&source)?,
        None => {
            let today = Date::from_naive(Local::now().date_naive())
                .context("today's date is outside the supported year range")?;
            RecurrenceRule::starting(today)
                .toggled_weekday(Weekday::Monday)
                .toggled_weekday(Weekday::Thursday)
        }
    };
    let count = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid count {raw:?}"))?,
        None => config.preview.count,
    };

    tracing::debug!(rule = ?rule, count, "Expanding rule");

    if let Err(e) = rule.validate() {
        tracing::warn!(error = %e, "Rule failed strict validation, expanding anyway");
    }

    let occurrences = generate(&rule, count);

    println!("{}", describe(&rule));
    println!();
    for date in &occurrences {
        println!("  {date}");
    }

    if let Some(first) = occurrences.first() {
        let today = Date::from_naive(Local::now().date_naive())
            .context("today's date is outside the supported year range")?;
        println!();
        print_grid(&month_grid(*first, &occurrences, today));
    }

    Ok(())
}

fn read_rule(source: &str) -> anyhow::Result<RecurrenceRule> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read rule from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read rule file {source:?}"))?
    };
    serde_json::from_str(&raw).context("failed to parse rule JSON")
}

/// Renders a month grid, marking occurrences with `*` and today with `.`.
fn print_grid(grid: &[cadence_recur::CalendarDay]) {
    println!("   Su  Mo  Tu  We  Th  Fr  Sa");
    for week in grid.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let day = if cell.is_current_month {
                format!("{:2}", cell.date.day)
            } else {
                "  ".to_string()
            };
            let marker = if cell.is_selected {
                '*'
            } else if cell.is_today {
                '.'
            } else {
                ' '
            };
            line.push_str(&format!(" {day}{marker} "));
        }
        println!("{line}");
    }
}
