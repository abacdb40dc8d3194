//! Command execution. Output goes to the given writer; diagnostics go to tracing.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use siddur_core::config::Settings;
use siddur_core::types::Location;
use siddur_luach::hebrew::month;
use siddur_luach::{CalendarDate, CalendarResult, FlagSet, YearInfo, evaluate_with, omer_day};

use crate::catalog::load_library;
use crate::cli::{Cli, Command};

/// ## Summary
/// Runs the parsed command line against the loaded settings.
///
/// ## Errors
/// Returns an error if the date is out of range, the library cannot be
/// loaded, the document is unknown or writing the output fails.
#[tracing::instrument(skip_all, fields(command = ?cli.command))]
pub fn run(cli: &Cli, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let location = location(cli, settings);

    match &cli.command {
        Command::List => {
            let library = load_library(&settings.library, location)?;
            for entry in library.entries() {
                writeln!(out, "{}\t{}", entry.id(), entry.title())?;
            }
        }
        Command::Flags { all, json } => {
            let date = day(cli, settings)?;
            let flags = evaluate_with(date, location);
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&flags)?)?;
            } else {
                write_flags(out, date, location, &flags, *all)?;
            }
        }
        Command::Render { id, json } => {
            let date = day(cli, settings)?;
            let library = load_library(&settings.library, location)?;
            let text = library
                .render(id, date)
                .with_context(|| format!("Failed to render {id}"))?;
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&text)?)?;
            } else {
                writeln!(out, "{}", text.to_text())?;
            }
        }
        Command::Tree { id } => {
            let library = load_library(&settings.library, location)?;
            let entry = library
                .get(id)
                .with_context(|| format!("Unknown document {id}"))?;
            let tree = serde_json::to_string_pretty(entry.document().root())?;
            writeln!(out, "{tree}")?;
        }
        Command::Year { year } => write_year(out, *year)?,
    }
    Ok(())
}

fn location(cli: &Cli, settings: &Settings) -> Location {
    if cli.diaspora {
        Location::Diaspora
    } else {
        settings.calendar.location
    }
}

fn day(cli: &Cli, settings: &Settings) -> anyhow::Result<CalendarDate> {
    let after_nightfall = cli.after_nightfall || settings.calendar.after_nightfall;
    let date = target_date(cli.date, after_nightfall).context("Date outside the calendar")?;
    tracing::debug!(%date, after_nightfall, "Resolved target date");
    Ok(date)
}

/// ## Summary
/// The Hebrew date for `civil`, or for today when `None`.
///
/// After nightfall the Hebrew day has already turned, so the following day is
/// returned.
///
/// ## Errors
/// Returns `OutOfRange` if the date is outside the supported years.
pub fn target_date(
    civil: Option<NaiveDate>,
    after_nightfall: bool,
) -> CalendarResult<CalendarDate> {
    let date = match civil {
        Some(civil) => CalendarDate::from_gregorian(civil)?,
        None => siddur_luach::today()?,
    };
    if after_nightfall {
        date.next_day()
    } else {
        Ok(date)
    }
}

fn write_flags(
    out: &mut impl Write,
    date: CalendarDate,
    location: Location,
    flags: &FlagSet,
    all: bool,
) -> anyhow::Result<()> {
    writeln!(out, "# {date} ({location})")?;
    if all {
        for (flag, value) in flags.entries() {
            writeln!(out, "{flag}\t{value}")?;
        }
    } else {
        for flag in flags.active() {
            writeln!(out, "{flag}")?;
        }
    }
    if let Some(count) = omer_day(date) {
        writeln!(out, "# omer day {count}")?;
    }
    Ok(())
}

fn write_year(out: &mut impl Write, year: i32) -> anyhow::Result<()> {
    let info = YearInfo::for_year(year)?;
    let leap = info.is_leap();
    writeln!(
        out,
        "{year}: {}, {} days, {}, pattern {}",
        if leap { "leap" } else { "common" },
        info.length(),
        info.kind(),
        info.pattern()
    )?;

    for m in info.months() {
        let (Some(start), Some(length)) = (info.month_start(m), info.month_length(m)) else {
            continue;
        };
        let civil = CalendarDate::from_fixed(start)?.to_gregorian()?;
        writeln!(out, "{}\t{civil}\t{length}", month::name(m, leap))?;
    }
    Ok(())
}
