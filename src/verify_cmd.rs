//! Verify command: compare weekday arithmetic with chrono over a year range.

use anyhow::{Context, Result, bail, ensure};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, info_span, warn};

use weekday_calendar::{CalendarDate, EPOCH_YEAR, date_sequence, days_in_year};

use crate::cli::VerifyArgs;
use crate::config::{VerifyToml, WeekdayConfig};

/// Inclusive range of years to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearRange {
    from: i32,
    to: i32,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct VerifyReport {
    checked: usize,
    mismatches: usize,
}

/// Run the reference-calendar verification.
pub fn run(args: VerifyArgs) -> Result<()> {
    let _cmd = info_span!("verify").entered();
    let config = WeekdayConfig::load(args.config.as_deref())?;
    let range = resolve_range(&config.verify, &args)?;

    info!(from = range.from, to = range.to, "verifying weekdays against chrono");
    let report = verify_range(range)?;
    info!(
        checked = report.checked,
        mismatches = report.mismatches,
        "verification finished"
    );

    if report.mismatches > 0 {
        bail!(
            "{} of {} dates disagree with the reference calendar",
            report.mismatches,
            report.checked
        );
    }
    println!(
        "{} dates from {}-01-01 to {}-12-31 match the reference calendar",
        report.checked, range.from, range.to
    );
    Ok(())
}

/// CLI flags override config values.
fn resolve_range(config: &VerifyToml, args: &VerifyArgs) -> Result<YearRange> {
    let from = args.from.unwrap_or(config.from);
    let to = args.to.unwrap_or(config.to);
    ensure!(
        from >= EPOCH_YEAR,
        "verify range starts at {from}, before the {EPOCH_YEAR} epoch"
    );
    ensure!(
        to >= from,
        "verify range is empty: last year {to} is before first year {from}"
    );
    let max_year = NaiveDate::MAX.year();
    ensure!(
        to <= max_year,
        "verify range ends at {to}, past the last year chrono supports ({max_year})"
    );
    Ok(YearRange { from, to })
}

fn verify_range(range: YearRange) -> Result<VerifyReport> {
    let mut reference_days = NaiveDate::from_ymd_opt(range.from, 1, 1)
        .with_context(|| format!("chrono cannot represent {}-01-01", range.from))?
        .iter_days();
    let mut report = VerifyReport::default();

    for year in range.from..=range.to {
        let jan_1 = CalendarDate::new(1, 1, year)
            .with_context(|| format!("invalid start of year {year}"))?;
        let dates = date_sequence(jan_1, usize::from(days_in_year(year)));
        debug!(year, days = dates.len(), "checking year");

        for date in dates {
            let reference = reference_days
                .next()
                .with_context(|| format!("chrono ran out of dates at {date}"))?;
            report.checked += 1;

            let same_date = (date.year(), u32::from(date.month()), u32::from(date.day()))
                == (reference.year(), reference.month(), reference.day());
            let ours = date.weekday();
            let theirs = reference.weekday();
            if !same_date || u32::from(ours.number_from_monday()) != theirs.number_from_monday() {
                warn!(%date, %reference, %ours, %theirs, "weekday mismatch");
                report.mismatches += 1;
            }
        }
    }
    Ok(report)
}
