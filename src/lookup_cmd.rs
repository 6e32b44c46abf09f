//! Lookup command: print the weekday of a single date.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use weekday_calendar::weekday_of;

use crate::cli::LookupArgs;

/// Run the single-date lookup.
pub fn run(args: LookupArgs) -> Result<()> {
    let _cmd = info_span!("lookup").entered();
    debug!(day = %args.day, month = %args.month, year = %args.year, "looking up weekday");

    let weekday = weekday_of(&args.day, &args.month, &args.year).with_context(|| {
        format!(
            "invalid date: day={} month={} year={}",
            args.day, args.month, args.year
        )
    })?;
    debug!(%weekday, "weekday computed");

    println!("{weekday}");
    Ok(())
}
