//! Wall-clock-preserving zoned arithmetic across DST transitions.

use crate::error::TzResult;
use crate::resolver::ResolverContext;
use crate::zonedb::ZoneDatabase;
use chrono::{DateTime, Duration, LocalResult, Months, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// Upper probe bound when skipping over a spring-forward gap. tzdb gaps
/// never exceed a whole day (Pacific/Apia skipped 2011-12-30 entirely).
const MAX_GAP_PROBE_MINUTES: i64 = 26 * 60;

/// ## Summary
/// Maps a wall-clock time into `tz` without failing on DST edge cases.
///
/// Unambiguous times map to themselves. A time inside a fall-back fold maps
/// to the later of the two candidate instants. A time inside a
/// spring-forward gap is walked forward one minute at a time to the first
/// valid wall-clock minute.
#[must_use]
pub fn map_local_leniently(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, latest) => latest,
        LocalResult::None => {
            let mut probe = naive;
            for _ in 0..MAX_GAP_PROBE_MINUTES {
                probe += Duration::minutes(1);
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) => return dt,
                    LocalResult::Ambiguous(_, latest) => return latest,
                    LocalResult::None => {}
                }
            }
            // Unreachable for tzdb data; interpret as UTC rather than panic.
            tz.from_utc_datetime(&naive)
        }
    }
}

/// ## Summary
/// Adds `months` calendar months to a zoned value, preserving the wall-clock
/// time.
///
/// The date component is shifted with calendar clamping (Jan 31 plus one
/// month lands on the last day of February) and the result is rebound to the
/// same zone, so the UTC offset is recomputed for the new date instead of
/// being carried across a DST boundary the way a fixed-duration add would.
#[must_use]
pub fn add_months(zoned: DateTime<Tz>, months: i32) -> DateTime<Tz> {
    let date = zoned.date_naive();
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
    // Only calendar-range overflow is left after clamping; keep the date.
    .unwrap_or(date);
    map_local_leniently(zoned.timezone(), shifted.and_time(zoned.time()))
}

/// Adds `years` calendar years to a zoned value, preserving the wall-clock
/// time. Feb 29 clamps to Feb 28 in non-leap target years.
#[must_use]
pub fn add_years(zoned: DateTime<Tz>, years: i32) -> DateTime<Tz> {
    add_months(zoned, years.saturating_mul(12))
}

/// ## Summary
/// Resolves `zone_id` and maps `naive` into that zone leniently.
///
/// ## Errors
///
/// Returns [`crate::TzError::UnresolvableDisplayName`] for the single
/// resolution failure case; every other identifier resolves, possibly to the
/// context's default zone.
pub fn to_zoned_leniently<D: ZoneDatabase>(
    naive: NaiveDateTime,
    zone_id: &str,
    ctx: &ResolverContext<D>,
) -> TzResult<DateTime<Tz>> {
    let tz = ctx.resolve(zone_id)?;
    Ok(map_local_leniently(tz, naive))
}

/// Interprets `naive` leniently in `from_id` and re-expresses the instant in
/// `to_id`.
///
/// ## Errors
///
/// Propagates resolution failure for either identifier.
pub fn from_zone_to_zone<D: ZoneDatabase>(
    naive: NaiveDateTime,
    from_id: &str,
    to_id: &str,
    ctx: &ResolverContext<D>,
) -> TzResult<DateTime<Tz>> {
    let to = ctx.resolve(to_id)?;
    Ok(to_zoned_leniently(naive, from_id, ctx)?.with_timezone(&to))
}

/// Whether `zone` is reachable through the secondary (legacy/alias)
/// namespace.
#[must_use]
pub fn is_alias_zone<D: ZoneDatabase>(zone: Tz, db: &D) -> bool {
    db.lookup_legacy(zone.name()).is_some()
}
