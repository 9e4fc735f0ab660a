//! Day-boundary truncation and zone-kind normalization for calendar
//! date-times.

use crate::arith;
use crate::datetime::CalDateTime;
use crate::error::TzResult;
use crate::resolver::ResolverContext;
use crate::zonedb::ZoneDatabase;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

/// Returns `t` at the first instant of its day, keeping the zone
/// association.
#[must_use]
pub fn start_of_day(t: &CalDateTime) -> CalDateTime {
    let midnight = t.date().and_time(NaiveTime::MIN);
    t.clone().with_naive(midnight)
}

/// Returns the last representable instant of `t`'s day: start of the next
/// day minus one tick.
#[must_use]
pub fn end_of_day(t: &CalDateTime) -> CalDateTime {
    start_of_day(t).add_days(1).add_ticks(-1)
}

/// Strips the zone association: UTC-anchored values stay UTC-kind, anything
/// else becomes floating.
#[must_use]
pub fn to_plain_value(t: &CalDateTime) -> CalDateTime {
    if t.is_utc() {
        CalDateTime::utc(t.naive())
    } else {
        CalDateTime::floating(t.naive())
    }
}

/// ## Summary
/// The absolute instant of `t`.
///
/// Zone-anchored values are interpreted leniently in their resolved zone;
/// floating values are interpreted in the context's default zone.
///
/// ## Errors
///
/// Propagates resolution failure for an unresolvable display-name TZID.
pub fn to_instant<D: ZoneDatabase>(
    t: &CalDateTime,
    ctx: &ResolverContext<D>,
) -> TzResult<DateTime<Utc>> {
    match t.tzid() {
        Some(tzid) => Ok(arith::to_zoned_leniently(t.naive(), tzid, ctx)?.with_timezone(&Utc)),
        None if t.is_utc() => Ok(Utc.from_utc_datetime(&t.naive())),
        None => {
            Ok(arith::map_local_leniently(ctx.default_zone(), t.naive()).with_timezone(&Utc))
        }
    }
}

/// Re-expresses `t` as a UTC-anchored value; already-UTC values are returned
/// unchanged.
///
/// ## Errors
///
/// Propagates resolution failure for an unresolvable display-name TZID.
pub fn to_utc_value<D: ZoneDatabase>(
    t: &CalDateTime,
    ctx: &ResolverContext<D>,
) -> TzResult<CalDateTime> {
    if t.is_utc() {
        return Ok(t.clone());
    }
    let instant = to_instant(t, ctx)?;
    Ok(CalDateTime::utc(instant.naive_utc()))
}

/// Re-expresses `t` as a local (floating) value in the context's default
/// zone; already-floating values are returned unchanged.
///
/// ## Errors
///
/// Propagates resolution failure for an unresolvable display-name TZID.
pub fn to_local_value<D: ZoneDatabase>(
    t: &CalDateTime,
    ctx: &ResolverContext<D>,
) -> TzResult<CalDateTime> {
    if t.is_floating() {
        return Ok(t.clone());
    }
    let instant = to_instant(t, ctx)?;
    let wall = instant.with_timezone(&ctx.default_zone()).naive_local();
    Ok(CalDateTime::floating(wall))
}

/// ## Summary
/// Converts `t` into the kind (UTC or local) used by `reference`.
///
/// When both or neither value is UTC-anchored, `t` is returned unchanged;
/// otherwise `t`'s instant is projected into the reference's kind.
///
/// ## Errors
///
/// Propagates resolution failure for an unresolvable display-name TZID.
pub fn normalize_against<D: ZoneDatabase>(
    t: &CalDateTime,
    reference: &CalDateTime,
    ctx: &ResolverContext<D>,
) -> TzResult<CalDateTime> {
    match (reference.is_utc(), t.is_utc()) {
        (true, true) | (false, false) => Ok(t.clone()),
        (true, false) => to_utc_value(t, ctx),
        (false, true) => to_local_value(t, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zonedb::TzdbZoneDatabase;
    use chrono::{NaiveDate, NaiveDateTime};
    use chrono_tz::Tz;

    fn ctx_with_default(default_zone: Tz) -> ResolverContext<TzdbZoneDatabase> {
        ResolverContext::new(TzdbZoneDatabase::new(), default_zone)
    }

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_start_of_day_zeroes_time_and_keeps_form() {
        let t = CalDateTime::zoned(naive(2026, 1, 23, 14, 45, 30), "Europe/Paris");
        let start = start_of_day(&t);
        assert_eq!(start.naive(), naive(2026, 1, 23, 0, 0, 0));
        assert_eq!(start.form(), t.form());
    }

    #[test]
    fn test_end_of_day_is_last_tick() {
        let t = CalDateTime::utc(naive(2026, 1, 23, 14, 45, 30));
        let end = end_of_day(&t);
        assert_eq!(end.date(), NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
        assert_eq!(end.time().to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_start_of_day_of_end_of_day_round_trips() {
        let t = CalDateTime::utc(naive(2026, 1, 23, 14, 45, 30));
        assert_eq!(start_of_day(&end_of_day(&t)), start_of_day(&t));

        let t = CalDateTime::floating(naive(2026, 12, 31, 0, 0, 0));
        assert_eq!(start_of_day(&end_of_day(&t)), start_of_day(&t));
    }

    #[test]
    fn test_to_plain_value() {
        let zoned = CalDateTime::zoned(naive(2026, 1, 23, 12, 0, 0), "Europe/Paris");
        assert!(to_plain_value(&zoned).is_floating());

        let utc = CalDateTime::utc(naive(2026, 1, 23, 12, 0, 0));
        assert!(to_plain_value(&utc).is_utc());
    }

    #[test]
    fn test_normalize_against_same_kind_is_identity() {
        let ctx = ctx_with_default(Tz::UTC);
        let a = CalDateTime::zoned(naive(2026, 1, 15, 12, 0, 0), "America/New_York");
        let b = CalDateTime::floating(naive(2026, 1, 15, 8, 0, 0));
        assert_eq!(normalize_against(&a, &b, &ctx).unwrap(), a);

        let u1 = CalDateTime::utc(naive(2026, 1, 15, 12, 0, 0));
        let u2 = CalDateTime::utc(naive(2026, 6, 15, 12, 0, 0));
        assert_eq!(normalize_against(&u1, &u2, &ctx).unwrap(), u1);
    }

    #[test]
    fn test_normalize_against_utc_reference() {
        let ctx = ctx_with_default(Tz::UTC);
        let t = CalDateTime::zoned(naive(2026, 1, 15, 12, 0, 0), "America/New_York");
        let reference = CalDateTime::utc(naive(2026, 1, 1, 0, 0, 0));

        let normalized = normalize_against(&t, &reference, &ctx).unwrap();
        assert!(normalized.is_utc());
        // Noon EST is 17:00 UTC.
        assert_eq!(normalized.naive(), naive(2026, 1, 15, 17, 0, 0));
    }

    #[test]
    fn test_normalize_against_local_reference() {
        let ctx = ctx_with_default(Tz::America__Chicago);
        let t = CalDateTime::utc(naive(2026, 1, 15, 12, 0, 0));
        let reference = CalDateTime::floating(naive(2026, 1, 1, 0, 0, 0));

        let normalized = normalize_against(&t, &reference, &ctx).unwrap();
        assert!(normalized.is_floating());
        // 12:00 UTC is 06:00 in Chicago in January.
        assert_eq!(normalized.naive(), naive(2026, 1, 15, 6, 0, 0));
    }

    #[test]
    fn test_to_instant_interprets_floating_in_default_zone() {
        let ctx = ctx_with_default(Tz::America__Chicago);
        let t = CalDateTime::floating(naive(2026, 1, 15, 6, 0, 0));
        let instant = to_instant(&t, &ctx).unwrap();
        assert_eq!(instant.naive_utc(), naive(2026, 1, 15, 12, 0, 0));
    }
}
