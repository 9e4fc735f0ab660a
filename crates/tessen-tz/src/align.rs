//! Zone-context alignment of independently sourced date-times.

use crate::datetime::CalDateTime;
use crate::error::TzResult;
use crate::normalize::{to_instant, to_local_value, to_utc_value};
use crate::resolver::ResolverContext;
use crate::zonedb::ZoneDatabase;

/// ## Summary
/// Re-expresses `b` in `a`'s zone context so the two values can be compared
/// or combined.
///
/// When `a` is anchored to a named zone and `b` is not anchored to the same
/// one, `b` is converted into that zone. When `a` carries no zone id, `b` is
/// projected to UTC if `a` is UTC-anchored and to a local (floating) value
/// otherwise.
///
/// ## Errors
///
/// Propagates resolution failure for an unresolvable display-name TZID.
pub fn align_for_comparison<D: ZoneDatabase>(
    a: &CalDateTime,
    b: &CalDateTime,
    ctx: &ResolverContext<D>,
) -> TzResult<CalDateTime> {
    if let Some(tzid) = a.tzid() {
        if b.tzid() == Some(tzid) {
            return Ok(b.clone());
        }
        let zone = ctx.resolve(tzid)?;
        let wall = to_instant(b, ctx)?.with_timezone(&zone).naive_local();
        return Ok(CalDateTime::zoned(wall, tzid));
    }
    if a.is_utc() {
        to_utc_value(b, ctx)
    } else {
        to_local_value(b, ctx)
    }
}
