//! Multi-tier resolution of serialized timezone identifiers.

use crate::error::{TzError, TzResult};
use crate::zonedb::{TzdbZoneDatabase, ZoneDatabase};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::{debug, trace};

/// Immutable resolution context: a zone database plus the default zone.
///
/// Built once at process start and shared by reference; resolution itself is
/// a pure function over the context's tables, so no locking is needed.
pub struct ResolverContext<D = TzdbZoneDatabase> {
    db: D,
    default_zone: Tz,
}

impl ResolverContext<TzdbZoneDatabase> {
    /// Builds a context over the embedded tzdb with the host's zone as the
    /// default, falling back to UTC when the host zone cannot be determined.
    #[must_use]
    pub fn from_system() -> Self {
        let default_zone = iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| Tz::from_str(&name).ok())
            .unwrap_or(Tz::UTC);
        Self::new(TzdbZoneDatabase::new(), default_zone)
    }
}

impl<D: ZoneDatabase> ResolverContext<D> {
    /// Creates a context from a database and an explicit default zone.
    #[must_use]
    pub const fn new(db: D, default_zone: Tz) -> Self {
        Self { db, default_zone }
    }

    /// The zone used when an identifier cannot be matched.
    #[must_use]
    pub const fn default_zone(&self) -> Tz {
        self.default_zone
    }

    /// The underlying zone database.
    #[must_use]
    pub const fn db(&self) -> &D {
        &self.db
    }

    /// ## Summary
    /// Resolves a serialized timezone identifier to a canonical zone.
    ///
    /// Matching is tiered and the first hit wins: blank input and exact ids,
    /// then alias remaps, then substring search over the id tables, so
    /// unambiguous identifiers never reach the fuzzy tiers. The substring
    /// tiers scan each table in its enumeration order; that order is part of
    /// the observable behavior and must not be changed.
    ///
    /// Unmatched identifiers resolve to the default zone rather than
    /// failing: real-world calendar exports carry too many malformed TZIDs
    /// for a strict policy to be usable.
    ///
    /// ## Errors
    ///
    /// Returns [`TzError::UnresolvableDisplayName`] when `id` is an
    /// offset-prefixed display label (`(UTC±HH:MM) …`) and no system zone
    /// carries that label. A label that *does* match is not returned; such
    /// identifiers still resolve to the default zone. The label probe only
    /// decides whether an error is reported.
    pub fn resolve(&self, id: &str) -> TzResult<Tz> {
        if id.trim().is_empty() {
            return Ok(self.default_zone);
        }
        let id = id.strip_prefix('/').unwrap_or(id);

        if let Some(tz) = self.db.lookup(id) {
            return Ok(tz);
        }

        if let Some(tz) = self
            .db
            .vendor_alias(id)
            .and_then(|canonical| self.db.lookup(canonical))
        {
            trace!(id, zone = tz.name(), "resolved via vendor alias");
            return Ok(tz);
        }

        if let Some(tz) = self.db.lookup_legacy(id) {
            return Ok(tz);
        }

        // Regional aliases written as `Region-City` instead of `Region/City`.
        let slashed = id.replace('-', "/");
        if let Some(tz) = self.db.lookup_legacy(&slashed) {
            trace!(id, zone = tz.name(), "resolved via dash-to-slash alias");
            return Ok(tz);
        }

        // Display labels must not reach the substring tiers: every
        // `(UTC±HH:MM) …` input contains the primary id `UTC` and would be
        // swallowed there. An unmatched label is the one reported error; a
        // matched label is deliberately not returned and falls back to the
        // default zone below.
        if is_offset_display_label(id) {
            if self.db.by_display_label(id).is_none() {
                return Err(TzError::UnresolvableDisplayName(id.to_string()));
            }
        } else if let Some(tz) = self.resolve_by_substring(id) {
            return Ok(tz);
        } else {
            // No fuzzy hit either; fall back to the default zone.
        }

        debug!(
            id,
            zone = self.default_zone.name(),
            "unresolved identifier, using default zone"
        );
        Ok(self.default_zone)
    }

    /// Last-resort fuzzy tiers: the first table entry whose id occurs inside
    /// the input, scanning the primary, vendor-alias, and legacy tables in
    /// that order.
    fn resolve_by_substring(&self, id: &str) -> Option<Tz> {
        if let Some(tz) = self.db.zones().iter().find(|tz| id.contains(tz.name())) {
            trace!(id, zone = tz.name(), "resolved via primary substring scan");
            return Some(*tz);
        }

        if let Some(tz) = self
            .db
            .vendor_aliases()
            .iter()
            .find(|(key, _)| id.contains(key))
            .and_then(|(_, canonical)| self.db.lookup(canonical))
        {
            trace!(id, zone = tz.name(), "resolved via vendor substring scan");
            return Some(tz);
        }

        if let Some(tz) = self
            .db
            .legacy_zones()
            .iter()
            .find(|tz| id.contains(tz.name()))
        {
            trace!(id, zone = tz.name(), "resolved via legacy substring scan");
            return Some(*tz);
        }

        None
    }
}

/// Matches `(UTC±HH:MM) <label>` display names as produced by desktop
/// calendar clients.
fn is_offset_display_label(id: &str) -> bool {
    let Some(rest) = id.strip_prefix("(UTC") else {
        return false;
    };
    let bytes = rest.as_bytes();
    bytes.len() > 8
        && (bytes[0] == b'+' || bytes[0] == b'-')
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3] == b':'
        && bytes[4].is_ascii_digit()
        && bytes[5].is_ascii_digit()
        && bytes[6] == b')'
        && bytes[7] == b' '
}
