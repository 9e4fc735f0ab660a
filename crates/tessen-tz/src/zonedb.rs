//! Zone database abstraction over the embedded tzdb.

use chrono_tz::{TZ_VARIANTS, Tz};
use std::str::FromStr;

/// Read-only provider of timezone definitions.
///
/// A provider is built once at process start and never mutated afterwards,
/// so concurrent callers may share it without locking. Enumeration order of
/// [`zones`](ZoneDatabase::zones), [`legacy_zones`](ZoneDatabase::legacy_zones)
/// and [`vendor_aliases`](ZoneDatabase::vendor_aliases) must be stable: the
/// resolver's substring fallback returns the first hit in table order, and
/// that order is observable behavior.
pub trait ZoneDatabase {
    /// Exact, case-sensitive lookup in the primary namespace.
    fn lookup(&self, id: &str) -> Option<Tz>;

    /// All primary zones, in stable enumeration order.
    fn zones(&self) -> &[Tz];

    /// Exact lookup in the secondary (legacy/alias) namespace.
    fn lookup_legacy(&self, id: &str) -> Option<Tz>;

    /// All secondary-namespace zones, in stable enumeration order.
    fn legacy_zones(&self) -> &[Tz];

    /// Vendor-specific name → canonical id pairs, in stable order.
    fn vendor_aliases(&self) -> &[(&'static str, &'static str)];

    /// Case-insensitive lookup in the vendor-alias table.
    fn vendor_alias(&self, name: &str) -> Option<&'static str> {
        self.vendor_aliases()
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, canonical)| *canonical)
    }

    /// Finds a zone whose localized display label equals `label` exactly.
    fn by_display_label(&self, label: &str) -> Option<Tz>;
}

/// Platform/vendor zone names mapped to canonical IANA ids.
///
/// Windows display names as emitted by Outlook and Exchange exports; the
/// common subset of the CLDR windowsZones mapping.
const VENDOR_ALIASES: &[(&str, &str)] = &[
    // North America
    ("Eastern Standard Time", "America/New_York"),
    ("Central Standard Time", "America/Chicago"),
    ("Mountain Standard Time", "America/Denver"),
    ("Pacific Standard Time", "America/Los_Angeles"),
    ("Alaskan Standard Time", "America/Anchorage"),
    ("Hawaiian Standard Time", "Pacific/Honolulu"),
    ("US Eastern Standard Time", "America/Indiana/Indianapolis"),
    ("US Mountain Standard Time", "America/Phoenix"),
    ("Atlantic Standard Time", "America/Halifax"),
    ("Central Standard Time (Mexico)", "America/Mexico_City"),
    ("Central America Standard Time", "America/Guatemala"),
    // South America
    ("SA Pacific Standard Time", "America/Bogota"),
    ("E. South America Standard Time", "America/Sao_Paulo"),
    ("Argentina Standard Time", "America/Argentina/Buenos_Aires"),
    // Europe and Africa
    ("GMT Standard Time", "Europe/London"),
    ("Greenwich Standard Time", "Atlantic/Reykjavik"),
    ("W. Europe Standard Time", "Europe/Berlin"),
    ("Central Europe Standard Time", "Europe/Budapest"),
    ("Central European Standard Time", "Europe/Warsaw"),
    ("Romance Standard Time", "Europe/Paris"),
    ("E. Europe Standard Time", "Europe/Chisinau"),
    ("FLE Standard Time", "Europe/Kiev"),
    ("Russian Standard Time", "Europe/Moscow"),
    ("Turkey Standard Time", "Europe/Istanbul"),
    ("Egypt Standard Time", "Africa/Cairo"),
    ("South Africa Standard Time", "Africa/Johannesburg"),
    // Asia and Oceania
    ("Israel Standard Time", "Asia/Jerusalem"),
    ("Arabian Standard Time", "Asia/Dubai"),
    ("India Standard Time", "Asia/Kolkata"),
    ("China Standard Time", "Asia/Shanghai"),
    ("Singapore Standard Time", "Asia/Singapore"),
    ("Tokyo Standard Time", "Asia/Tokyo"),
    ("Korea Standard Time", "Asia/Seoul"),
    ("W. Australia Standard Time", "Australia/Perth"),
    ("Cen. Australia Standard Time", "Australia/Adelaide"),
    ("E. Australia Standard Time", "Australia/Brisbane"),
    ("AUS Eastern Standard Time", "Australia/Sydney"),
    ("New Zealand Standard Time", "Pacific/Auckland"),
    ("UTC", "Etc/UTC"),
];

/// The secondary id namespace: tzdb backward-compatibility names.
///
/// Calendar exports routinely still carry these, sometimes spelled with a
/// hyphen instead of the slash (`US-Eastern`).
const LEGACY_IDS: &[&str] = &[
    "US/Alaska",
    "US/Aleutian",
    "US/Arizona",
    "US/Central",
    "US/East-Indiana",
    "US/Eastern",
    "US/Hawaii",
    "US/Indiana-Starke",
    "US/Michigan",
    "US/Mountain",
    "US/Pacific",
    "US/Samoa",
    "Canada/Atlantic",
    "Canada/Central",
    "Canada/Eastern",
    "Canada/Mountain",
    "Canada/Newfoundland",
    "Canada/Pacific",
    "Canada/Saskatchewan",
    "Canada/Yukon",
    "Mexico/BajaNorte",
    "Mexico/BajaSur",
    "Mexico/General",
    "Brazil/Acre",
    "Brazil/DeNoronha",
    "Brazil/East",
    "Brazil/West",
    "Chile/Continental",
    "Chile/EasterIsland",
    "Australia/ACT",
    "Australia/NSW",
    "Australia/North",
    "Australia/Queensland",
    "Australia/South",
    "Australia/Tasmania",
    "Australia/Victoria",
    "Australia/West",
    "Cuba",
    "Egypt",
    "Eire",
    "GB",
    "GB-Eire",
    "GMT",
    "Greenwich",
    "Hongkong",
    "Iceland",
    "Iran",
    "Israel",
    "Jamaica",
    "Japan",
    "Kwajalein",
    "Libya",
    "NZ",
    "NZ-CHAT",
    "Navajo",
    "PRC",
    "Poland",
    "Portugal",
    "ROC",
    "ROK",
    "Singapore",
    "Turkey",
    "UCT",
    "Universal",
    "W-SU",
    "Zulu",
];

/// Zone database backed by the tzdb embedded in `chrono-tz`.
///
/// The primary namespace is the full tzdb; the secondary namespace is the
/// backward-compatibility id set materialized at construction.
pub struct TzdbZoneDatabase {
    legacy: Vec<Tz>,
}

impl TzdbZoneDatabase {
    /// Builds the provider, materializing the legacy-id table.
    ///
    /// Legacy ids unknown to the embedded tzdb version are skipped.
    #[must_use]
    pub fn new() -> Self {
        let legacy = LEGACY_IDS
            .iter()
            .filter_map(|id| Tz::from_str(id).ok())
            .collect();
        Self { legacy }
    }
}

impl Default for TzdbZoneDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneDatabase for TzdbZoneDatabase {
    fn lookup(&self, id: &str) -> Option<Tz> {
        Tz::from_str(id).ok()
    }

    fn zones(&self) -> &[Tz] {
        &TZ_VARIANTS
    }

    fn lookup_legacy(&self, id: &str) -> Option<Tz> {
        self.legacy.iter().find(|tz| tz.name() == id).copied()
    }

    fn legacy_zones(&self) -> &[Tz] {
        &self.legacy
    }

    fn vendor_aliases(&self) -> &[(&'static str, &'static str)] {
        VENDOR_ALIASES
    }

    fn by_display_label(&self, _label: &str) -> Option<Tz> {
        // The embedded tzdb carries no localized display labels.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_lookup_is_exact() {
        let db = TzdbZoneDatabase::new();
        assert_eq!(db.lookup("America/New_York"), Some(Tz::America__New_York));
        assert_eq!(db.lookup("america/new_york"), None);
        assert_eq!(db.lookup("Nowhere/Special"), None);
    }

    #[test]
    fn test_legacy_namespace() {
        let db = TzdbZoneDatabase::new();
        assert_eq!(db.lookup_legacy("US/Eastern"), Some(Tz::US__Eastern));
        assert_eq!(db.lookup_legacy("America/New_York"), None);
        assert!(!db.legacy_zones().is_empty());
    }

    #[test]
    fn test_vendor_alias_is_case_insensitive() {
        let db = TzdbZoneDatabase::new();
        assert_eq!(
            db.vendor_alias("Eastern Standard Time"),
            Some("America/New_York")
        );
        assert_eq!(
            db.vendor_alias("EASTERN STANDARD TIME"),
            Some("America/New_York")
        );
        assert_eq!(db.vendor_alias("Nonexistent Standard Time"), None);
    }

    #[test]
    fn test_all_alias_targets_resolve_in_primary() {
        let db = TzdbZoneDatabase::new();
        for (key, canonical) in db.vendor_aliases() {
            assert!(
                db.lookup(canonical).is_some(),
                "alias {key} maps to unknown zone {canonical}"
            );
        }
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let db = TzdbZoneDatabase::new();
        let first: Vec<Tz> = db.zones().iter().copied().take(3).collect();
        let again: Vec<Tz> = db.zones().iter().copied().take(3).collect();
        assert_eq!(first, again);
    }
}
