//! Calendar date-time value type shared by the resolver and the arithmetic
//! helpers.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Zone association of a calendar date-time.
///
/// Serialized calendar data carries date-times in three mutually exclusive
/// forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeForm {
    /// Floating time - same wall-clock time in any timezone.
    Floating,

    /// UTC time - an absolute instant.
    Utc,

    /// Local time anchored to a named timezone.
    Zoned {
        /// The serialized timezone identifier, possibly malformed or aliased.
        tzid: String,
    },
}

/// A wall-clock date-time plus its zone association.
///
/// The wall clock is stored as-is; interpretation against real timezone
/// rules happens in the arithmetic and normalization modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalDateTime {
    naive: NaiveDateTime,
    form: TimeForm,
}

impl CalDateTime {
    /// Creates a floating date-time.
    #[must_use]
    pub const fn floating(naive: NaiveDateTime) -> Self {
        Self {
            naive,
            form: TimeForm::Floating,
        }
    }

    /// Creates a UTC date-time.
    #[must_use]
    pub const fn utc(naive: NaiveDateTime) -> Self {
        Self {
            naive,
            form: TimeForm::Utc,
        }
    }

    /// Creates a date-time anchored to a named timezone.
    #[must_use]
    pub fn zoned(naive: NaiveDateTime, tzid: impl Into<String>) -> Self {
        Self {
            naive,
            form: TimeForm::Zoned { tzid: tzid.into() },
        }
    }

    /// Wall-clock components of this value.
    #[must_use]
    pub const fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    /// Date component of this value.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.naive.date()
    }

    /// Time-of-day component of this value.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.naive.time()
    }

    /// Zone association of this value.
    #[must_use]
    pub const fn form(&self) -> &TimeForm {
        &self.form
    }

    /// Returns whether this is a UTC-anchored value.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, TimeForm::Utc)
    }

    /// Returns whether this is a floating value.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, TimeForm::Floating)
    }

    /// Returns the timezone identifier if this value is zone-anchored.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            TimeForm::Zoned { tzid } => Some(tzid),
            TimeForm::Floating | TimeForm::Utc => None,
        }
    }

    /// Replaces the wall-clock components, keeping the zone association.
    #[must_use]
    pub fn with_naive(self, naive: NaiveDateTime) -> Self {
        Self { naive, ..self }
    }

    /// Copies the zone association from another value, keeping the wall
    /// clock.
    #[must_use]
    pub fn with_form_of(self, other: &Self) -> Self {
        Self {
            form: other.form.clone(),
            ..self
        }
    }

    /// Advances by whole days.
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        self.shift(Duration::days(days))
    }

    /// Advances by whole hours.
    #[must_use]
    pub fn add_hours(self, hours: i64) -> Self {
        self.shift(Duration::hours(hours))
    }

    /// Advances by whole minutes.
    #[must_use]
    pub fn add_minutes(self, minutes: i64) -> Self {
        self.shift(Duration::minutes(minutes))
    }

    /// Advances by whole seconds.
    #[must_use]
    pub fn add_seconds(self, seconds: i64) -> Self {
        self.shift(Duration::seconds(seconds))
    }

    /// Advances by ticks (nanoseconds), the smallest representable unit.
    #[must_use]
    pub fn add_ticks(self, ticks: i64) -> Self {
        self.shift(Duration::nanoseconds(ticks))
    }

    fn shift(self, delta: Duration) -> Self {
        Self {
            naive: self.naive + delta,
            ..self
        }
    }
}

impl fmt::Display for CalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive.format("%Y%m%dT%H%M%S"))?;
        if self.is_utc() {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_forms() {
        let t = CalDateTime::zoned(naive(2026, 1, 23, 12, 0, 0), "America/New_York");
        assert!(!t.is_utc());
        assert!(!t.is_floating());
        assert_eq!(t.tzid(), Some("America/New_York"));

        let t = CalDateTime::utc(naive(2026, 1, 23, 12, 0, 0));
        assert!(t.is_utc());
        assert_eq!(t.tzid(), None);
    }

    #[test]
    fn test_display() {
        let t = CalDateTime::utc(naive(2026, 1, 23, 12, 0, 0));
        assert_eq!(t.to_string(), "20260123T120000Z");

        let t = CalDateTime::floating(naive(2026, 1, 23, 12, 0, 0));
        assert_eq!(t.to_string(), "20260123T120000");
    }

    #[test]
    fn test_component_adds_keep_form() {
        let t = CalDateTime::zoned(naive(2026, 1, 23, 12, 0, 0), "Europe/Paris");
        let shifted = t.clone().add_days(1).add_hours(2).add_seconds(30);
        assert_eq!(shifted.naive(), naive(2026, 1, 24, 14, 0, 30));
        assert_eq!(shifted.form(), t.form());
    }

    #[test]
    fn test_add_ticks() {
        let t = CalDateTime::utc(naive(2026, 1, 24, 0, 0, 0)).add_ticks(-1);
        assert_eq!(t.naive().time().to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_with_form_of() {
        let a = CalDateTime::zoned(naive(2026, 1, 23, 12, 0, 0), "Europe/Paris");
        let b = CalDateTime::utc(naive(2026, 6, 1, 8, 0, 0));
        let rebound = b.clone().with_form_of(&a);
        assert_eq!(rebound.naive(), b.naive());
        assert_eq!(rebound.tzid(), Some("Europe/Paris"));
    }
}
