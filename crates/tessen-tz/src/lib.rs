//! Timezone resolution and date-time normalization for calendar recurrence
//! evaluation.
//!
//! Serialized calendar data carries timezone identifiers in many broken
//! shapes: leading-slash prefixes, Windows display names, `Region-City`
//! spellings of legacy ids, raw fragments of IANA ids, and localized
//! `(UTC±HH:MM) …` labels. [`ResolverContext::resolve`] maps all of them
//! onto canonical [`chrono_tz::Tz`] handles through an ordered fallback
//! chain, and the arithmetic modules keep recurrence stepping correct across
//! DST transitions by preserving wall-clock time and recomputing offsets.
//!
//! All operations are pure functions over an immutable [`ResolverContext`]
//! built once at process start; a context can be shared freely across
//! threads.

pub mod align;
pub mod arith;
pub mod datetime;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod weekmath;
pub mod zonedb;

pub use align::align_for_comparison;
pub use datetime::{CalDateTime, TimeForm};
pub use error::{TzError, TzResult};
pub use resolver::ResolverContext;
pub use zonedb::{TzdbZoneDatabase, ZoneDatabase};
