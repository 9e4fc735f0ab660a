use thiserror::Error;

/// Timezone resolution errors.
///
/// Resolution is deliberately permissive: unrecognized identifiers fall back
/// to the default zone instead of failing, so this enum has a single variant.
#[derive(Error, Debug)]
pub enum TzError {
    /// An offset-prefixed display label (`(UTC±HH:MM) …`) for which no
    /// system timezone carries a matching display name.
    #[error("Unresolvable display-name timezone: {0}")]
    UnresolvableDisplayName(String),
}

pub type TzResult<T> = std::result::Result<T, TzError>;
