//! Common error infrastructure for draft-core.
//!
//! Scoring itself never fails: malformed input degrades to neutral values.
//! The errors in this crate describe rejected *input*:
//!
//! - [`RosterViolation`](crate::validation::RosterViolation): a roster breaks
//!   a lineup rule. Violations are accumulated, not short-circuited.
//! - [`ConfigError`](crate::config::ConfigError): a configuration table is
//!   internally inconsistent.

/// Common trait for all draft-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the human-readable message
/// - Error codes are stable `SCREAMING_SNAKE_CASE` identifiers meant for
///   clients and tests; messages may change
/// - `field` names the wire field the error concerns, when there is one
pub trait DraftError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;

    /// Returns the camelCase name of the offending input field, if any.
    fn field(&self) -> Option<&'static str> {
        None
    }
}
