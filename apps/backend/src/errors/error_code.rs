//! Error codes for the veto board API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the veto board API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Draft rules
    /// Event not legal in the current phase
    InvalidTransition,
    /// Acting team is not the team whose turn it is
    WrongTurn,
    /// Map/mode pair unknown or of the wrong family
    InvalidCombo,
    /// Combo (or map) already consumed by an earlier ban or pick
    ComboUnavailable,
    /// Picked combo family differs from the game slot type
    TypeMismatch,
    /// Undo requested with nothing to undo
    EmptyHistory,
    /// Team names empty or not distinct
    InvalidTeamName,
    /// Team label matches neither side of the series
    UnknownTeam,

    // Request Validation
    /// Invalid series ID provided
    InvalidSeriesId,
    /// Invalid series type provided
    InvalidSeriesType,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    /// Series not found
    SeriesNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Reference catalog could not be loaded
    CatalogUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::WrongTurn => "WRONG_TURN",
            Self::InvalidCombo => "INVALID_COMBO",
            Self::ComboUnavailable => "COMBO_UNAVAILABLE",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::EmptyHistory => "EMPTY_HISTORY",
            Self::InvalidTeamName => "INVALID_TEAM_NAME",
            Self::UnknownTeam => "UNKNOWN_TEAM",

            Self::InvalidSeriesId => "INVALID_SERIES_ID",
            Self::InvalidSeriesType => "INVALID_SERIES_TYPE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            Self::SeriesNotFound => "SERIES_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
