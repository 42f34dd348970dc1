// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors returned by the text parsers.
//!
//! Calendar arithmetic itself is infallible; only turning strings into
//! [`Instant`](crate::Instant) or [`PeriodKind`](crate::PeriodKind) values
//! can fail.

use thiserror::Error;

/// Errors produced when parsing calendar values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is neither `YYYY-MM-DD` nor `YYYY-MM-DD[T ]HH:MM:SS[.f]`.
    #[error("invalid instant '{input}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
    InvalidInstant {
        /// The rejected input.
        input: String,
    },

    /// The input does not name a period kind.
    #[error("unknown period kind '{input}'")]
    UnknownPeriodKind {
        /// The rejected input.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_include_input() {
        let err = Error::InvalidInstant {
            input: "2024-13-01".into(),
        };
        assert!(err.to_string().contains("2024-13-01"));

        let err = Error::UnknownPeriodKind {
            input: "fortnight".into(),
        };
        assert_eq!(err.to_string(), "unknown period kind 'fortnight'");
    }
}
