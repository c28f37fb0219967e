//! Configuration loading and representation.
//!
//! Values come from environment variables; anything unset falls back to
//! the library's standard lending terms.

use chrono::Duration;
use thiserror::Error;

use libris_core::Money;

pub const LOAN_PERIOD_DAYS_VAR: &str = "LIBRIS_LOAN_PERIOD_DAYS";
pub const DAILY_PENALTY_CENTS_VAR: &str = "LIBRIS_DAILY_PENALTY_CENTS";

const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;
const DEFAULT_DAILY_PENALTY_CENTS: i64 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer, got {value:?}")]
    NotAnInteger { var: &'static str, value: String },

    #[error("{var} must not be negative, got {value}")]
    Negative { var: &'static str, value: i64 },

    #[error("{var} is out of range, got {value}")]
    OutOfRange { var: &'static str, value: i64 },
}

/// Terms applied by the borrow and return handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LendingPolicy {
    /// Days between borrowing and the due date.
    pub loan_period: Duration,
    /// Fine per calendar day overdue.
    pub daily_penalty_rate: Money,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            loan_period: Duration::days(DEFAULT_LOAN_PERIOD_DAYS),
            daily_penalty_rate: Money::from_minor(DEFAULT_DAILY_PENALTY_CENTS),
        }
    }
}

impl LendingPolicy {
    /// Read the policy from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the policy through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let days = non_negative(&lookup, LOAN_PERIOD_DAYS_VAR, DEFAULT_LOAN_PERIOD_DAYS)?;
        let cents = non_negative(&lookup, DAILY_PENALTY_CENTS_VAR, DEFAULT_DAILY_PENALTY_CENTS)?;

        let loan_period = Duration::try_days(days).ok_or(ConfigError::OutOfRange {
            var: LOAN_PERIOD_DAYS_VAR,
            value: days,
        })?;

        Ok(Self {
            loan_period,
            daily_penalty_rate: Money::from_minor(cents),
        })
    }
}

fn non_negative(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::NotAnInteger { var, value: raw.clone() })?;
    if value < 0 {
        return Err(ConfigError::Negative { var, value });
    }
    Ok(value)
}
