use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a submitted transaction is rejected. The ledger is never touched
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("amount `{0}` is not a number")]
    NonNumericAmount(String),
    #[error("amount must be a finite number")]
    NonFiniteAmount,
    #[error("amount is too large")]
    AmountOutOfRange,
    #[error("description is required")]
    EmptyDescription,
    #[error("category is required")]
    EmptyCategory,
    #[error("unknown transaction kind `{0}`")]
    UnknownKind(String),
    #[error("unknown listing order `{0}`")]
    UnknownOrder(String),
    #[error("`{0}` is not a date in YYYY-MM-DD form")]
    MalformedDate(String),
}

/// Reasons a spending report cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("{0} date is required")]
    MissingDate(&'static str),
    #[error("{field} date `{value}` is not in YYYY-MM-DD form")]
    MalformedDate { field: &'static str, value: String },
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
