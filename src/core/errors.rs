use thiserror::Error;

use crate::format::{format_inr, format_inr_floor};

/// Which end of a range an input fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// A single failed validation rule, tagged with the parameters the message
/// needs. `Display` renders the default English wording; a presentation layer
/// that owns localisation can match on the variant instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid number.")]
    InvalidNumber,
    #[error("{}", investment_message(.bound, .limit))]
    InvestmentOutOfRange { bound: Bound, limit: f64 },
    #[error("{}", age_message(.bound, .limit))]
    AgeOutOfRange { bound: Bound, limit: u32 },
    #[error("Withdrawal age must be between {min} and {max}.")]
    WithdrawalAgeOutOfRange { min: u32, max: u32 },
    #[error("Withdrawal amount must be positive.")]
    WithdrawalAmountNotPositive,
    #[error("Amount cannot exceed 50% of the balance (Max: {}).", inr_floor(.max))]
    WithdrawalExceedsLimit { max: f64 },
}

fn investment_message(bound: &Bound, limit: &f64) -> String {
    match bound {
        Bound::Min => format!("Yearly total must be at least {}.", format_inr(*limit)),
        Bound::Max => format!("Yearly total cannot exceed {}.", format_inr(*limit)),
    }
}

fn age_message(bound: &Bound, limit: &u32) -> String {
    match bound {
        Bound::Min => format!("Girl's age cannot be less than {limit}."),
        Bound::Max => format!("Girl's age cannot be more than {limit}."),
    }
}

fn inr_floor(max: &f64) -> String {
    format_inr_floor(*max)
}

/// One error slot per form field. The form layer keeps its trigger disabled
/// while any slot is occupied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub investment: Option<ValidationError>,
    pub age: Option<ValidationError>,
    pub withdrawal_age: Option<ValidationError>,
    pub withdrawal_amount: Option<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.investment.is_none()
            && self.age.is_none()
            && self.withdrawal_age.is_none()
            && self.withdrawal_amount.is_none()
    }

    /// Occupied slots paired with their form-field name.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> {
        [
            ("investment", self.investment.as_ref()),
            ("age", self.age.as_ref()),
            ("withdrawalAge", self.withdrawal_age.as_ref()),
            ("withdrawalAmount", self.withdrawal_amount.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, error)| error.map(|e| (field, e)))
    }
}
