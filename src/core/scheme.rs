//! Fixed parameters of the Sukanya Samriddhi Yojana scheme.

/// Years during which deposits are accepted.
pub const DEPOSIT_PERIOD_YEARS: u32 = 15;

/// Total years the account accrues interest before maturity.
pub const MATURITY_PERIOD_YEARS: u32 = 21;

/// Annual compounding rate, credited once per scheme year.
pub const INTEREST_RATE: f64 = 0.082;

/// Minimum total deposit per scheme year.
pub const MIN_YEARLY_INVESTMENT: f64 = 250.0;

/// Maximum total deposit per scheme year (the Section 80C ceiling).
pub const MAX_YEARLY_INVESTMENT: f64 = 150_000.0;

/// The account may be opened any time up to the girl's tenth birthday.
pub const MIN_GIRL_AGE: u32 = 0;
pub const MAX_GIRL_AGE: u32 = 10;

/// Earliest age at which the one-time partial withdrawal is permitted.
pub const MIN_WITHDRAWAL_AGE: u32 = 18;

/// Share of the accrued balance available to the partial withdrawal.
pub const WITHDRAWAL_BALANCE_SHARE: f64 = 0.5;
