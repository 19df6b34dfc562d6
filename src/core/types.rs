use serde::Serialize;

/// Raw inputs as supplied by the form layer. Ages and amounts arrive as plain
/// numbers and may be non-finite or fractional; `validate` sorts that out.
#[derive(Debug, Clone, Copy)]
pub struct Inputs {
    pub monthly_investment: f64,
    pub girl_age: f64,
    pub withdrawal: Option<WithdrawalPlan>,
}

#[derive(Debug, Clone, Copy)]
pub struct WithdrawalPlan {
    pub age: f64,
    pub amount: f64,
}

/// Inputs after validation: integer ages, the yearly deposit precomputed.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedInputs {
    pub monthly_investment: f64,
    pub yearly_investment: f64,
    pub girl_age: u32,
    pub withdrawal: Option<ValidatedWithdrawal>,
}

#[derive(Debug, Clone, Copy)]
pub struct ValidatedWithdrawal {
    pub age: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyRecord {
    pub year: u32,
    pub age: u32,
    pub monthly_investment: f64,
    /// Deposit credited this year; zero once the deposit period ends.
    pub investment: f64,
    pub interest: f64,
    pub closing_balance: f64,
    /// Cumulative deposits through this year.
    pub total_investment: f64,
    /// Amount withdrawn this year; non-zero in at most one record.
    pub withdrawal: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// One record per scheme year, chronological, year 1 through maturity.
    pub yearly_data: Vec<YearlyRecord>,
    pub total_investment: f64,
    pub total_interest: f64,
    pub maturity_value: f64,
    pub total_withdrawal: f64,
}
