mod engine;
mod errors;
pub mod scheme;
mod types;

pub use engine::{
    check_girl_age, check_investment, check_withdrawal_age, check_withdrawal_amount,
    max_withdrawal, run_projection, simulate, validate,
};
pub use errors::{Bound, ValidationError, ValidationErrors};
pub use types::{
    Inputs, ProjectionResult, ValidatedInputs, ValidatedWithdrawal, WithdrawalPlan, YearlyRecord,
};
