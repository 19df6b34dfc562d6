use super::errors::{Bound, ValidationError, ValidationErrors};
use super::scheme::{
    DEPOSIT_PERIOD_YEARS, INTEREST_RATE, MATURITY_PERIOD_YEARS, MAX_GIRL_AGE, MAX_YEARLY_INVESTMENT,
    MIN_GIRL_AGE, MIN_WITHDRAWAL_AGE, MIN_YEARLY_INVESTMENT, WITHDRAWAL_BALANCE_SHARE,
};
use super::types::{
    Inputs, ProjectionResult, ValidatedInputs, ValidatedWithdrawal, YearlyRecord,
};

/// Field-level rule for the monthly deposit. Shared between the form layer's
/// immediate feedback and the full `validate` pass so the two cannot drift.
pub fn check_investment(monthly_investment: f64) -> Result<(), ValidationError> {
    if !monthly_investment.is_finite() {
        return Err(ValidationError::InvalidNumber);
    }
    let yearly = monthly_investment * 12.0;
    if yearly < MIN_YEARLY_INVESTMENT {
        return Err(ValidationError::InvestmentOutOfRange {
            bound: Bound::Min,
            limit: MIN_YEARLY_INVESTMENT,
        });
    }
    if yearly > MAX_YEARLY_INVESTMENT {
        return Err(ValidationError::InvestmentOutOfRange {
            bound: Bound::Max,
            limit: MAX_YEARLY_INVESTMENT,
        });
    }
    Ok(())
}

pub fn check_girl_age(girl_age: f64) -> Result<(), ValidationError> {
    if !girl_age.is_finite() || girl_age.fract() != 0.0 {
        return Err(ValidationError::InvalidNumber);
    }
    if girl_age < MIN_GIRL_AGE as f64 {
        return Err(ValidationError::AgeOutOfRange {
            bound: Bound::Min,
            limit: MIN_GIRL_AGE,
        });
    }
    if girl_age > MAX_GIRL_AGE as f64 {
        return Err(ValidationError::AgeOutOfRange {
            bound: Bound::Max,
            limit: MAX_GIRL_AGE,
        });
    }
    Ok(())
}

pub fn check_withdrawal_age(withdrawal_age: f64) -> Result<(), ValidationError> {
    if !withdrawal_age.is_finite() || withdrawal_age.fract() != 0.0 {
        return Err(ValidationError::InvalidNumber);
    }
    if withdrawal_age < MIN_WITHDRAWAL_AGE as f64
        || withdrawal_age >= MATURITY_PERIOD_YEARS as f64
    {
        return Err(ValidationError::WithdrawalAgeOutOfRange {
            min: MIN_WITHDRAWAL_AGE,
            max: MATURITY_PERIOD_YEARS - 1,
        });
    }
    Ok(())
}

pub fn check_withdrawal_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::InvalidNumber);
    }
    if amount <= 0.0 {
        return Err(ValidationError::WithdrawalAmountNotPositive);
    }
    Ok(())
}

/// Runs every field rule and, when the prerequisite fields are individually
/// valid, the withdrawal-limit pre-pass. Collects one error per field rather
/// than stopping at the first.
pub fn validate(inputs: &Inputs) -> Result<ValidatedInputs, ValidationErrors> {
    let mut errors = ValidationErrors {
        investment: check_investment(inputs.monthly_investment).err(),
        age: check_girl_age(inputs.girl_age).err(),
        ..ValidationErrors::default()
    };

    if let Some(plan) = inputs.withdrawal {
        errors.withdrawal_age = check_withdrawal_age(plan.age).err();
        errors.withdrawal_amount = check_withdrawal_amount(plan.amount).err();

        // The cap depends on deposit, opening age and withdrawal age, so it is
        // only meaningful once all three passed their own checks.
        if errors.is_empty() {
            let yearly = inputs.monthly_investment * 12.0;
            let max = max_withdrawal(yearly, inputs.girl_age as u32, plan.age as u32);
            if plan.amount > max {
                errors.withdrawal_amount = Some(ValidationError::WithdrawalExceedsLimit { max });
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedInputs {
        monthly_investment: inputs.monthly_investment,
        yearly_investment: inputs.monthly_investment * 12.0,
        girl_age: inputs.girl_age as u32,
        withdrawal: inputs.withdrawal.map(|plan| ValidatedWithdrawal {
            age: plan.age as u32,
            amount: plan.amount,
        }),
    })
}

/// Interest credited for one scheme year. Deposits earn a full year of
/// interest in the year they are made; that is a scheme rule, not rounding.
fn year_interest(opening_balance: f64, contribution: f64) -> f64 {
    (opening_balance + contribution) * INTEREST_RATE
}

fn contribution_for_year(year: u32, yearly_investment: f64) -> f64 {
    if year <= DEPOSIT_PERIOD_YEARS {
        yearly_investment
    } else {
        0.0
    }
}

/// Maximum permissible one-time withdrawal: half the balance accrued before
/// the withdrawal year begins. Runs the same recurrence as `simulate` for
/// `withdrawal_year - 1` iterations; when that is zero or one the loop is
/// empty and the cap is zero.
pub fn max_withdrawal(yearly_investment: f64, girl_age: u32, withdrawal_age: u32) -> f64 {
    let withdrawal_year = withdrawal_age.saturating_sub(girl_age);
    let balance_at_withdrawal_start = (1..withdrawal_year).fold(0.0_f64, |opening, year| {
        let contribution = contribution_for_year(year, yearly_investment);
        opening + contribution + year_interest(opening, contribution)
    });
    balance_at_withdrawal_start * WITHDRAWAL_BALANCE_SHARE
}

struct YearState {
    opening_balance: f64,
    total_investment: f64,
    total_withdrawal: f64,
    records: Vec<YearlyRecord>,
}

/// The main projection loop, a fold over years 1..=MATURITY_PERIOD_YEARS.
/// Inputs are already validated; this is total over that domain.
pub fn simulate(inputs: &ValidatedInputs) -> ProjectionResult {
    let initial = YearState {
        opening_balance: 0.0,
        total_investment: 0.0,
        total_withdrawal: 0.0,
        records: Vec::with_capacity(MATURITY_PERIOD_YEARS as usize),
    };

    let state = (1..=MATURITY_PERIOD_YEARS).fold(initial, |mut state, year| {
        let age = inputs.girl_age + year;
        let investment = contribution_for_year(year, inputs.yearly_investment);
        let monthly_investment = contribution_for_year(year, inputs.monthly_investment);
        state.total_investment += investment;

        let interest = year_interest(state.opening_balance, investment);
        let mut closing_balance = state.opening_balance + investment + interest;

        let mut withdrawal = 0.0;
        if let Some(plan) = inputs.withdrawal {
            if age == plan.age {
                withdrawal = plan.amount;
                closing_balance -= withdrawal;
                state.total_withdrawal += withdrawal;
            }
        }

        state.records.push(YearlyRecord {
            year,
            age,
            monthly_investment,
            investment,
            interest,
            closing_balance,
            total_investment: state.total_investment,
            withdrawal,
        });
        state.opening_balance = closing_balance;
        state
    });

    ProjectionResult {
        total_investment: state.total_investment,
        // Derived, never accumulated, so it cannot double-count.
        total_interest: state.opening_balance + state.total_withdrawal - state.total_investment,
        maturity_value: state.opening_balance,
        total_withdrawal: state.total_withdrawal,
        yearly_data: state.records,
    }
}

/// Validate then simulate. On any validation failure no simulation runs and
/// the caller keeps whatever result it was already displaying.
pub fn run_projection(inputs: &Inputs) -> Result<ProjectionResult, ValidationErrors> {
    let validated = validate(inputs)?;
    Ok(simulate(&validated))
}
