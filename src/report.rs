//! Plain-text rendering of a projection: the same title, summary lines and
//! year-by-year table the web UI exports, for terminal use.

use crate::core::ProjectionResult;
use crate::format::format_inr;

const HEADERS: [&str; 7] = [
    "Year",
    "Age",
    "Monthly",
    "Yearly",
    "Withdrawal",
    "Interest",
    "Balance",
];

pub fn render_report(result: &ProjectionResult) -> String {
    let mut out = String::new();
    out.push_str("Sukanya Samriddhi Yojana (SSY) Summary\n\n");
    out.push_str(&format!(
        "Total Investment: {}\n",
        format_inr(result.total_investment)
    ));
    out.push_str(&format!(
        "Total Interest Earned: {}\n",
        format_inr(result.total_interest)
    ));
    if result.total_withdrawal > 0.0 {
        out.push_str(&format!(
            "Amount Withdrawn: {}\n",
            format_inr(result.total_withdrawal)
        ));
    }
    out.push_str(&format!(
        "Final Maturity Value: {}\n\n",
        format_inr(result.maturity_value)
    ));
    out.push_str(&render_table(result));
    out
}

fn render_table(result: &ProjectionResult) -> String {
    let rows: Vec<[String; 7]> = result
        .yearly_data
        .iter()
        .map(|record| {
            [
                record.year.to_string(),
                record.age.to_string(),
                format_inr(record.monthly_investment),
                format_inr(record.investment),
                format_inr(record.withdrawal),
                format_inr(record.interest),
                format_inr(record.closing_balance),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, row: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inputs, run_projection};

    fn sample_report() -> String {
        let inputs = Inputs {
            monthly_investment: 4_000.0,
            girl_age: 1.0,
            withdrawal: None,
        };
        render_report(&run_projection(&inputs).expect("valid inputs"))
    }

    #[test]
    fn report_carries_title_and_summary() {
        let report = sample_report();
        assert!(report.starts_with("Sukanya Samriddhi Yojana (SSY) Summary"));
        assert!(report.contains("Total Investment: ₹7,20,000"));
        assert!(report.contains("Total Interest Earned: ₹15,78,278"));
        assert!(report.contains("Final Maturity Value: ₹22,98,278"));
        assert!(!report.contains("Amount Withdrawn"));
    }

    #[test]
    fn table_has_one_row_per_scheme_year() {
        let report = sample_report();
        let table_lines = report
            .lines()
            .skip_while(|line| !line.trim_start().starts_with("Year"))
            .count();
        // Header plus 21 year rows.
        assert_eq!(table_lines, 22);
    }

    #[test]
    fn withdrawal_line_appears_only_when_withdrawn() {
        let inputs = Inputs {
            monthly_investment: 4_000.0,
            girl_age: 1.0,
            withdrawal: Some(crate::core::WithdrawalPlan {
                age: 18.0,
                amount: 100_000.0,
            }),
        };
        let report = render_report(&run_projection(&inputs).expect("valid inputs"));
        assert!(report.contains("Amount Withdrawn: ₹1,00,000"));
    }
}
