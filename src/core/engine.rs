use super::types::ProjectionParams;

pub const MIN_PERIOD_YEARS: u32 = 1;
pub const MAX_PERIOD_YEARS: u32 = 100;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Simulates month-by-month compounding and returns one balance per year:
/// index 0 is the starting balance before any growth, index i the balance
/// after the 12*i-th month. Growth is applied first each month, then the
/// contribution is added. Output length is `investment_period_years + 1`.
///
/// Values are returned at full precision; callers round for display.
pub fn project(params: &ProjectionParams) -> Vec<f64> {
    let monthly_rate = params.annual_return_percent / 100.0 / MONTHS_PER_YEAR as f64;
    let months = params.investment_period_years * MONTHS_PER_YEAR;

    let mut balance = params.initial_investment;
    let mut year_end_balances = Vec::with_capacity(params.investment_period_years as usize + 1);
    year_end_balances.push(balance);

    for month in 1..=months {
        balance = balance * (1.0 + monthly_rate) + params.monthly_contribution;
        if month % MONTHS_PER_YEAR == 0 {
            year_end_balances.push(balance);
        }
    }

    year_end_balances
}
