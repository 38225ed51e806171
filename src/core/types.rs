/// Inputs for one projection scenario. Amounts are monetary units, the
/// return is a nominal annual percentage compounded monthly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub investment_period_years: u32,
    pub annual_return_percent: f64,
}
