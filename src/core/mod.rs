mod engine;
mod types;

pub use engine::{MAX_PERIOD_YEARS, MIN_PERIOD_YEARS, MONTHS_PER_YEAR, project};
pub use types::ProjectionParams;
