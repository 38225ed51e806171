use thiserror::Error;

/// Failure modes of the projection service. Validation failures carry one
/// message per offending request field and are detected before any
/// simulation work; `NonFinite` covers the (range-validated, so effectively
/// unreachable) case of the simulation overflowing `f64`.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("invalid request: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("projection produced a non-finite balance")]
    NonFinite,
}

impl ProjectionError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ProjectionError::Validation(_))
    }
}
