use thiserror::Error;

/// Why a candidate employee record was rejected. Only the first violated rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the item must not be null")]
    MissingBody,
    #[error("the {0} is required")]
    MissingField(&'static str),
}
