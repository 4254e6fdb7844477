use thiserror::Error;

/// The three error kinds the solver core ever produces internally.
///
/// `solve()` never returns this type to a caller directly. It is always
/// folded into the matching `SolveOutcome` variant before the `solve()`
/// boundary is crossed (see `domain::solve`).
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("{message}")]
    Validation { message: String },

    #[error("解決可能なシフトが見つかりませんでした。")]
    Unsolvable,

    #[error("{message}")]
    Internal { message: String },
}

impl SolveError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn no_available_staff(day: usize, shift_code: &str) -> Self {
        Self::Validation {
            message: format!(
                "no available staff for day {} shift \"{}\"",
                day, shift_code
            ),
        }
    }
}

pub type SolveResult<T> = Result<T, SolveError>;
