use crate::domain::model::ProblemInstance;

/// The request body for `POST /api/v1/schedule/solve` is the wire-format
/// `ProblemInstance` verbatim, no transport-specific envelope wraps it.
pub type SolveScheduleRequest = ProblemInstance;
