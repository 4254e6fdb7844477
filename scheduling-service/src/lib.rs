pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::model::{ProblemInstance, ShortageEntry, SolveOutcome};
pub use domain::solve;
