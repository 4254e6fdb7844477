pub mod error;
pub mod model;
pub mod normalizer;
pub mod solver;

use error::SolveError;
use model::{ProblemInstance, SolveOutcome};
use solver::{decoder, driver, model_builder, DriverConfig};

/// The one operation the solver core exposes: normalize, build, solve,
/// decode. Stateless; nothing here outlives the call.
pub fn solve(problem: &ProblemInstance, config: DriverConfig) -> SolveOutcome {
    let normalized = match normalizer::normalize(problem) {
        Ok(normalized) => normalized,
        Err(err) => return outcome_from_error(err),
    };

    let solver_config = driver::solver_config(&config);
    let built = model_builder::build(&normalized, solver_config);

    match driver::run(built.model, built.objective, &config) {
        Ok((solution, _status)) => {
            decoder::decode(&normalized, &built.assign, &built.shortages, &solution)
        }
        Err(err) => outcome_from_error(err),
    }
}

/// Folds the three internal error kinds into the two error-shaped
/// `SolveOutcome` variants the invocation contract exposes. `Internal`
/// never arises inside `solve()` itself today (no I/O happens below this
/// boundary) but is preserved as a variant for a future backend failure
/// mode; it is reported the same way `Unsolvable` is, since the response
/// contract has no separate slot for it.
fn outcome_from_error(err: SolveError) -> SolveOutcome {
    match err {
        SolveError::Validation { message } => SolveOutcome::ValidationFailed { message },
        SolveError::Unsolvable => SolveOutcome::Unsolvable {
            message: err.to_string(),
        },
        SolveError::Internal { message } => SolveOutcome::Unsolvable { message },
    }
}
