use std::time::{Duration, Instant};

use selen::prelude::*;

use crate::domain::error::SolveError;

/// Resource budget for a single solve call. `num_search_workers` is recorded
/// for parity with the configured worker count but not applied, since the
/// bound backend does not expose a worker count knob.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    pub time_limit: Duration,
    pub num_search_workers: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(30),
            num_search_workers: 8,
        }
    }
}

pub fn solver_config(driver: &DriverConfig) -> SolverConfig {
    SolverConfig::new().with_timeout_ms(driver.time_limit.as_millis() as u64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Optimal,
    Feasible,
}

/// Runs the improving search to exhaustion or timeout, whichever comes
/// first, and classifies the terminal status.
///
/// `Model::minimize` discards the best-found solution when its internal
/// timeout fires, so a time-exhausted search would return nothing.
/// `minimize_and_iterate` is used instead: it yields each improving solution
/// as it's found, so the last item produced before the iterator stops is
/// always kept. Elapsed wall-clock time against `driver.time_limit` is what
/// distinguishes a proven-optimal exhaustion from a timeout-truncated
/// search, since the iterator itself does not expose which one occurred.
pub fn run(
    model: Model,
    objective: VarId,
    driver: &DriverConfig,
) -> Result<(Solution, DriverStatus), SolveError> {
    let start = Instant::now();
    let mut last: Option<Solution> = None;

    for solution in model.minimize_and_iterate(objective) {
        last = Some(solution);
    }

    match last {
        None => Err(SolveError::Unsolvable),
        Some(solution) => {
            let status = if start.elapsed() < driver.time_limit {
                DriverStatus::Optimal
            } else {
                DriverStatus::Feasible
            };
            Ok((solution, status))
        }
    }
}
