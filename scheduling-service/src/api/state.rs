use crate::domain::solver::DriverConfig;

/// Per-process state shared across requests. Carries only the resolved
/// solver resource budget, no database pool, no Redis pool, no channel.
/// The handler calls `domain::solve` directly, a stateless per-request
/// function all the way to the transport edge.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub driver_config: DriverConfig,
}

impl AppState {
    pub fn new(driver_config: DriverConfig) -> Self {
        Self { driver_config }
    }
}
