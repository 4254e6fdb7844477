use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::Instrument;

use crate::api::requests::SolveScheduleRequest;
use crate::api::state::AppState;
use crate::domain;
use crate::presentation::ScheduleResponse;

/// Solve a single month's schedule.
///
/// Deserializes a `ProblemInstance`, runs the solver on a blocking task
/// (CP-SAT-equivalent search is CPU-bound and must not stall the async
/// runtime), and maps the result onto the HTTP response contract.
#[utoipa::path(
    post,
    path = "/api/v1/schedule/solve",
    request_body = SolveScheduleRequest,
    responses(
        (status = 200, description = "Schedule solved, or reported unsolvable", body = ScheduleResponse),
        (status = 400, description = "Problem instance failed validation", body = ScheduleResponse),
        (status = 500, description = "Internal error while running the solver", body = ScheduleResponse)
    ),
    tag = "schedule"
)]
pub async fn solve_schedule(
    State(state): State<AppState>,
    Json(problem): Json<SolveScheduleRequest>,
) -> impl IntoResponse {
    let driver_config = state.driver_config;
    let days = problem.days;
    let num_people = problem.people.len();
    let num_shifts = problem.shifts.len();

    let span = tracing::info_span!("solve_schedule", days, people = num_people, shifts = num_shifts);

    async move {
        let solved = tokio::task::spawn_blocking(move || domain::solve(&problem, driver_config))
            .await;

        let (status, body) = match solved {
            Ok(outcome) => ScheduleResponse::from_outcome(outcome),
            Err(join_err) => {
                tracing::error!(error = %join_err, "solver task panicked");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ScheduleResponse::Error {
                        message: "internal error while solving the schedule".to_string(),
                    },
                )
            }
        };

        tracing::info!(%status, "solve_schedule finished");
        (status, Json(body))
    }
    .instrument(span)
    .await
}
