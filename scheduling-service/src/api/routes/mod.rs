use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::requests::SolveScheduleRequest;
use crate::api::state::AppState;
use crate::domain::model::{PersonDef, RulesDef, ShiftDef, ShortageEntry};
use crate::presentation::ScheduleResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduling Service API",
        version = "1.0.0",
        description = "Monthly staffing schedule solver"
    ),
    paths(
        crate::api::handlers::schedule_handlers::solve_schedule,
    ),
    components(schemas(
        SolveScheduleRequest,
        ShiftDef,
        PersonDef,
        RulesDef,
        ShortageEntry,
        ScheduleResponse,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new().route("/schedule/solve", post(handlers::solve_schedule));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
