use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::model::{ShortageEntry, SolveOutcome};

/// The wire-format response: a `status` discriminant alongside either the
/// schedule payload or an error message. Day keys and shift codes inside
/// `shifts` are whatever order `serde_json::Map` was built in by the
/// decoder, insertion order preserved through to JSON.
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "status")]
pub enum ScheduleResponse {
    #[serde(rename = "success")]
    Success {
        #[schema(value_type = Object)]
        shifts: Map<String, Value>,
        shortages: Vec<ShortageEntry>,
    },
    #[serde(rename = "error")]
    Error { message: String },
}

impl ScheduleResponse {
    /// Splits a `SolveOutcome` into the HTTP status code and response body
    /// the transport edge sends: `Scheduled` and `Unsolvable` both answer
    /// `200`, `ValidationFailed` answers `400`.
    pub fn from_outcome(outcome: SolveOutcome) -> (StatusCode, Self) {
        match outcome {
            SolveOutcome::Scheduled { shifts, shortages } => {
                (StatusCode::OK, Self::Success { shifts, shortages })
            }
            SolveOutcome::ValidationFailed { message } => {
                (StatusCode::BAD_REQUEST, Self::Error { message })
            }
            SolveOutcome::Unsolvable { message } => (StatusCode::OK, Self::Error { message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_maps_to_400() {
        let (status, body) = ScheduleResponse::from_outcome(SolveOutcome::ValidationFailed {
            message: "bad input".into(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(matches!(body, ScheduleResponse::Error { .. }));
    }

    #[test]
    fn unsolvable_keeps_200_with_error_status() {
        let (status, body) = ScheduleResponse::from_outcome(SolveOutcome::Unsolvable {
            message: "no feasible schedule".into(),
        });
        assert_eq!(status, StatusCode::OK);
        assert!(matches!(body, ScheduleResponse::Error { .. }));
    }

    #[test]
    fn scheduled_maps_to_200_success() {
        let (status, body) = ScheduleResponse::from_outcome(SolveOutcome::Scheduled {
            shifts: Map::new(),
            shortages: Vec::new(),
        });
        assert_eq!(status, StatusCode::OK);
        assert!(matches!(body, ScheduleResponse::Success { .. }));
    }
}
