use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Weekday labels for `weekdayOfDay1` and `fixedOffWeekdays`, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Raw, loosely-typed problem instance as it arrives over the wire.
///
/// Nothing here is validated yet; `domain::normalizer::normalize` is the
/// only place that is allowed to reject or canonicalize it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInstance {
    pub days: i64,
    #[serde(default)]
    pub weekday_of_day1: i64,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub month: Option<i64>,
    #[serde(default)]
    pub shifts: Vec<ShiftDef>,
    #[serde(default)]
    pub people: Vec<PersonDef>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub wish_offs: HashMap<String, Vec<Value>>,
    #[serde(default)]
    pub rules: RulesDef,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub need_template: HashMap<String, Map<String, Value>>,
    #[serde(default)]
    pub day_type_by_date: Vec<Option<String>>,
    /// Accepted and carried through unused; not threaded into the objective.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub weights: Value,
    /// Accepted and ignored; no prior-month carry is encoded into day-0 coverage.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub previous_month_night_carry: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub strict_night: Value,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDef {
    pub code: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDef {
    pub id: String,
    #[serde(default)]
    pub can_work: Vec<String>,
    #[serde(default)]
    pub fixed_off_weekdays: Vec<String>,
    #[serde(default)]
    pub monthly_min: i64,
    pub monthly_max: Option<i64>,
    pub consec_max: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RulesDef {
    #[serde(default)]
    pub night_rest: HashMap<String, i64>,
}

/// Outcome of a single `solve` call. Never persisted, never reused.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Scheduled {
        shifts: Map<String, Value>,
        shortages: Vec<ShortageEntry>,
    },
    ValidationFailed {
        message: String,
    },
    Unsolvable {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShortageEntry {
    pub date: i64,
    pub time_range: String,
    pub shortage_count: i64,
}
