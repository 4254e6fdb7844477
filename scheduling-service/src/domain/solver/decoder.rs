use selen::prelude::*;
use serde_json::{Map, Value};

use crate::domain::model::{ShortageEntry, SolveOutcome};
use crate::domain::normalizer::NormalizedProblem;
use crate::domain::solver::model_builder::ShortageVar;

/// Reads the solved variables back into domain terms. Day keys are emitted
/// as `"1".."D"` in order and shift codes preserve input order within each
/// day; both maps rely on `serde_json`'s order-preserving `Map` rather than
/// on keys happening to sort correctly.
pub fn decode(
    problem: &NormalizedProblem,
    assign: &[Vec<Vec<VarId>>],
    shortages: &[ShortageVar],
    solution: &Solution,
) -> SolveOutcome {
    let mut shifts = Map::new();
    for d in 0..problem.days {
        let mut day_shifts = Map::new();
        for (s_idx, shift) in problem.shifts.iter().enumerate() {
            let mut assignees = Vec::new();
            for (p_idx, person) in problem.people.iter().enumerate() {
                if solution.get_int(assign[p_idx][d][s_idx]) == 1 {
                    assignees.push(Value::String(person.id.clone()));
                }
            }
            day_shifts.insert(shift.code.clone(), Value::Array(assignees));
        }
        shifts.insert((d + 1).to_string(), Value::Object(day_shifts));
    }

    let shortage_entries: Vec<ShortageEntry> = shortages
        .iter()
        .filter_map(|s| {
            let count = solution.get_int(s.var) as i64;
            if count > 0 {
                Some(ShortageEntry {
                    date: s.day as i64 + 1,
                    time_range: s.range_key.clone(),
                    shortage_count: count,
                })
            } else {
                None
            }
        })
        .collect();

    SolveOutcome::Scheduled {
        shifts,
        shortages: shortage_entries,
    }
}
