use selen::prelude::*;

use crate::domain::normalizer::NormalizedProblem;

/// A shortage variable together with the domain metadata needed to decode
/// and report it: day index, the bucket it belongs to, and the required
/// head-count it was built against.
pub struct ShortageVar {
    pub day: usize,
    pub range_key: String,
    pub required: i64,
    pub var: VarId,
}

/// The model plus every symbol the decoder needs to read it back.
pub struct BuiltModel {
    pub model: Model,
    pub objective: VarId,
    /// assign[person][day][shift]
    pub assign: Vec<Vec<Vec<VarId>>>,
    pub shortages: Vec<ShortageVar>,
}

/// Translates a normalized problem into a CP-SAT-equivalent model: boolean
/// assignment variables, derived `works` indicators, the C1-C7 constraint
/// system, and the shortage-minimizing objective.
pub fn build(problem: &NormalizedProblem, solver_config: SolverConfig) -> BuiltModel {
    let mut m = Model::with_config(solver_config);

    let num_people = problem.people.len();
    let num_shifts = problem.shifts.len();
    let days = problem.days;

    // assign[p][d][s] and works[p][d], allocated for the full Cartesian
    // product; forbidden triples are pinned to 0 below instead of skipped,
    // so downstream coverage sums stay well-formed and indexing uniform.
    let mut assign: Vec<Vec<Vec<VarId>>> = Vec::with_capacity(num_people);
    let mut works: Vec<Vec<VarId>> = Vec::with_capacity(num_people);
    for p in 0..num_people {
        let mut person_days = Vec::with_capacity(days);
        let mut person_works = Vec::with_capacity(days);
        for _ in 0..days {
            let day_vars: Vec<VarId> = m.bools(num_shifts);
            person_days.push(day_vars);
            person_works.push(m.bool());
        }
        assign.push(person_days);
        works.push(person_works);
    }

    // C1: exactly one staffer per (day, shift).
    for d in 0..days {
        for s in 0..num_shifts {
            let column: Vec<VarId> = (0..num_people).map(|p| assign[p][d][s]).collect();
            let sum_var = m.sum(&column);
            post!(m, sum_var == int(1));
        }
    }

    // C2: at most one shift per person per day, linked to `works`.
    for p in 0..num_people {
        for d in 0..days {
            let row = &assign[p][d];
            let sum_var = m.sum(row);
            let works_pd = works[p][d];
            post!(m, sum_var == works_pd);
        }
    }

    // C3: forbidden assignments pinned to 0.
    for p in 0..num_people {
        for d in 0..days {
            for s in 0..num_shifts {
                if problem.forbidden(p, d, s) {
                    let v = assign[p][d][s];
                    post!(m, v == int(0));
                }
            }
        }
    }

    // C4: monthly bounds.
    for (p, person) in problem.people.iter().enumerate() {
        let works_total = m.sum(&works[p]);
        post!(m, works_total >= int(person.monthly_min as i32));
        post!(m, works_total <= int(person.monthly_max as i32));
    }

    // C5: consecutive-day cap, every sliding window of length consecMax+1.
    for (p, person) in problem.people.iter().enumerate() {
        if let Some(k) = person.consec_max {
            let window_len = (k + 1) as usize;
            if window_len <= days {
                for start in 0..=(days - window_len) {
                    let window = &works[p][start..start + window_len];
                    let window_sum = m.sum(window);
                    post!(m, window_sum <= int(k as i32));
                }
            }
        }
    }

    // C6: night rest, working a shift with K>0 blocks the next K days.
    for (&s, &k) in &problem.night_rest {
        for p in 0..num_people {
            for d in 0..days {
                for o in 1..=k {
                    let d2 = d + o as usize;
                    if d2 >= days {
                        break;
                    }
                    let pair_sum = m.add(assign[p][d][s], works[p][d2]);
                    post!(m, pair_sum <= int(1));
                }
            }
        }
    }

    // C7: coverage linkage and shortage slack, per the hour-bucket overlap rule below.
    let mut shortages = Vec::new();
    for d in 0..days {
        for bucket in &problem.requirements[d] {
            let mut covering = Vec::new();
            for s in 0..num_shifts {
                let shift = &problem.shifts[s];
                if same_day_overlap(shift.start, shift.end, bucket.h1, bucket.h2) {
                    for p in 0..num_people {
                        covering.push(assign[p][d][s]);
                    }
                }
                if d >= 1 && overnight_overlap(shift.start, shift.end, bucket.h1, bucket.h2) {
                    for p in 0..num_people {
                        covering.push(assign[p][d - 1][s]);
                    }
                }
            }

            let shortage_var = m.int(0, bucket.required.max(0) as i32);
            if covering.is_empty() {
                post!(m, shortage_var >= int(bucket.required as i32));
            } else {
                let covering_sum = m.sum(&covering);
                let total = m.add(shortage_var, covering_sum);
                post!(m, total >= int(bucket.required as i32));
            }

            shortages.push(ShortageVar {
                day: d,
                range_key: bucket.range_key.clone(),
                required: bucket.required,
                var: shortage_var,
            });
        }
    }

    let objective = if shortages.is_empty() {
        m.int(0, 0)
    } else {
        let vars: Vec<VarId> = shortages.iter().map(|s| s.var).collect();
        m.sum(&vars)
    };

    BuiltModel {
        model: m,
        objective,
        assign,
        shortages,
    }
}

/// Same-day portion of C7's overlap rule: strict overlap of `[start, min(end,24))`
/// with `[h1, h2)`.
fn same_day_overlap(start: i64, end: i64, h1: i64, h2: i64) -> bool {
    let end_clamped = end.min(24);
    start.max(h1) < end_clamped.min(h2)
}

/// Overnight-spill portion: the shift's post-midnight hours, attributed to
/// the *previous* day's assignment, expressed as window `(start-24, end-24)`.
fn overnight_overlap(start: i64, end: i64, h1: i64, h2: i64) -> bool {
    if end <= 24 {
        return false;
    }
    let spill_start = start - 24;
    let spill_end = end - 24;
    spill_start.max(h1) < spill_end.min(h2)
}
