use std::collections::{HashMap, HashSet};

use crate::domain::error::{SolveError, SolveResult};
use crate::domain::model::{ProblemInstance, WEEKDAY_LABELS};

/// A shift definition after canonicalization: same fields, borrowed nothing.
#[derive(Debug, Clone)]
pub struct NormalizedShift {
    pub code: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone)]
pub struct NormalizedPerson {
    pub id: String,
    pub can_work: HashSet<usize>,
    pub fixed_off_weekdays: HashSet<u8>,
    pub wish_off_days: HashSet<i64>,
    pub monthly_min: i64,
    pub monthly_max: i64,
    pub consec_max: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct TimeBucket {
    pub range_key: String,
    pub h1: i64,
    pub h2: i64,
    pub required: i64,
}

/// The validated, canonicalized view the Model Builder consumes. Nothing
/// downstream of this point re-reads the raw wire format.
#[derive(Debug, Clone)]
pub struct NormalizedProblem {
    pub days: usize,
    pub weekday_of_day: Vec<u8>,
    pub shifts: Vec<NormalizedShift>,
    pub people: Vec<NormalizedPerson>,
    /// shift index -> K (days of mandatory rest after working that shift)
    pub night_rest: HashMap<usize, i64>,
    /// requirement buckets for day d, in `needTemplate` insertion order; empty for days with no day type or an unrecognized one
    pub requirements: Vec<Vec<TimeBucket>>,
}

impl NormalizedProblem {
    /// True when (person, day, shift) is excluded by capability, a fixed
    /// off-weekday, or a wish-off request. Capability is per-shift; the
    /// other two are per-day and shared across all shifts that day.
    pub fn forbidden(&self, person_idx: usize, day: usize, shift_idx: usize) -> bool {
        let person = &self.people[person_idx];
        if !person.can_work.contains(&shift_idx) {
            return true;
        }
        if person
            .fixed_off_weekdays
            .contains(&self.weekday_of_day[day])
        {
            return true;
        }
        if person.wish_off_days.contains(&(day as i64 + 1)) {
            return true;
        }
        false
    }
}

pub fn normalize(raw: &ProblemInstance) -> SolveResult<NormalizedProblem> {
    if raw.days <= 0 {
        return Err(SolveError::validation("days must be a positive integer"));
    }
    let days = raw.days as usize;

    if raw.shifts.is_empty() {
        return Err(SolveError::validation("shifts must not be empty"));
    }
    if raw.people.is_empty() {
        return Err(SolveError::validation("people must not be empty"));
    }

    let mut shift_index: HashMap<&str, usize> = HashMap::new();
    let mut shifts = Vec::with_capacity(raw.shifts.len());
    for (idx, s) in raw.shifts.iter().enumerate() {
        if shift_index.insert(&s.code, idx).is_some() {
            return Err(SolveError::validation(format!(
                "duplicate shift code: {}",
                s.code
            )));
        }
        shifts.push(NormalizedShift {
            code: s.code.clone(),
            start: s.start,
            end: s.end,
        });
    }

    let mut person_index: HashMap<&str, usize> = HashMap::new();
    for p in &raw.people {
        if person_index.insert(&p.id, person_index.len()).is_some() {
            return Err(SolveError::validation(format!(
                "duplicate person id: {}",
                p.id
            )));
        }
    }

    let weekday_label_index: HashMap<&str, u8> = WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, i as u8))
        .collect();

    let mut people = Vec::with_capacity(raw.people.len());
    for p in &raw.people {
        let monthly_min = p.monthly_min.max(0);
        let monthly_max = p.monthly_max.unwrap_or(days as i64);
        if monthly_max < monthly_min {
            return Err(SolveError::validation(format!(
                "person {}: monthlyMax ({}) must be >= monthlyMin ({})",
                p.id, monthly_max, monthly_min
            )));
        }
        if let Some(k) = p.consec_max {
            if k <= 0 {
                return Err(SolveError::validation(format!(
                    "person {}: consecMax must be a positive integer",
                    p.id
                )));
            }
        }

        let can_work = p
            .can_work
            .iter()
            .filter_map(|code| shift_index.get(code.as_str()).copied())
            .collect();

        let fixed_off_weekdays = p
            .fixed_off_weekdays
            .iter()
            .filter_map(|label| weekday_label_index.get(label.as_str()).copied())
            .collect();

        let wish_off_days = raw
            .wish_offs
            .get(&p.id)
            .map(|days| days.iter().filter_map(positive_integer_day).collect())
            .unwrap_or_default();

        people.push(NormalizedPerson {
            id: p.id.clone(),
            can_work,
            fixed_off_weekdays,
            wish_off_days,
            monthly_min,
            monthly_max,
            consec_max: p.consec_max,
        });
    }

    let weekday_of_day1 = raw.weekday_of_day1.rem_euclid(7) as u8;
    let weekday_of_day: Vec<u8> = (0..days)
        .map(|d| (weekday_of_day1 as usize + d) as u8 % 7)
        .collect();

    let mut night_rest = HashMap::new();
    for (code, k) in &raw.rules.night_rest {
        if let Some(&idx) = shift_index.get(code.as_str()) {
            if *k > 0 {
                night_rest.insert(idx, *k);
            }
        }
    }

    let requirements = build_requirements(raw, days);

    let problem = NormalizedProblem {
        days,
        weekday_of_day,
        shifts,
        people,
        night_rest,
        requirements,
    };

    feasibility_precheck(&problem)?;

    Ok(problem)
}

/// Keeps positive integer-valued wish-off entries only; non-integer floats,
/// zero, and negatives are tolerated as noise rather than rejected.
fn positive_integer_day(value: &serde_json::Value) -> Option<i64> {
    let n = value.as_i64().or_else(|| {
        value.as_f64().and_then(|f| {
            if f.fract() == 0.0 {
                Some(f as i64)
            } else {
                None
            }
        })
    })?;
    if n > 0 {
        Some(n)
    } else {
        None
    }
}

/// Builds, per day, the requirement buckets in `needTemplate` insertion
/// order. Malformed `"H1-H2"` keys are skipped rather than rejected.
fn build_requirements(raw: &ProblemInstance, days: usize) -> Vec<Vec<TimeBucket>> {
    (0..days)
        .map(|d| {
            let day_type = raw.day_type_by_date.get(d).and_then(|t| t.as_ref());
            let Some(day_type) = day_type else {
                return Vec::new();
            };
            let Some(template) = raw.need_template.get(day_type) else {
                return Vec::new();
            };
            template
                .iter()
                .filter_map(|(range_key, required)| {
                    let (h1, h2) = parse_hour_range(range_key)?;
                    let required = required.as_i64()?;
                    Some(TimeBucket {
                        range_key: range_key.clone(),
                        h1,
                        h2,
                        required,
                    })
                })
                .collect()
        })
        .collect()
}

fn parse_hour_range(key: &str) -> Option<(i64, i64)> {
    let (lhs, rhs) = key.split_once('-')?;
    let h1: i64 = lhs.trim().parse().ok()?;
    let h2: i64 = rhs.trim().parse().ok()?;
    if h1 >= 0 && h1 < h2 && h2 <= 24 {
        Some((h1, h2))
    } else {
        None
    }
}

fn feasibility_precheck(problem: &NormalizedProblem) -> SolveResult<()> {
    for d in 0..problem.days {
        for (s_idx, shift) in problem.shifts.iter().enumerate() {
            let has_candidate = (0..problem.people.len()).any(|p| !problem.forbidden(p, d, s_idx));
            if !has_candidate {
                return Err(SolveError::no_available_staff(d + 1, &shift.code));
            }
        }
    }
    Ok(())
}
