use std::collections::BTreeMap;

use super::model::{Gender, Record};

// ---------------------------------------------------------------------------
// Per-year series
// ---------------------------------------------------------------------------

/// `(year, value)` pairs sorted by year ascending.
pub type YearSeries = Vec<(i32, f64)>;

/// `(year, change in percent)`; `None` where the change is undefined.
pub type ChangeSeries = Vec<(i32, Option<f64>)>;

/// Group by year and sum `value`, skipping missing cells.
///
/// A year present in `records` shows up even when all of its cells are
/// missing (its sum is then 0).
pub fn sum_by_year<'a, I, F>(records: I, value: F) -> YearSeries
where
    I: IntoIterator<Item = &'a Record>,
    F: Fn(&Record) -> Option<f64>,
{
    let mut groups: BTreeMap<i32, f64> = BTreeMap::new();
    for r in records {
        *groups.entry(r.year()).or_insert(0.0) += value(r).unwrap_or(0.0);
    }
    groups.into_iter().collect()
}

/// Aggregate (a): yearly sum of the arrivals column for `gender`.
pub fn gender_totals_by_year<'a, I>(records: I, gender: Gender) -> YearSeries
where
    I: IntoIterator<Item = &'a Record>,
{
    sum_by_year(records, |r| r.arrivals_for(gender))
}

/// Aggregate (c): yearly sum of total arrivals.
pub fn total_arrivals_by_year<'a, I>(records: I) -> YearSeries
where
    I: IntoIterator<Item = &'a Record>,
{
    sum_by_year(records, |r| r.total)
}

/// Aggregate (b): change relative to the previous year, in percent.
///
/// The first year has no predecessor and a zero predecessor has no defined
/// ratio; both come out as `None`.
pub fn percentage_change(series: &[(i32, f64)]) -> ChangeSeries {
    let mut out = Vec::with_capacity(series.len());
    let mut previous: Option<f64> = None;
    for &(year, current) in series {
        let change = previous
            .filter(|p| *p != 0.0)
            .map(|p| (current - p) / p * 100.0)
            .filter(|c| c.is_finite());
        out.push((year, change));
        previous = Some(current);
    }
    out
}

// ---------------------------------------------------------------------------
// Bundled views for one render pass
// ---------------------------------------------------------------------------

/// The three charts' data for the current subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateViews {
    pub gender_totals: YearSeries,
    pub percentage_change: ChangeSeries,
    pub total_arrivals: YearSeries,
}

impl AggregateViews {
    pub fn compute(subset: &[&Record], gender: Gender) -> Self {
        let gender_totals = gender_totals_by_year(subset.iter().copied(), gender);
        let percentage_change = percentage_change(&gender_totals);
        let total_arrivals = total_arrivals_by_year(subset.iter().copied());
        AggregateViews {
            gender_totals,
            percentage_change,
            total_arrivals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.gender_totals.is_empty() && self.total_arrivals.is_empty()
    }
}

/// Headline numbers for the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub records: usize,
    pub gender_arrivals: f64,
    pub total_arrivals: f64,
}

impl Summary {
    pub fn compute(subset: &[&Record], gender: Gender) -> Self {
        Summary {
            records: subset.len(),
            gender_arrivals: subset.iter().filter_map(|r| r.arrivals_for(gender)).sum(),
            total_arrivals: subset.iter().filter_map(|r| r.total).sum(),
        }
    }
}
