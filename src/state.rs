use std::sync::Arc;

use chrono::Month;

use crate::data::aggregate::{AggregateViews, Summary};
use crate::data::filter::{filter, toggle, Selection};
use crate::data::model::{ArrivalsDataset, Gender};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at start-up, shared with the load cache.
    pub dataset: Arc<ArrivalsDataset>,

    /// Current sidebar selection.
    pub selection: Selection,

    /// Charts' data for the current selection.
    pub views: AggregateViews,

    /// Headline numbers for the current selection.
    pub summary: Summary,
}

impl AppState {
    /// Start with everything selected and `gender` chosen.
    pub fn new(dataset: Arc<ArrivalsDataset>, gender: Gender) -> Self {
        let mut selection = Selection::all(&dataset);
        selection.gender = gender;
        let mut state = AppState {
            dataset,
            selection,
            views: AggregateViews::default(),
            summary: Summary::default(),
        };
        state.refresh();
        state
    }

    /// Re-run filter and aggregation for the current selection.
    pub fn refresh(&mut self) {
        let subset = filter(&self.dataset.records, &self.selection);
        self.views = AggregateViews::compute(&subset, self.selection.gender);
        self.summary = Summary::compute(&subset, self.selection.gender);
        log::debug!(
            "{} of {} records selected ({} years in view)",
            subset.len(),
            self.dataset.len(),
            self.views.gender_totals.len()
        );
    }

    pub fn toggle_year(&mut self, year: i32) {
        toggle(&mut self.selection.years, year);
        self.refresh();
    }

    pub fn toggle_month(&mut self, month: Month) {
        toggle(&mut self.selection.months, month);
        self.refresh();
    }

    pub fn toggle_state(&mut self, state: &str) {
        toggle(&mut self.selection.states, state.to_string());
        self.refresh();
    }

    pub fn set_gender(&mut self, gender: Gender) {
        if self.selection.gender != gender {
            self.selection.gender = gender;
            self.refresh();
        }
    }

    /// Select every value of `dimension`.
    pub fn select_all(&mut self, dimension: Dimension) {
        let ds = &self.dataset;
        match dimension {
            Dimension::Year => self.selection.years = ds.years.iter().copied().collect(),
            Dimension::Month => self.selection.months = ds.months.iter().copied().collect(),
            Dimension::State => self.selection.states = ds.states.iter().cloned().collect(),
        }
        self.refresh();
    }

    /// Deselect every value of `dimension`.
    pub fn select_none(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Year => self.selection.years.clear(),
            Dimension::Month => self.selection.months.clear(),
            Dimension::State => self.selection.states.clear(),
        }
        self.refresh();
    }
}

/// The multi-select sidebar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Year,
    Month,
    State,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use chrono::NaiveDate;

    fn state() -> AppState {
        let rec = |y: i32, m: u32, s: &str, male: f64, female: f64| {
            let date = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
            Record::new(date, s, Some(male), Some(female), Some(male + female))
        };
        let ds = ArrivalsDataset::from_records(vec![
            rec(2019, 1, "Johor", 100.0, 10.0),
            rec(2020, 2, "Johor", 150.0, 20.0),
            rec(2020, 2, "Sabah", 50.0, 5.0),
        ]);
        AppState::new(Arc::new(ds), Gender::Male)
    }

    #[test]
    fn test_initial_views_cover_everything() {
        let s = state();
        assert_eq!(s.summary.records, 3);
        assert_eq!(s.views.gender_totals, vec![(2019, 100.0), (2020, 200.0)]);
        assert_eq!(s.views.percentage_change, vec![(2019, None), (2020, Some(100.0))]);
    }

    #[test]
    fn test_toggles_refresh_views() {
        let mut s = state();
        s.toggle_state("Sabah");
        assert_eq!(s.summary.records, 2);
        assert_eq!(s.views.gender_totals, vec![(2019, 100.0), (2020, 150.0)]);

        s.toggle_year(2019);
        assert_eq!(s.views.gender_totals, vec![(2020, 150.0)]);
        assert_eq!(s.views.percentage_change, vec![(2020, None)]);

        s.toggle_month(Month::February);
        assert!(s.views.is_empty());
        assert_eq!(s.summary.records, 0);
    }

    #[test]
    fn test_gender_switch() {
        let mut s = state();
        let totals = s.views.total_arrivals.clone();
        s.set_gender(Gender::Female);
        assert_eq!(s.views.gender_totals, vec![(2019, 10.0), (2020, 25.0)]);
        assert_eq!(s.views.total_arrivals, totals);
    }

    #[test]
    fn test_select_none_then_all() {
        let mut s = state();
        s.select_none(Dimension::Year);
        assert!(s.views.is_empty());
        s.select_all(Dimension::Year);
        assert_eq!(s.summary.records, 3);
        s.select_none(Dimension::State);
        s.select_all(Dimension::State);
        s.select_none(Dimension::Month);
        assert_eq!(s.summary.records, 0);
    }
}
