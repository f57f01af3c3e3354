use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

// ---------------------------------------------------------------------------
// Gender – selects which arrivals column is read
// ---------------------------------------------------------------------------

/// The two gender-specific arrivals columns of the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Header of the source column holding this gender's arrivals.
    pub const fn column(self) -> &'static str {
        match self {
            Gender::Male => "Arrivals: Gender Male",
            Gender::Female => "Arrivals: Gender Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// Calendar month of a date.
pub fn month_of(date: NaiveDate) -> Month {
    // `NaiveDate::month` is always 1..=12.
    Month::try_from(date.month() as u8).expect("calendar month out of range")
}

/// A single row of foreign entries for one date and migration state.
///
/// `year` and `month` are derived from `date` in [`Record::new`] and cannot be
/// set on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    date: NaiveDate,
    year: i32,
    month: Month,
    /// Migration state label.
    pub state: String,
    /// Male arrivals; `None` when the cell was empty.
    pub male: Option<f64>,
    /// Female arrivals; `None` when the cell was empty.
    pub female: Option<f64>,
    /// Total arrivals regardless of gender.
    pub total: Option<f64>,
}

impl Record {
    pub fn new(
        date: NaiveDate,
        state: impl Into<String>,
        male: Option<f64>,
        female: Option<f64>,
        total: Option<f64>,
    ) -> Self {
        Record {
            date,
            year: date.year(),
            month: month_of(date),
            state: state.into(),
            male,
            female,
            total,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Arrivals attributed to `gender`.
    pub fn arrivals_for(&self, gender: Gender) -> Option<f64> {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

// ---------------------------------------------------------------------------
// ArrivalsDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct values used to populate the
/// selection widgets.
#[derive(Debug, Clone, Default)]
pub struct ArrivalsDataset {
    pub records: Vec<Record>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct months in order of first appearance.
    pub months: Vec<Month>,
    /// Distinct states in order of first appearance.
    pub states: Vec<String>,
}

impl ArrivalsDataset {
    /// Build the option lists from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let years: BTreeSet<i32> = records.iter().map(Record::year).collect();

        let mut months: Vec<Month> = Vec::new();
        let mut states: Vec<String> = Vec::new();
        for r in &records {
            if !months.contains(&r.month()) {
                months.push(r.month());
            }
            if !states.contains(&r.state) {
                states.push(r.state.clone());
            }
        }

        ArrivalsDataset {
            years: years.into_iter().collect(),
            months,
            states,
            records,
        }
    }

    /// Earliest and latest dates in the table.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(Record::date).min()?;
        let last = self.records.iter().map(Record::date).max()?;
        Some((first, last))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
