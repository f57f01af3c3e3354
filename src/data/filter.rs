use std::collections::HashSet;
use std::hash::Hash;

use chrono::Month;

use super::model::{ArrivalsDataset, Gender, Record};

// ---------------------------------------------------------------------------
// Selection: which values are picked in each sidebar widget
// ---------------------------------------------------------------------------

/// Current widget state. Year, month and state are row predicates; gender only
/// picks the arrivals column read by the aggregates.
///
/// An empty set means nothing is selected for that dimension, so no row
/// passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub years: HashSet<i32>,
    pub months: HashSet<Month>,
    pub gender: Gender,
    pub states: HashSet<String>,
}

impl Selection {
    /// Every distinct value of the dataset selected, default gender.
    /// Filtering with this selection returns the whole dataset.
    pub fn all(dataset: &ArrivalsDataset) -> Self {
        Selection {
            years: dataset.years.iter().copied().collect(),
            months: dataset.months.iter().copied().collect(),
            gender: Gender::default(),
            states: dataset.states.iter().cloned().collect(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(&record.year())
            && self.months.contains(&record.month())
            && self.states.contains(&record.state)
    }
}

/// Records passing `selection`, in source order.
pub fn filter<'a>(records: &'a [Record], selection: &Selection) -> Vec<&'a Record> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Flip membership of `value` in `set`.
pub fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, state: &str) -> Record {
        let date = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        Record::new(date, state, Some(1.0), Some(2.0), Some(3.0))
    }

    fn dataset() -> ArrivalsDataset {
        ArrivalsDataset::from_records(vec![
            record(2019, 1, "Johor"),
            record(2019, 6, "Selangor"),
            record(2020, 1, "Johor"),
            record(2020, 6, "Sabah"),
            record(2021, 12, "Selangor"),
        ])
    }

    #[test]
    fn test_default_selection_is_identity() {
        let ds = dataset();
        let sel = Selection::all(&ds);
        let subset = filter(&ds.records, &sel);
        assert_eq!(subset.len(), ds.len());
        assert!(subset.iter().zip(&ds.records).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_subset_satisfies_predicates() {
        let ds = dataset();
        let mut sel = Selection::all(&ds);
        sel.years.remove(&2019);
        sel.months.remove(&Month::December);
        sel.states.remove("Sabah");

        let subset = filter(&ds.records, &sel);
        assert!(subset.len() <= ds.len());
        assert_eq!(subset.len(), 1);
        for r in &subset {
            assert!(sel.years.contains(&r.year()));
            assert!(sel.months.contains(&r.month()));
            assert!(sel.states.contains(&r.state));
        }
        assert_eq!(subset[0], &ds.records[2]);
    }

    #[test]
    fn test_gender_does_not_filter_rows() {
        let ds = dataset();
        let mut sel = Selection::all(&ds);
        sel.gender = Gender::Female;
        assert_eq!(filter(&ds.records, &sel).len(), ds.len());
    }

    #[test]
    fn test_empty_sets_yield_empty_subset() {
        let ds = dataset();
        for clear in 0..3 {
            let mut sel = Selection::all(&ds);
            match clear {
                0 => sel.years.clear(),
                1 => sel.months.clear(),
                _ => sel.states.clear(),
            }
            assert!(filter(&ds.records, &sel).is_empty());
        }
    }

    #[test]
    fn test_toggle() {
        let mut set: HashSet<i32> = [2019].into_iter().collect();
        toggle(&mut set, 2019);
        assert!(set.is_empty());
        toggle(&mut set, 2020);
        assert!(set.contains(&2020));
    }
}
