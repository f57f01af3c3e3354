use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

use super::model::{ArrivalsDataset, Gender, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: cannot parse date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Columns the source file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Date",
    "Migration State",
    Gender::Male.column(),
    Gender::Female.column(),
    "Arrivals",
];

static DATASET: OnceCell<Arc<ArrivalsDataset>> = OnceCell::new();

/// Load the dataset once per process.
///
/// The first successful load is kept for the lifetime of the process and
/// returned on every later call, whatever `path` is passed. A failed load
/// leaves the cache empty.
pub fn load_cached(path: &Path) -> Result<Arc<ArrivalsDataset>, LoadError> {
    DATASET
        .get_or_try_init(|| load_file(path).map(Arc::new))
        .cloned()
}

/// CSV reader settings: headers and every cell are trimmed, so padded
/// numbers like ` 100 ` still parse.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

/// Parse the arrivals CSV at `path`.
pub fn load_file(path: &Path) -> Result<ArrivalsDataset, LoadError> {
    let reader = reader_builder().from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(reader)
}

/// Parse arrivals rows from any reader (used by [`load_file`] and tests).
pub fn read_records<R: std::io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<ArrivalsDataset, LoadError> {
    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        // Data rows start on line 2.
        let row = i + 2;
        let raw = result.map_err(|source| LoadError::Row { row, source })?;
        let date = parse_day_first(&raw.date).ok_or_else(|| LoadError::InvalidDate {
            row,
            value: raw.date.clone(),
        })?;
        records.push(Record::new(
            date,
            raw.state,
            raw.male,
            raw.female,
            raw.total,
        ));
    }

    Ok(ArrivalsDataset::from_records(records))
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Migration State")]
    state: String,
    #[serde(rename = "Arrivals: Gender Male")]
    male: Option<f64>,
    #[serde(rename = "Arrivals: Gender Female")]
    female: Option<f64>,
    #[serde(rename = "Arrivals")]
    total: Option<f64>,
}

// ---------------------------------------------------------------------------
// Day-first date parsing
// ---------------------------------------------------------------------------

/// Two-digit-year formats come before their four-digit twins: `%Y` would
/// happily read `20` as the year 20.
const DATE_FORMATS: [&str; 11] = [
    "%d/%m/%y",
    "%d/%m/%Y",
    "%d-%m-%y",
    "%d-%m-%Y",
    "%d.%m.%y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%d %b %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a date, reading ambiguous numeric dates as day/month/year.
pub fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(d);
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }
    // Trailing time of day in some other shape: keep the date part.
    let head = s.split(|c: char| c == 'T' || c.is_whitespace()).next()?;
    if head.len() < s.len() {
        return DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(head, fmt).ok());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Date,Migration State,Arrivals: Gender Male,Arrivals: Gender Female,Arrivals\n";

    fn from_str(text: &str) -> Result<ArrivalsDataset, LoadError> {
        read_records(reader_builder().from_reader(text.as_bytes()))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_day_first() {
        assert_eq!(parse_day_first("03/04/2021"), Some(ymd(2021, 4, 3)));
        assert_eq!(parse_day_first("1/2/2020"), Some(ymd(2020, 2, 1)));
        assert_eq!(parse_day_first("13-01-2019"), Some(ymd(2019, 1, 13)));
        assert_eq!(parse_day_first("05/06/20"), Some(ymd(2020, 6, 5)));
        assert_eq!(parse_day_first("2022-11-30"), Some(ymd(2022, 11, 30)));
        assert_eq!(parse_day_first("01/03/2020 00:00"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_day_first("2020-03-01T08:15:00"), Some(ymd(2020, 3, 1)));
        assert_eq!(parse_day_first("7 July 2023"), Some(ymd(2023, 7, 7)));
    }

    #[test]
    fn test_parse_day_first_rejects_garbage() {
        assert_eq!(parse_day_first(""), None);
        assert_eq!(parse_day_first("yesterday"), None);
        assert_eq!(parse_day_first("31/02/2020"), None);
        assert_eq!(parse_day_first("12/13/2020"), None);
    }

    #[test]
    fn test_read_records() {
        let text = format!(
            "{HEADER}01/01/2019,Johor,100,80,180\n15/02/2020,Selangor,150,,200\n"
        );
        let ds = from_str(&text).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.years, vec![2019, 2020]);
        assert_eq!(ds.months, vec![Month::January, Month::February]);
        assert_eq!(ds.states, vec!["Johor", "Selangor"]);

        let second = &ds.records[1];
        assert_eq!(second.date(), ymd(2020, 2, 15));
        assert_eq!(second.male, Some(150.0));
        assert_eq!(second.female, None);
        assert_eq!(second.total, Some(200.0));
    }

    #[test]
    fn test_extra_columns_and_padded_headers() {
        let text = "Date , Migration State,Arrivals: Gender Male,Arrivals: Gender Female,Arrivals,Source\n\
                    01/01/2019, Johor ,1,2,3,x\n";
        let ds = from_str(text).unwrap();
        assert_eq!(ds.states, vec!["Johor"]);
        assert_eq!(ds.records[0].total, Some(3.0));
    }

    #[test]
    fn test_padded_numeric_cells() {
        let text = format!("{HEADER}01/01/2019, Johor , 100 ,80,180\n 02/01/2019 ,Sabah,  7, , 9 \n");
        let ds = from_str(&text).unwrap();
        assert_eq!(ds.states, vec!["Johor", "Sabah"]);

        let first = &ds.records[0];
        assert_eq!(first.male, Some(100.0));
        assert_eq!(first.female, Some(80.0));
        assert_eq!(first.total, Some(180.0));

        let second = &ds.records[1];
        assert_eq!(second.date(), ymd(2019, 1, 2));
        assert_eq!(second.male, Some(7.0));
        assert_eq!(second.female, None);
        assert_eq!(second.total, Some(9.0));
    }

    #[test]
    fn test_missing_column() {
        let text = "Date,Migration State,Arrivals\n01/01/2019,Johor,1\n";
        match from_str(text) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Arrivals: Gender Male"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date_reports_row() {
        let text = format!("{HEADER}01/01/2019,Johor,1,1,2\nnot-a-date,Johor,1,1,2\n");
        match from_str(&text) {
            Err(LoadError::InvalidDate { row, value }) => {
                assert_eq!(row, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_number() {
        let text = format!("{HEADER}01/01/2019,Johor,lots,1,2\n");
        assert!(matches!(from_str(&text), Err(LoadError::Row { row: 2, .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("/definitely/not/here/arrivals_soe.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("arrivals_soe.csv"));
    }

    #[test]
    fn test_load_cached_keeps_first_load() {
        let mut first = NamedTempFile::new().unwrap();
        write!(first, "{HEADER}01/01/2019,Johor,1,1,2\n").unwrap();
        let mut second = NamedTempFile::new().unwrap();
        write!(second, "{HEADER}01/01/2019,Johor,1,1,2\n02/01/2019,Johor,1,1,2\n").unwrap();

        let a = load_cached(first.path()).unwrap();
        let b = load_cached(second.path()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.len(), 1);
    }
}
