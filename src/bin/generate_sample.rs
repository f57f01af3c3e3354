use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One output row, headers matching the dashboard's input file.
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Migration State")]
    state: &'a str,
    #[serde(rename = "Arrivals: Gender Male")]
    male: u64,
    #[serde(rename = "Arrivals: Gender Female")]
    female: u64,
    #[serde(rename = "Arrivals")]
    total: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Multiplicative noise around 1.0, `spread` wide on each side.
    fn jitter(&mut self, spread: f64) -> f64 {
        1.0 + spread * (2.0 * self.next_f64() - 1.0)
    }
}

/// Entry points and their typical monthly arrivals.
const STATES: [(&str, f64); 8] = [
    ("Johor", 42_000.0),
    ("Kuala Lumpur", 65_000.0),
    ("Penang", 28_000.0),
    ("Sabah", 15_000.0),
    ("Sarawak", 12_000.0),
    ("Selangor", 38_000.0),
    ("Kedah", 9_000.0),
    ("Melaka", 7_500.0),
];

/// Year-on-year level relative to the first year; the dip models closed
/// borders.
const YEAR_LEVELS: [(i32, f64); 6] = [
    (2018, 1.00),
    (2019, 1.08),
    (2020, 0.22),
    (2021, 0.03),
    (2022, 0.55),
    (2023, 0.92),
];

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "arrivals_soe.csv".to_string());
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    for &(year, level) in &YEAR_LEVELS {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(year, month, 1)
                .context("building sample date")?;
            // Holiday peaks in the middle and end of the year.
            let season = match date.month() {
                6 | 7 | 12 => 1.25,
                2 => 0.85,
                _ => 1.0,
            };
            for &(state, base) in &STATES {
                let total = (base * level * season * rng.jitter(0.15)).round();
                let male_share = 0.55 * rng.jitter(0.08);
                let male = (total * male_share).round();
                // A small remainder of each month's total carries no gender.
                let female = ((total - male) * 0.97).round();
                writer.serialize(Row {
                    date: date.format("%d/%m/%Y").to_string(),
                    state,
                    male: male as u64,
                    female: female as u64,
                    total: total as u64,
                })?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing sample CSV")?;

    log::info!("Wrote {rows} rows to {output_path}");
    println!("Wrote {rows} arrival rows ({} states) to {output_path}", STATES.len());
    Ok(())
}
