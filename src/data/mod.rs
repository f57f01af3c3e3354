/// Data layer: records, loading, filtering and per-year aggregation.
///
/// Architecture:
/// ```text
///   arrivals_soe.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, day-first dates → ArrivalsDataset (cached once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year / month / state membership → subset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  subset + gender → per-year series
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
