//! Credit-score history synthesis for demo charts.
//!
//! Histories are generated on demand and never stored. Randomness is
//! injected so tests and reproducible demos can pass a seeded RNG.

pub mod history;
pub mod types;

pub use history::{synthesize, synthesize_now};
pub use types::{
    HistoryRequest, HistoryVariant, ScoreBand, ScoreEvent, ScoreHistoryPoint, EVENT_SCHEDULE,
    FICO_MAX, FICO_MIN, MAX_MONTHS,
};
