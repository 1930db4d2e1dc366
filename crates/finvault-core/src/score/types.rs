//! Data types for synthesized score histories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest FICO score.
pub const FICO_MIN: u16 = 300;

/// Highest FICO score.
pub const FICO_MAX: u16 = 850;

/// Longest series a caller may request.
pub const MAX_MONTHS: usize = 120;

/// One month of a score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistoryPoint {
    /// First day of the month, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Score for the month
    pub score: u16,

    /// Difference from the previous point (0 for the first point)
    pub change: i32,
}

/// A named score impact scheduled at a month offset of a 24-month series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreEvent {
    pub name: &'static str,
    pub month: usize,
    pub impact: i32,
}

/// Month span that [`EVENT_SCHEDULE`] offsets are expressed in.
pub const EVENT_SPAN_MONTHS: usize = 24;

/// Fixed schedule applied cumulatively once each event's month is reached.
pub const EVENT_SCHEDULE: [ScoreEvent; 5] = [
    ScoreEvent {
        name: "late_payment",
        month: 3,
        impact: -20,
    },
    ScoreEvent {
        name: "new_credit_card",
        month: 6,
        impact: -8,
    },
    ScoreEvent {
        name: "paid_down_debt",
        month: 10,
        impact: 15,
    },
    ScoreEvent {
        name: "credit_limit_increase",
        month: 14,
        impact: 10,
    },
    ScoreEvent {
        name: "on_time_streak",
        month: 18,
        impact: 12,
    },
];

impl ScoreEvent {
    /// Month index of this event in a series of `months` points.
    pub fn scheduled_month(&self, months: usize) -> usize {
        self.month * months / EVENT_SPAN_MONTHS
    }
}

/// Shape of the generated series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryVariant {
    /// Two years, full FICO range.
    #[default]
    Full,
    /// One year, clamped to the fair-and-above range.
    Short,
}

impl HistoryVariant {
    pub fn default_months(&self) -> usize {
        match self {
            HistoryVariant::Full => 24,
            HistoryVariant::Short => 12,
        }
    }

    /// Inclusive clamp applied to every synthesized point but the last.
    pub fn bounds(&self) -> (u16, u16) {
        match self {
            HistoryVariant::Full => (FICO_MIN, FICO_MAX),
            HistoryVariant::Short => (580, FICO_MAX),
        }
    }

    /// How far below the current score the series starts.
    pub fn baseline_offset(&self) -> i32 {
        match self {
            HistoryVariant::Full => 60,
            HistoryVariant::Short => 30,
        }
    }

    /// Noise amplitude at the oldest point; shrinks linearly to zero.
    pub fn max_noise(&self) -> i32 {
        match self {
            HistoryVariant::Full => 8,
            HistoryVariant::Short => 5,
        }
    }
}

/// Parameters for one synthesized history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRequest {
    pub current_score: u16,
    pub variant: HistoryVariant,
    pub months: usize,
}

impl HistoryRequest {
    pub fn new(current_score: u16, variant: HistoryVariant) -> Self {
        Self {
            current_score,
            variant,
            months: variant.default_months(),
        }
    }

    pub fn with_months(mut self, months: usize) -> Self {
        self.months = months;
        self
    }
}

/// Rating band for a FICO score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Poor,
    Fair,
    Good,
    VeryGood,
    Exceptional,
}

impl ScoreBand {
    pub fn from_score(score: u16) -> Self {
        match score {
            0..=579 => ScoreBand::Poor,
            580..=669 => ScoreBand::Fair,
            670..=739 => ScoreBand::Good,
            740..=799 => ScoreBand::VeryGood,
            _ => ScoreBand::Exceptional,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Fair => "Fair",
            ScoreBand::Good => "Good",
            ScoreBand::VeryGood => "Very Good",
            ScoreBand::Exceptional => "Exceptional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_schedule_scales_with_length() {
        let paid_down = EVENT_SCHEDULE[2];
        assert_eq!(paid_down.scheduled_month(24), 10);
        assert_eq!(paid_down.scheduled_month(12), 5);
        assert_eq!(paid_down.scheduled_month(48), 20);
    }

    #[test]
    fn test_request_defaults_follow_variant() {
        assert_eq!(HistoryRequest::new(700, HistoryVariant::Full).months, 24);
        assert_eq!(HistoryRequest::new(700, HistoryVariant::Short).months, 12);
        assert_eq!(
            HistoryRequest::new(700, HistoryVariant::Short)
                .with_months(6)
                .months,
            6
        );
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(300), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(580), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(739), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(740), ScoreBand::VeryGood);
        assert_eq!(ScoreBand::from_score(850).label(), "Exceptional");
    }

    #[test]
    fn test_point_serializes_calendar_day() {
        let point = ScoreHistoryPoint {
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            score: 712,
            change: -4,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2026-03-01");
        assert_eq!(json["score"], 712);
        assert_eq!(json["change"], -4);
    }
}
