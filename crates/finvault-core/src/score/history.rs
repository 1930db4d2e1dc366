//! Monthly score trajectories ending at a known score.
//!
//! Each intermediate point is the baseline, plus linear progress toward the
//! current score, plus every scheduled event already reached, plus noise that
//! shrinks toward the present. The last point is always the current score.

use chrono::{Datelike, Months, NaiveDate, Utc};
use rand::Rng;

use super::types::{
    HistoryRequest, ScoreHistoryPoint, EVENT_SCHEDULE, FICO_MAX, FICO_MIN, MAX_MONTHS,
};
use crate::error::{FinvaultError, Result};

/// Synthesize a history with an injected random source.
///
/// `as_of` picks the final month; the same seed and `as_of` reproduce the
/// same series.
///
/// # Errors
///
/// Returns `FinvaultError::InvalidInput` if the current score is outside
/// [300, 850] or the month count is 0 or above 120.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use finvault_core::score::{synthesize, HistoryRequest, HistoryVariant};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let history = synthesize(HistoryRequest::new(742, HistoryVariant::Full), as_of, &mut rng).unwrap();
///
/// assert_eq!(history.len(), 24);
/// assert_eq!(history.last().unwrap().score, 742);
/// ```
pub fn synthesize<R: Rng + ?Sized>(
    request: HistoryRequest,
    as_of: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ScoreHistoryPoint>> {
    validate(&request)?;

    let months = request.months;
    let current = i32::from(request.current_score);
    let baseline = current - request.variant.baseline_offset();
    let (low, high) = request.variant.bounds();
    let max_noise = request.variant.max_noise();
    let dates = month_starts(as_of, months)?;

    let mut points: Vec<ScoreHistoryPoint> = Vec::with_capacity(months);
    for (index, date) in dates.into_iter().enumerate() {
        let score = if index + 1 == months {
            current
        } else {
            let progress = index as f64 / (months - 1) as f64;
            let trend = baseline + ((current - baseline) as f64 * progress).round() as i32;
            let events: i32 = EVENT_SCHEDULE
                .iter()
                .filter(|event| event.scheduled_month(months) <= index)
                .map(|event| event.impact)
                .sum();
            let amplitude = (max_noise as f64 * (1.0 - progress)).round() as i32;
            let noise = if amplitude > 0 {
                rng.gen_range(-amplitude..=amplitude)
            } else {
                0
            };
            (trend + events + noise).clamp(i32::from(low), i32::from(high))
        };

        let change = points
            .last()
            .map(|prev| score - i32::from(prev.score))
            .unwrap_or(0);
        points.push(ScoreHistoryPoint {
            date,
            score: score as u16,
            change,
        });
    }

    tracing::debug!(
        months,
        current = request.current_score,
        variant = ?request.variant,
        "synthesized score history"
    );
    Ok(points)
}

/// Synthesize a history for display using thread randomness and today's date.
pub fn synthesize_now(request: HistoryRequest) -> Result<Vec<ScoreHistoryPoint>> {
    synthesize(request, Utc::now().date_naive(), &mut rand::thread_rng())
}

fn validate(request: &HistoryRequest) -> Result<()> {
    if !(FICO_MIN..=FICO_MAX).contains(&request.current_score) {
        return Err(FinvaultError::InvalidInput(format!(
            "Score {} is outside {}-{}",
            request.current_score, FICO_MIN, FICO_MAX
        )));
    }
    if request.months == 0 || request.months > MAX_MONTHS {
        return Err(FinvaultError::InvalidInput(format!(
            "Month count must be between 1 and {} (got {})",
            MAX_MONTHS, request.months
        )));
    }
    Ok(())
}

/// First day of each of the `months` months ending with the month of `as_of`.
fn month_starts(as_of: NaiveDate, months: usize) -> Result<Vec<NaiveDate>> {
    let last = NaiveDate::from_ymd_opt(as_of.year(), as_of.month(), 1)
        .ok_or_else(|| FinvaultError::InvalidInput(format!("Invalid date: {}", as_of)))?;

    (0..months)
        .rev()
        .map(|back| {
            last.checked_sub_months(Months::new(back as u32))
                .ok_or_else(|| FinvaultError::InvalidInput(format!("Date out of range: {}", as_of)))
        })
        .collect()
}
