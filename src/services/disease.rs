//! Synthetic COVID-19 and influenza statistics.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::models::{DailyData, DiseaseData, DiseaseSnapshot, Region, RegionalData, StateData, STATES};

pub const SERIES_DAYS: u64 = 30;

/// Draw bounds for one disease. Counts are `base + [0, spread)`.
#[derive(Clone, Copy, Debug)]
pub struct DiseaseProfile {
    pub active: (u64, u64),
    pub new: (u64, u64),
    pub recovered: (u64, u64),
    /// Half-open `[min, max)` percent.
    pub weekly_trend: (f64, f64),
    pub vaccination_rate: (f64, f64),
}

pub const COVID: DiseaseProfile = DiseaseProfile {
    active: (10_000, 5_000),
    new: (500, 300),
    recovered: (50_000, 10_000),
    weekly_trend: (-1.0, 3.0),
    vaccination_rate: (65.0, 85.0),
};

pub const FLU: DiseaseProfile = DiseaseProfile {
    active: (8_000, 3_000),
    new: (300, 200),
    recovered: (30_000, 8_000),
    weekly_trend: (-2.0, 1.0),
    vaccination_rate: (55.0, 80.0),
};

pub fn generate_disease_data(rng: &mut impl Rng, today: NaiveDate) -> DiseaseData {
    DiseaseData {
        covid: generate_snapshot(&COVID, rng, today),
        flu: generate_snapshot(&FLU, rng, today),
    }
}

pub fn generate_snapshot(profile: &DiseaseProfile, rng: &mut impl Rng, today: NaiveDate) -> DiseaseSnapshot {
    let active_cases = draw_count(profile.active, rng);
    let new_cases = draw_count(profile.new, rng);
    let recovered_cases = draw_count(profile.recovered, rng);
    let weekly_trend = round_tenth(rng.gen_range(profile.weekly_trend.0..profile.weekly_trend.1));

    let regional_data = Region::ALL
        .iter()
        .map(|region| regional_breakdown(*region, profile, active_cases, new_cases, rng))
        .collect();

    let daily_data = daily_series(active_cases, new_cases, recovered_cases, rng, today);

    DiseaseSnapshot {
        active_cases,
        new_cases,
        recovered_cases,
        total_cases: active_cases + recovered_cases,
        weekly_trend,
        regional_data,
        daily_data,
    }
}

/// Splits national counts over a region's states, then sums them back up.
///
/// Each state receives `national / 50` scaled by a jitter in `[0.7, 1.3)`.
pub fn regional_breakdown(
    region: Region,
    profile: &DiseaseProfile,
    national_active: u64,
    national_new: u64,
    rng: &mut impl Rng,
) -> RegionalData {
    let state_count = STATES.len() as f64;
    let states: Vec<StateData> = region
        .states()
        .iter()
        .map(|location| StateData {
            name: location.name.to_string(),
            active_cases: (national_active as f64 / state_count * jitter(rng)).floor() as u64,
            new_cases: (national_new as f64 / state_count * jitter(rng)).floor() as u64,
            vaccination_rate: rng.gen_range(profile.vaccination_rate.0..profile.vaccination_rate.1),
        })
        .collect();

    let vaccination_rate = if states.is_empty() {
        None
    } else {
        Some(states.iter().map(|s| s.vaccination_rate).sum::<f64>() / states.len() as f64)
    };

    RegionalData {
        region,
        active_cases: states.iter().map(|s| s.active_cases).sum(),
        new_cases: states.iter().map(|s| s.new_cases).sum(),
        vaccination_rate,
        states,
    }
}

/// Thirty days ending today, oldest first.
pub fn daily_series(
    active: u64,
    new: u64,
    recovered: u64,
    rng: &mut impl Rng,
    today: NaiveDate,
) -> Vec<DailyData> {
    (0..SERIES_DAYS)
        .rev()
        .map(|offset| {
            let factor = rng.gen_range(0.95..1.05);
            let date = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            DailyData {
                date: date.format("%Y-%m-%d").to_string(),
                active_cases: trend_value(active, offset, 0.01, factor),
                new_cases: trend_value(new, offset, 0.01, factor),
                recovered_cases: trend_value(recovered, offset, 0.005, factor),
            }
        })
        .collect()
}

fn trend_value(base: u64, offset: u64, slope: f64, factor: f64) -> u64 {
    let base = base as f64;
    ((base * 0.8 + offset as f64 * base * slope) * factor).floor() as u64
}

fn draw_count((base, spread): (u64, u64), rng: &mut impl Rng) -> u64 {
    base + rng.gen_range(0..spread)
}

fn jitter(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.7..1.3)
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
