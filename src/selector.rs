//! Wallpaper selection policies.

use chrono::{Local, NaiveDateTime};
use rand::Rng;

use crate::catalog::Store;
use crate::error::{Error, Result};

/// Standard deviation of the seasonal weighting curve, in days.
const SIGMA_DAYS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Every catalogued image is equally likely.
    #[default]
    Random,
    /// Prefer images whose occasion date lies near the current date.
    Seasons,
}

/// Pick the next wallpaper according to `mode`.
pub fn choose(store: &Store, mode: SelectionMode) -> Result<String> {
    match mode {
        SelectionMode::Random => uniform(store),
        SelectionMode::Seasons => seasonal(store, Local::now().naive_local()),
    }
}

fn uniform(store: &Store) -> Result<String> {
    store.pick_random()?.ok_or(Error::EmptyCatalog)
}

/// Weighted draw over images with an occasion date. Each row scores
/// `weight * U` for an independent uniform `U`, and the highest score
/// wins. This reproduces SQLite's `ORDER BY weight * RANDOM() DESC
/// LIMIT 1` reservoir trick; it is not a cumulative-probability sampler
/// and has different statistics, so it must not be replaced with one.
///
/// Falls back to a uniform pick when no row carries an occasion date.
fn seasonal(store: &Store, now: NaiveDateTime) -> Result<String> {
    let dated = store.dated_images()?;
    if dated.is_empty() {
        return uniform(store);
    }

    let mut rng = rand::thread_rng();
    dated
        .into_iter()
        .map(|(path, timestamp)| {
            let score = weight(day_distance(timestamp, now)) * rng.gen::<f64>();
            (path, score)
        })
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(path, _)| path)
        .ok_or(Error::EmptyCatalog)
}

/// Absolute distance between occasion date and now, in fractional days.
///
/// This is the full calendar distance, not day-of-year: a photo taken on
/// this exact day one year ago is ~365 days away and weighs near zero.
/// The seasonal bias therefore only covers images dated within the
/// current year's window, matching the julian-day arithmetic this tool
/// has always used rather than a wrapped same-time-of-year measure.
fn day_distance(timestamp: NaiveDateTime, now: NaiveDateTime) -> f64 {
    (now - timestamp).num_seconds().abs() as f64 / 86_400.0
}

/// Gaussian weight with a 30-day standard deviation.
fn weight(day_diff: f64) -> f64 {
    (-(day_diff * day_diff) / (2.0 * SIGMA_DAYS * SIGMA_DAYS)).exp()
}
