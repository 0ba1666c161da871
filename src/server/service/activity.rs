//! Reading activity statistics derived from progress rows and submission timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::server::model::progress::{Activity, ActivityDay, StudentProgress};

/// Default calendar window in days.
pub const DEFAULT_CALENDAR_DAYS: u32 = 90;

/// Largest accepted calendar window in days.
pub const MAX_CALENDAR_DAYS: u32 = 366;

/// Computes activity statistics as of `today` (UTC).
///
/// A day is active when at least one submission was made on it. The current streak ends
/// today, or yesterday when nothing has been submitted yet today.
pub fn compute_activity(
    progress: &[StudentProgress],
    submitted_at: &[DateTime<Utc>],
    today: NaiveDate,
    calendar_days: u32,
) -> Activity {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for timestamp in submitted_at {
        *per_day.entry(timestamp.date_naive()).or_insert(0) += 1;
    }

    let scores: Vec<i32> = progress.iter().filter_map(|p| p.score).collect();
    let average_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64)
    };

    let window_start = today - Duration::days(i64::from(calendar_days.saturating_sub(1)));
    let calendar = per_day
        .range(window_start..=today)
        .map(|(date, count)| ActivityDay {
            date: *date,
            submissions: *count,
        })
        .collect();

    Activity {
        modules_started: progress.len() as u64,
        modules_completed: progress.iter().filter(|p| p.completed).count() as u64,
        total_submissions: submitted_at.len() as u64,
        total_time_spent_minutes: progress
            .iter()
            .map(|p| i64::from(p.time_spent_minutes))
            .sum(),
        average_score,
        current_streak: current_streak(&per_day, today),
        longest_streak: longest_streak(&per_day),
        calendar,
    }
}

fn current_streak(active: &BTreeMap<NaiveDate, u64>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let mut day = if active.contains_key(&today) {
        today
    } else if active.contains_key(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while active.contains_key(&day) {
        streak += 1;
        day -= Duration::days(1);
    }

    streak
}

fn longest_streak(active: &BTreeMap<NaiveDate, u64>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in active.keys() {
        run = match previous {
            Some(prev) if *day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(*day);
    }

    longest
}
