use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{ActivityPeriod, DailyRow};

/// One row per calendar day from period_start through period_end
/// inclusive. Comments are joined on by date; days without comments
/// keep a zero count, comments dated outside the period are dropped.
pub fn build_daily_calendar(period: &ActivityPeriod) -> Vec<DailyRow> {
    let mut comment_totals: HashMap<NaiveDate, u32> = HashMap::new();
    for comment in period.comments.iter() {
        *comment_totals.entry(comment.date).or_insert(0) += comment.count;
    }

    let mut rows = Vec::new();
    let mut date = period.period_start;
    while date <= period.period_end {
        let post_day = if date.day() == period.monthly_posting_day {
            1
        } else {
            0
        };
        rows.push(DailyRow {
            date,
            post_day,
            num_comments: comment_totals.get(&date).copied().unwrap_or(0),
            total_activities: 0,
        });
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    log::debug!("built daily calendar with {} rows", rows.len());
    rows
}

/// Derives total_activities = post_day + num_comments for every row.
/// Safe to run more than once.
pub fn apply_daily_totals(rows: &mut [DailyRow]) {
    for row in rows.iter_mut() {
        row.total_activities = row.post_day + row.num_comments;
    }
}
