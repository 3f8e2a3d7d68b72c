use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{DailyRow, MonthlyRow};

// Day 1 exists in every month, so the fallback never fires.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Buckets daily rows by calendar month and sums posts and comments
/// per bucket. Sums the source columns directly, so it does not care
/// whether the totals pass has run. Months with no days in the
/// calendar never get a bucket.
pub fn aggregate_monthly(rows: &[DailyRow]) -> Vec<MonthlyRow> {
    let mut buckets: HashMap<NaiveDate, (u32, u32)> = HashMap::new();

    for row in rows {
        let entry = buckets.entry(month_start(row.date)).or_insert((0, 0));
        entry.0 += row.post_day;
        entry.1 += row.num_comments;
    }

    let mut monthly: Vec<MonthlyRow> = buckets
        .into_iter()
        .map(|(month_date, (num_posts, num_comments))| MonthlyRow {
            month_date,
            num_posts,
            num_comments,
        })
        .collect();

    monthly.sort_by(|a, b| a.month_date.cmp(&b.month_date));
    monthly
}
