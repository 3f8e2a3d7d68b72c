use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Comment {
    pub date: NaiveDate,
    pub author: String,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct ActivityPeriod {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub monthly_posting_day: u32,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub post_day: u32,
    pub num_comments: u32,
    pub total_activities: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRow {
    pub month_date: NaiveDate,
    pub num_posts: u32,
    pub num_comments: u32,
}
