use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{ActivityPeriod, Comment};

const DATE_FORMAT: &str = "%d/%m/%y";

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid date format for {field}: {value:?} (expected DD/MM/YY)")]
    DateFormat { field: String, value: String },
    #[error("monthlyPostingDay must be between 1 and 31, got {value}")]
    PostingDayRange { value: i64 },
    #[error("comments[{index}] is neither an object nor a [date, user, count] triple")]
    CommentShape { index: usize },
    #[error("comments[{index}] count out of range: {value} (must be non-negative)")]
    CommentCountRange { index: usize, value: i64 },
}

/// Raw record as decoded from the scraper JSON, before validation.
#[derive(Debug, Deserialize)]
pub struct RawActivityRecord {
    #[serde(rename = "periodStart")]
    period_start: String,
    #[serde(rename = "periodEnd")]
    period_end: String,
    #[serde(rename = "monthlyPostingDay")]
    monthly_posting_day: i64,
    comments: Vec<serde_json::Value>,
}

// Comments arrive either as {date, user, count} objects or as
// fixed-order [date, user, count] triples. Both normalize here before
// any per-field validation runs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CommentShape {
    Object { date: String, user: String, count: i64 },
    Triple(String, String, i64),
}

pub fn load_activity_period(path: &Path) -> anyhow::Result<ActivityPeriod> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_record(&text).with_context(|| format!("invalid activity record in {}", path.display()))
}

pub fn parse_record(text: &str) -> anyhow::Result<ActivityPeriod> {
    let raw: RawActivityRecord =
        serde_json::from_str(text).context("failed to decode activity record JSON")?;
    let period = validate(raw)?;
    log::debug!(
        "validated activity period {} to {} with {} comments",
        period.period_start,
        period.period_end,
        period.comments.len()
    );
    Ok(period)
}

pub fn validate(raw: RawActivityRecord) -> Result<ActivityPeriod, ValidationError> {
    let period_start = parse_date("periodStart", &raw.period_start)?;
    let period_end = parse_date("periodEnd", &raw.period_end)?;

    if !(1..=31).contains(&raw.monthly_posting_day) {
        return Err(ValidationError::PostingDayRange {
            value: raw.monthly_posting_day,
        });
    }

    let mut comments = Vec::with_capacity(raw.comments.len());
    for (index, value) in raw.comments.iter().enumerate() {
        comments.push(validate_comment(index, value)?);
    }

    Ok(ActivityPeriod {
        period_start,
        period_end,
        monthly_posting_day: raw.monthly_posting_day as u32,
        comments,
    })
}

fn validate_comment(index: usize, value: &serde_json::Value) -> Result<Comment, ValidationError> {
    let shape: CommentShape = serde_json::from_value(value.clone())
        .map_err(|_| ValidationError::CommentShape { index })?;

    let (raw_date, author, count) = match shape {
        CommentShape::Object { date, user, count } => (date, user, count),
        CommentShape::Triple(date, user, count) => (date, user, count),
    };

    let date = parse_date(&format!("comments[{index}].date"), &raw_date)?;
    let count = u32::try_from(count)
        .map_err(|_| ValidationError::CommentCountRange { index, value: count })?;

    Ok(Comment {
        date,
        author,
        count,
    })
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::DateFormat {
        field: field.to_string(),
        value: value.to_string(),
    })
}
