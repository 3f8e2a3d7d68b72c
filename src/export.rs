use std::path::PathBuf;

use anyhow::Context;

use crate::models::MonthlyRow;

/// Writes the monthly aggregates to `<target>.csv`. The header row is
/// written even when there are no data rows.
pub fn write_monthly_csv(rows: &[MonthlyRow], target: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(format!("{target}.csv"));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(["month_date", "num_posts", "num_comments"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("wrote {} monthly rows to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monthly_row(year: i32, month: u32, posts: u32, comments: u32) -> MonthlyRow {
        MonthlyRow {
            month_date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            num_posts: posts,
            num_comments: comments,
        }
    }

    #[test]
    fn writes_header_and_iso_dated_rows() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("IG_user_activity");
        let rows = vec![monthly_row(2021, 1, 2, 10), monthly_row(2021, 2, 3, 15)];

        let path = write_monthly_csv(&rows, target.to_str().unwrap()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(path.ends_with("IG_user_activity.csv"));
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("month_date,num_posts,num_comments"));
        assert_eq!(lines.next(), Some("2021-01-01,2,10"));
        assert_eq!(lines.next(), Some("2021-02-01,3,15"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_aggregate_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("empty");

        let path = write_monthly_csv(&[], target.to_str().unwrap()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "month_date,num_posts,num_comments");
    }

    #[test]
    fn unwritable_target_propagates_an_error() {
        let result = write_monthly_csv(&[], "/nonexistent-dir/report");
        assert!(result.is_err());
    }
}
