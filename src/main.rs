use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod daily;
mod export;
mod ingest;
mod models;
mod monthly;

// Demo record from the scraper, kept verbatim for the `sample` command.
const SAMPLE_RECORD: &str = r#"{
    "periodStart": "15/02/11",
    "periodEnd": "30/08/21",
    "monthlyPostingDay": 11,
    "comments": [
        ["2/3/21", "Justin Bieber", 5],
        ["5/4/21", "Lady Gaga", 6],
        ["5/4/21", "Snoop Dog", 2],
        ["13/5/21", "Justin Bieber", 3]
    ]
}"#;

#[derive(Parser)]
#[command(name = "activity-report")]
#[command(about = "Daily and monthly activity reporting for scraped account data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an activity record without producing output
    Validate {
        #[arg(long)]
        json: PathBuf,
    },
    /// Print the daily activity calendar
    Daily {
        #[arg(long)]
        json: PathBuf,
        #[arg(long, default_value_t = 40)]
        limit: usize,
    },
    /// Print the monthly aggregates
    Monthly {
        #[arg(long)]
        json: PathBuf,
    },
    /// Write the monthly aggregates to <target>.csv
    Export {
        #[arg(long)]
        json: PathBuf,
        #[arg(long, default_value = "activity_report")]
        target: String,
    },
    /// Run the built-in sample record end to end
    Sample,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { json } => {
            let period = ingest::load_activity_period(&json)?;
            println!(
                "Record OK: {} to {}, posting day {}, {} comments.",
                period.period_start,
                period.period_end,
                period.monthly_posting_day,
                period.comments.len()
            );
        }
        Commands::Daily { json, limit } => {
            let period = ingest::load_activity_period(&json)?;
            let mut rows = daily::build_daily_calendar(&period);
            daily::apply_daily_totals(&mut rows);

            if rows.is_empty() {
                println!("No days in this period.");
                return Ok(());
            }

            println!("date        post  comments  total");
            for row in rows.iter().take(limit) {
                println!(
                    "{}  {:>4}  {:>8}  {:>5}",
                    row.date, row.post_day, row.num_comments, row.total_activities
                );
            }
            if rows.len() > limit {
                println!("... {} more days", rows.len() - limit);
            }
        }
        Commands::Monthly { json } => {
            let period = ingest::load_activity_period(&json)?;
            let rows = daily::build_daily_calendar(&period);
            let aggregates = monthly::aggregate_monthly(&rows);

            if aggregates.is_empty() {
                println!("No months in this period.");
                return Ok(());
            }

            for row in aggregates.iter() {
                println!(
                    "- {}: {} posts, {} comments",
                    row.month_date, row.num_posts, row.num_comments
                );
            }
        }
        Commands::Export { json, target } => {
            let period = ingest::load_activity_period(&json)?;
            let rows = daily::build_daily_calendar(&period);
            let aggregates = monthly::aggregate_monthly(&rows);
            let path = export::write_monthly_csv(&aggregates, &target)?;
            println!(
                "Wrote {} monthly rows to {}.",
                aggregates.len(),
                path.display()
            );
        }
        Commands::Sample => {
            let period = ingest::parse_record(SAMPLE_RECORD)?;
            let mut rows = daily::build_daily_calendar(&period);
            daily::apply_daily_totals(&mut rows);
            let aggregates = monthly::aggregate_monthly(&rows);

            println!(
                "Sample record covers {} days across {} months.",
                rows.len(),
                aggregates.len()
            );
            for row in aggregates.iter() {
                println!(
                    "- {}: {} posts, {} comments",
                    row.month_date, row.num_posts, row.num_comments
                );
            }
            let path = export::write_monthly_csv(&aggregates, "IG_user_activity")?;
            println!("Wrote {}.", path.display());
        }
    }

    Ok(())
}
