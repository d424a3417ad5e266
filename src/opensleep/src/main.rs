#[macro_use]
extern crate log;

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use opensleep::{DatabaseHandler, OpenSleep};
use opensleep_db::{ImportOutcome, ProgressBarSink};
use opensleep_types::{Language, Sex, UserProfile};

#[derive(Parser)]
pub struct OpenSleepCli {
    #[arg(env, long)]
    pub database_url: String,
    #[clap(subcommand)]
    pub subcommand: OpenSleepCommand,
}

#[derive(Subcommand)]
pub enum OpenSleepCommand {
    ///
    /// Import a raw export file for one user
    ///
    Import {
        #[arg(long, env)]
        user_id: i64,
        file: PathBuf,
        #[arg(long, env)]
        date_of_birth: NaiveDate,
        #[arg(long, env)]
        sex: Sex,
        #[arg(long, env)]
        weight_kg: f64,
        #[arg(long, env)]
        height_cm: f64,
    },
    ///
    /// Print chronotype, regularity and latest-night statistics
    ///
    Stats {
        #[arg(long, env)]
        user_id: i64,
        #[arg(long, default_value = "en")]
        language: Language,
    },
    ///
    /// Attach a recommendation to a statistics row
    ///
    Recommend {
        #[arg(long)]
        statistics_id: i32,
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = OpenSleepCli::parse();
    let db_handler = DatabaseHandler::new(cli.database_url).await;
    let opensleep = OpenSleep::new(db_handler);

    match cli.subcommand {
        OpenSleepCommand::Import {
            user_id,
            file,
            date_of_birth,
            sex,
            weight_kg,
            height_cm,
        } => {
            let profile = UserProfile {
                age_months: UserProfile::age_months_at(date_of_birth, Utc::now().date_naive()),
                sex,
                weight_kg,
                height_cm,
            };

            let progress = ProgressBarSink::new("import");
            let outcome = opensleep.import(user_id, &profile, &file, &progress).await?;
            progress.finish();

            match outcome {
                ImportOutcome::Completed { imported } => {
                    println!("imported {} sessions", imported);
                }
                ImportOutcome::InvalidFile { reason } => {
                    error!("export rejected: {}", reason);
                    std::process::exit(1);
                }
            }

            Ok(())
        }
        OpenSleepCommand::Stats { user_id, language } => {
            let report = opensleep.sleep_report(user_id, language).await?;
            println!("{}", report);
            Ok(())
        }
        OpenSleepCommand::Recommend {
            statistics_id,
            text,
        } => {
            opensleep
                .database
                .set_recommendation(statistics_id, text)
                .await?;
            Ok(())
        }
    }
}
