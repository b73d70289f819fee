#[macro_use]
extern crate log;

use std::io;

use anyhow::anyhow;
use chrono::{Local, NaiveDate, Weekday};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use repit::{DatabaseHandler, RepIt, helpers::calendar};
use repit_db::SearchLogs;
use repit_types::{Exercise, StatsPeriod};
use strum::IntoEnumIterator;

#[derive(Parser)]
pub struct RepItCli {
    #[arg(env, long)]
    pub database_url: String,
    #[clap(subcommand)]
    pub subcommand: RepItCommand,
}

#[derive(Subcommand)]
pub enum RepItCommand {
    ///
    /// Initialize and show today's card for every exercise
    ///
    Today,
    ///
    /// Set the rep count for a day
    ///
    Log {
        exercise: Exercise,
        reps: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    ///
    /// Add reps on top of a day's count
    ///
    Add {
        exercise: Exercise,
        #[arg(long, default_value_t = 1)]
        count: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    ///
    /// Reset a day's count to zero
    ///
    Reset {
        exercise: Exercise,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    ///
    /// Set the daily goal for a day
    ///
    Goal {
        exercise: Exercise,
        goal: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    ///
    /// Print the stat card for an exercise and period
    ///
    Stats {
        exercise: Exercise,
        #[arg(long, default_value_t = StatsPeriod::LastWeek)]
        period: StatsPeriod,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Print the reps-over-time series as date,reps lines
    ///
    Series {
        exercise: Exercise,
        #[arg(long, default_value_t = StatsPeriod::LastWeek)]
        period: StatsPeriod,
    },
    ///
    /// Month grid with rest days and goal-met markers
    ///
    Calendar {
        exercise: Exercise,
        #[arg(long)]
        month: Option<String>,
    },
    ///
    /// Show the weekday rest-day policy, or replace it
    ///
    RestDays {
        /// Weekdays to mark as rest days (e.g. mon wed fri)
        days: Vec<String>,
        #[arg(long)]
        clear: bool,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
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

    let cli = RepItCli::parse();

    if let RepItCommand::Completions { shell } = cli.subcommand {
        let mut cmd = RepItCli::command();
        clap_complete::generate(shell, &mut cmd, "repit", &mut io::stdout());
        return Ok(());
    }

    let db_handler = DatabaseHandler::new(cli.database_url).await;
    let repit = RepIt::new(db_handler);
    let today = Local::now().date_naive();

    match cli.subcommand {
        RepItCommand::Today => {
            repit.start_day(today).await?;

            println!("{}", today.format("%A, %-d %B %Y"));
            for exercise in Exercise::iter() {
                let Some(log) = repit.database.get_log(exercise, today).await? else {
                    continue;
                };
                if log.is_rest_day {
                    println!("{}: rest day", exercise);
                } else {
                    println!("{}: {}/{}", exercise, log.reps, log.goal);
                }
            }
            Ok(())
        }
        RepItCommand::Log {
            exercise,
            reps,
            date,
        } => {
            let date = date.unwrap_or(today);
            repit.set_reps(exercise, reps, date).await?;
            println!("{}: {} reps on {}", exercise, reps, date);
            Ok(())
        }
        RepItCommand::Add {
            exercise,
            count,
            date,
        } => {
            let date = date.unwrap_or(today);
            let total = repit.add_reps(exercise, count, date).await?;
            println!("{}: {} reps on {}", exercise, total, date);
            Ok(())
        }
        RepItCommand::Reset { exercise, date } => {
            let date = date.unwrap_or(today);
            repit.reset_reps(exercise, date).await?;
            println!("{}: reset on {}", exercise, date);
            Ok(())
        }
        RepItCommand::Goal {
            exercise,
            goal,
            date,
        } => {
            let date = date.unwrap_or(today);
            repit.set_goal(exercise, goal, date).await?;
            println!("{}: goal {} on {}", exercise, goal, date);
            Ok(())
        }
        RepItCommand::Stats {
            exercise,
            period,
            json,
        } => {
            let stats = repit.stats(exercise, period, today).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{} ({}):\n{}", exercise, period, stats);
            }
            Ok(())
        }
        RepItCommand::Series { exercise, period } => {
            for point in repit.series(exercise, period, today).await? {
                println!("{},{}", point.date, point.reps);
            }
            Ok(())
        }
        RepItCommand::Calendar { exercise, month } => {
            let anchor = match month {
                Some(month) => NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
                    .map_err(|_| anyhow!("invalid month `{month}`, expected YYYY-MM"))?,
                None => today,
            };

            let (first, last) = calendar::month_bounds(anchor);
            let logs = repit
                .database
                .search_logs(exercise, SearchLogs::between(first, last))
                .await?;
            let rest_calendar = repit.database.rest_day_calendar(today).await?;

            print!("{}", calendar::render_month(anchor, &logs, &rest_calendar));
            Ok(())
        }
        RepItCommand::RestDays { days, clear } => {
            if days.is_empty() && !clear {
                let policy = repit.database.rest_day_policy().await?;
                for (weekday, rest) in policy.iter() {
                    println!("{}: {}", weekday, if rest { "rest" } else { "-" });
                }
                return Ok(());
            }

            let weekdays = days
                .iter()
                .map(|day| {
                    day.parse::<Weekday>()
                        .map_err(|_| anyhow!("invalid weekday `{day}`"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let policy = repit.apply_rest_days(&weekdays, today).await?;
            info!(
                "rest days updated ({} of {} allowed)",
                policy.rest_count(),
                repit_types::RestDayPolicy::MAX_REST_DAYS
            );
            for (weekday, rest) in policy.iter() {
                println!("{}: {}", weekday, if rest { "rest" } else { "-" });
            }
            Ok(())
        }
        RepItCommand::Completions { .. } => unreachable!("handled before connecting"),
    }
}
