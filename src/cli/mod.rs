pub mod views;
pub mod when;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::{
    planner::{
        calendar::month_grid,
        entities::{Mood, Priority},
        report::{completion_stats, quadrants, tasks_on_date},
        state::{CycleDirection, Planner, BACKGROUND_CHOICES},
        storage::JsonStateStorage,
    },
    utils::{
        clock::{Clock, DefaultClock},
        dir::create_application_default_path,
        logging::enable_logging,
        time::date_key,
    },
};

use when::{resolve_date, DateStyle};

#[derive(Parser, Debug)]
#[command(name = "Mindfultasks", version, long_about = None)]
#[command(about = "Track your daily tasks, mood and priorities", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
    #[arg(
        long,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

const DATE_HELP: &str =
    "Day to act on. Examples are \"today\", \"yesterday\", \"15/03/2025\". Defaults to today";

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Add a task to a day's list")]
    Add {
        text: String,
        #[arg(long, short, help = DATE_HELP)]
        date: Option<String>,
    },
    #[command(about = "Show a day's tasks, progress and mood")]
    List {
        #[arg(long, short, help = DATE_HELP)]
        date: Option<String>,
    },
    #[command(about = "Toggle a task between done and open")]
    Done { id: String },
    #[command(about = "Delete a task")]
    Rm { id: String },
    #[command(about = "Set a task's priority")]
    Priority { id: String, level: PriorityArg },
    #[command(about = "Move a task to an Eisenhower quadrant via its two flags")]
    Move {
        id: String,
        #[arg(long, help = "Mark the task as important")]
        important: bool,
        #[arg(long, help = "Mark the task as urgent")]
        urgent: bool,
    },
    #[command(about = "Show a day's tasks as an Eisenhower matrix")]
    Matrix {
        #[arg(long, short, help = DATE_HELP)]
        date: Option<String>,
    },
    #[command(about = "Show a month of moods and task completion at a glance")]
    Calendar {
        #[arg(long, short, help = "Any date inside the month to show. Defaults to the current month")]
        month: Option<String>,
    },
    #[command(about = "Record how a day felt")]
    Mood {
        mood: MoodArg,
        #[arg(long, short, help = DATE_HELP)]
        date: Option<String>,
    },
    #[command(about = "Toggle the dark mode preference, or set it explicitly")]
    Theme { set: Option<ThemeArg> },
    #[command(about = "Cycle through the background choices")]
    Background { direction: CycleArg },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MoodArg {
    Happy,
    Neutral,
    Sad,
}

impl From<MoodArg> for Mood {
    fn from(value: MoodArg) -> Self {
        match value {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Neutral => Mood::Neutral,
            MoodArg::Sad => Mood::Sad,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CycleArg {
    Next,
    Prev,
}

impl From<CycleArg> for CycleDirection {
    fn from(value: CycleArg) -> Self {
        match value {
            CycleArg::Next => CycleDirection::Next,
            CycleArg::Prev => CycleDirection::Prev,
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&dir, logging_level, args.log)?;

    let now = DefaultClock.time();
    let storage = JsonStateStorage::new(dir.join("state"))?;
    let mut planner = Planner::load(storage).await;

    match args.commands {
        Commands::Add { text, date } => {
            let date = resolve_date(date.as_deref(), args.date_style, now)?;
            // Blank text is silently rejected, mirroring the submit guard of
            // the original form.
            if let Some(task) = planner.add_task(&text, date).await? {
                println!("Added \"{}\" for {}", task.text, date_key(task.date));
            }
            Ok(())
        }
        Commands::List { date } => {
            let date = resolve_date(date.as_deref(), args.date_style, now)?;
            let day_tasks = tasks_on_date(planner.tasks(), date);
            let stats = completion_stats(day_tasks.iter().copied());
            views::print_day(date, &day_tasks, stats, planner.moods().mood_on(date));
            Ok(())
        }
        Commands::Done { id } => {
            if planner.tasks().get(&id).is_none() {
                println!("No task with id {id}");
                return Ok(());
            }
            planner.toggle_task(&id).await?;
            let completed = planner.tasks().get(&id).is_some_and(|t| t.completed);
            println!("Marked {id} as {}", if completed { "done" } else { "open" });
            Ok(())
        }
        Commands::Rm { id } => {
            if planner.tasks().get(&id).is_none() {
                println!("No task with id {id}");
                return Ok(());
            }
            planner.remove_task(&id).await?;
            println!("Removed {id}");
            Ok(())
        }
        Commands::Priority { id, level } => {
            if planner.tasks().get(&id).is_none() {
                println!("No task with id {id}");
                return Ok(());
            }
            planner.set_priority(&id, level.into()).await?;
            println!("Set {id} to {level:?} priority");
            Ok(())
        }
        Commands::Move {
            id,
            important,
            urgent,
        } => {
            if planner.tasks().get(&id).is_none() {
                println!("No task with id {id}");
                return Ok(());
            }
            planner.set_quadrant(&id, important, urgent).await?;
            if let Some(task) = planner.tasks().get(&id) {
                println!("Moved {id} to \"{}\"", task.quadrant().title());
            }
            Ok(())
        }
        Commands::Matrix { date } => {
            let date = resolve_date(date.as_deref(), args.date_style, now)?;
            let day_tasks = tasks_on_date(planner.tasks(), date);
            views::print_matrix(date, &quadrants(day_tasks));
            Ok(())
        }
        Commands::Calendar { month } => {
            let anchor = resolve_date(month.as_deref(), args.date_style, now)?;
            let grid = month_grid(
                anchor.year(),
                anchor.month(),
                planner.tasks(),
                planner.moods(),
                now.date_naive(),
            )
            .ok_or_else(|| anyhow!("No calendar for {}-{}", anchor.year(), anchor.month()))?;
            views::print_calendar(&grid);
            Ok(())
        }
        Commands::Mood { mood, date } => {
            let date = resolve_date(date.as_deref(), args.date_style, now)?;
            let mood = Mood::from(mood);
            planner.set_mood(date, mood).await?;
            println!("Recorded mood for {}", date_key(date));
            Ok(())
        }
        Commands::Theme { set } => {
            let dark = match set {
                Some(ThemeArg::Dark) => planner.set_dark_mode(true).await?,
                Some(ThemeArg::Light) => planner.set_dark_mode(false).await?,
                None => planner.toggle_dark_mode().await?,
            };
            println!("Theme set to {}", if dark { "dark" } else { "light" });
            Ok(())
        }
        Commands::Background { direction } => {
            let index = planner.cycle_background(direction.into()).await?;
            println!("Background {} of {BACKGROUND_CHOICES}", index + 1);
            Ok(())
        }
    }
}
