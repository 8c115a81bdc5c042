mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fruitcal_core::session::CalendarSession;
use fruitcal_core::settings::SettingsPatch;
use fruitcal_core::storage::{FileStorage, KeyValueStorage, MemoryStorage};

#[derive(Parser)]
#[command(name = "fruitcal")]
#[command(about = "Calendar views and event management, with an image of the day")]
struct Cli {
    /// Directory for stored events (defaults to the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep events in memory only, without reading or writing stored data
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Run as an authenticated session (mutations are not mirrored to storage)
    #[arg(long, global = true)]
    logged_in: bool,

    /// Hide week numbers in grids
    #[arg(long, global = true)]
    no_week_numbers: bool,

    /// Hide the weekday initials row in grids
    #[arg(long, global = true)]
    no_weekday_initials: bool,

    /// Hide the sidebar (image of the day and two-month navigator)
    #[arg(long, global = true)]
    no_navigator: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single day and its events
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Shift the view this many days (negative for back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,
    },
    /// Show the week containing a date
    Week {
        /// Date whose week to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Shift the view this many weeks (negative for back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,
    },
    /// Show a month grid and its events
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<String>,

        /// Shift the view this many months (negative for back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,
    },
    /// Show twelve mini month grids for a year
    Year {
        /// Year to show (defaults to the current year)
        year: Option<i32>,

        /// Shift the view this many years (negative for back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        step: i32,
    },
    /// List all events in insertion order
    List {
        /// Emit the grid-widget JSON projection instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add an event
    Add {
        #[arg(long)]
        title: String,

        /// Start date-time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,

        /// End date-time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: String,

        /// Hex RGB color, e.g. "#3788d8"
        #[arg(long)]
        color: Option<String>,

        /// meeting, phone, appointment or alarm
        #[arg(long)]
        category: Option<String>,

        /// Photo reference; overrides the day's image
        #[arg(long)]
        photo: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },
    /// Update fields of an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// meeting, phone, appointment or alarm
        #[arg(long)]
        category: Option<String>,

        /// Photo reference; pass an empty string to clear
        #[arg(long)]
        photo: Option<String>,

        /// Pass an empty string to clear
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let storage: Box<dyn KeyValueStorage> = if cli.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        let dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => FileStorage::default_dir()?,
        };
        Box::new(FileStorage::new(dir))
    };

    let mut session = CalendarSession::load(storage);
    session.update_settings(settings_patch(&cli));
    tracing::debug!("session loaded with {} events", session.events().len());

    match cli.command {
        Commands::Day { date, step } => {
            let date = commands::parse_date_arg(date.as_deref())?;
            commands::day::run(&session, date, step)
        }
        Commands::Week { date, step } => {
            let date = commands::parse_date_arg(date.as_deref())?;
            commands::week::run(&session, date, step)
        }
        Commands::Month { month, step } => {
            let anchor = commands::parse_month_arg(month.as_deref())?;
            commands::month::run(&session, anchor, step)
        }
        Commands::Year { year, step } => commands::year::run(&session, year, step),
        Commands::List { json } => commands::list::run(&session, json),
        Commands::Add {
            title,
            start,
            end,
            color,
            category,
            photo,
            url,
        } => commands::add::run(&mut session, title, start, end, color, category, photo, url),
        Commands::Edit {
            id,
            title,
            start,
            end,
            color,
            category,
            photo,
            url,
        } => commands::edit::run(&mut session, &id, title, start, end, color, category, photo, url),
        Commands::Delete { id } => commands::delete::run(&mut session, &id),
    }
}

fn settings_patch(cli: &Cli) -> SettingsPatch {
    SettingsPatch {
        logged_in: cli.logged_in.then_some(true),
        week_numbers: cli.no_week_numbers.then_some(false),
        weekday_initials: cli.no_weekday_initials.then_some(false),
        day_navigator: cli.no_navigator.then_some(false),
        week_navigator: cli.no_navigator.then_some(false),
        month_navigator: cli.no_navigator.then_some(false),
        year_navigator: cli.no_navigator.then_some(false),
        ..Default::default()
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}
