mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Browse and manage your daygrid calendar from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new event
    Add {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Start time ("9:00 AM" or "09:00")
        #[arg(short, long)]
        start: String,

        /// End time; an end earlier than the start crosses midnight
        #[arg(short, long)]
        end: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        attendee: Option<String>,

        /// Palette color name (e.g. "Blue") or a #RRGGBB value
        #[arg(long)]
        color: Option<String>,
    },
    /// List all events
    List {
        /// Only show events matching this search term
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show upcoming events grouped by date
    Agenda {
        #[arg(short, long)]
        search: Option<String>,

        /// Maximum number of events to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Render a single day as an hour grid
    Day {
        /// Date to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Render the week containing a date
    Week {
        /// Any date inside the week (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Render a month overview
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<String>,

        #[arg(short, long)]
        search: Option<String>,
    },
    /// Delete an event by id
    Delete { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            date,
            start,
            end,
            description,
            attendee,
            color,
        } => commands::add::run(title, date, start, end, description, attendee, color),
        Commands::List { search } => commands::list::run(search.as_deref().unwrap_or("")),
        Commands::Agenda { search, limit } => {
            commands::agenda::run(search.as_deref().unwrap_or(""), limit)
        }
        Commands::Day { date, search } => {
            commands::day::run(date.as_deref(), search.as_deref().unwrap_or(""))
        }
        Commands::Week { date, search } => {
            commands::week::run(date.as_deref(), search.as_deref().unwrap_or(""))
        }
        Commands::Month { month, search } => {
            commands::month::run(month.as_deref(), search.as_deref().unwrap_or(""))
        }
        Commands::Delete { id } => commands::delete::run(&id),
    }
}
