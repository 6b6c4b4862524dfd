use clap::{Args, Subcommand, ValueEnum};
use trek_engine::OverlapDecision;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Record a new trip.
    Add(AddArgs),
    /// Replace a stored trip; omitted fields keep their stored values.
    Edit(EditArgs),
    /// Remove a stored trip.
    Delete(DeleteArgs),
    /// List trips, newest first.
    List(ListArgs),
    /// All-time travel statistics.
    Stats,
    /// Past-year and future-year travel report.
    Report(ReportArgs),
    /// Locations visited so far.
    Locations,
    /// Days of a month covered by a trip.
    Calendar(CalendarArgs),
    /// Show the effective configuration.
    Config,
}

/// How to answer when a trip overlaps stored trips.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OverlapChoice {
    Cancel,
    Adjust,
    SaveAnyway,
}

impl From<OverlapChoice> for OverlapDecision {
    fn from(choice: OverlapChoice) -> Self {
        match choice {
            OverlapChoice::Cancel => Self::Cancel,
            OverlapChoice::Adjust => Self::Adjust,
            OverlapChoice::SaveAnyway => Self::SaveAnyway,
        }
    }
}

/// Answers to the questions validation may ask.
#[derive(Clone, Debug, Args)]
pub struct ConfirmArgs {
    /// What to do if the trip overlaps a stored trip (default: cancel).
    #[arg(long, value_enum)]
    pub on_overlap: Option<OverlapChoice>,

    /// Save despite warnings.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for `trek add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// First day of the trip.
    #[arg(long)]
    pub start: String,

    /// Last day of the trip (inclusive).
    #[arg(long)]
    pub end: String,

    #[arg(long)]
    pub location: String,

    /// Personal or Work.
    #[arg(long = "type", default_value = "Personal")]
    pub travel_type: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

/// Arguments for `trek edit`.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    /// Trip number as shown by `trek list`.
    pub index: usize,

    #[arg(long)]
    pub start: Option<String>,

    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long = "type")]
    pub travel_type: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

/// Arguments for `trek delete`.
#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Trip number as shown by `trek list`.
    pub index: usize,
}

/// Arguments for `trek list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Statuses to include: past, current, future.
    #[arg(long, value_delimiter = ',', default_value = "past,current,future")]
    pub status: Vec<String>,

    /// Sort column: start, end, location.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long)]
    pub desc: bool,
}

/// Arguments for `trek report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Year for the travel-so-far section (default: current year).
    #[arg(long)]
    pub past_year: Option<i32>,

    /// Year for the upcoming-travel section (default: current year).
    #[arg(long)]
    pub future_year: Option<i32>,
}

/// Arguments for `trek calendar`.
#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}
