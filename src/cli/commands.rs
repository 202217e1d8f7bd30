use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use donor_finder::donor::{BloodGroup, BloodGroupSelection};
use donor_finder::eligibility::MAX_COOLDOWN_DAYS;

#[derive(Parser)]
#[command(name = "donor-finder")]
#[command(about = "Find blood donors who are eligible to donate again")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive donor finder
    #[cfg(feature = "tui")]
    Tui,

    /// List eligible donors for a blood group
    Find {
        /// Blood group label (e.g. "O+") or registry code (0-8, 0 = none)
        #[arg(short, long, value_parser = parse_selection)]
        group: BloodGroupSelection,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Override the configured cooldown in days
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=MAX_COOLDOWN_DAYS))]
        cooldown_days: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List selectable blood groups and their codes
    Groups,

    /// Show registered and eligible donors per blood group
    Summary {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Create the registry schema and show the active configuration
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_selection(value: &str) -> Result<BloodGroupSelection, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("none") {
        return Ok(BloodGroupSelection::Unselected);
    }
    trimmed
        .parse::<BloodGroup>()
        .map(BloodGroupSelection::Group)
        .map_err(|e| e.to_string())
}
