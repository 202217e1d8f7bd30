mod cli;

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use colored::*;
use tracing::{error, info};

use donor_finder::{
    donor::{BloodGroup, BloodGroupSelection},
    error,
    logging::{self, LogTarget},
    utils, Config, DonorFinder, EligibilityEngine, SqliteRegistry, TableSurface,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            std::process::exit(1);
        }
    };

    let target = match cli.command {
        #[cfg(feature = "tui")]
        Commands::Tui => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(&config.logging, target) {
        eprintln!("{}", format!("Failed to initialise logging: {}", e).red());
        std::process::exit(1);
    }

    let result = match cli.command {
        #[cfg(feature = "tui")]
        Commands::Tui => donor_finder::tui::run_tui(config).await,

        Commands::Find {
            group,
            today,
            cooldown_days,
            format,
        } => {
            info!("Searching for eligible {} donors", group);
            find_donors(&config, group, today, cooldown_days, format)
        }

        Commands::Groups => {
            list_groups();
            Ok(())
        }

        Commands::Summary { today } => {
            info!("Generating donor summary...");
            show_summary(&config, today)
        }

        Commands::Init => {
            info!("Initializing...");
            initialize(&config)
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn find_donors(
    config: &Config,
    group: BloodGroupSelection,
    today: Option<NaiveDate>,
    cooldown_days: Option<u32>,
    format: OutputFormat,
) -> error::Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let cooldown = cooldown_days
        .map(|days| Duration::days(i64::from(days)))
        .unwrap_or_else(|| config.eligibility.cooldown());

    let registry = SqliteRegistry::open(&config.database.path)?;
    let engine = EligibilityEngine::new(registry, cooldown, config.eligibility.order);
    let mut finder = DonorFinder::new(engine, TableSurface::new());

    let count = finder.run_cycle(group.code(), today)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(finder.surface().rows())?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Eligible {} donors as of {} (last donation more than {} ago)",
            group,
            utils::format_date(&today),
            utils::format_cooldown(cooldown)
        )
        .cyan()
        .bold()
    );

    if count == 0 {
        println!("{}", "No eligible donors found".yellow());
        return Ok(());
    }

    utils::print_donor_table(finder.surface());
    println!("Total: {}", count.to_string().green());
    Ok(())
}

fn list_groups() {
    println!("{}", "=== Blood Groups ===".cyan().bold());
    utils::print_table_row(&["Code", "Group"], &[6, 6]);
    utils::print_table_border(14);
    utils::print_table_row(&["0", "(none)"], &[6, 6]);
    for group in BloodGroup::ALL {
        utils::print_table_row(&[&group.code().to_string(), group.label()], &[6, 6]);
    }
}

fn show_summary(config: &Config, today: Option<NaiveDate>) -> error::Result<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let registry = SqliteRegistry::open(&config.database.path)?;
    let counts = registry.count_by_group()?;
    let total = registry.total_donors()?;
    let engine = EligibilityEngine::from_config(registry, &config.eligibility);

    println!("{}", "=== Donor Registry Summary ===".cyan().bold());
    println!("Reference date: {}", utils::format_date(&today));
    println!("Cooldown:       {}", utils::format_cooldown(engine.cooldown()));
    println!("Donors:         {}\n", total);

    let widths = [8, 12, 10];
    utils::print_table_row(&["Group", "Registered", "Eligible"], &widths);
    utils::print_table_border(34);

    for group in BloodGroup::ALL {
        let registered = counts
            .iter()
            .find(|(counted, _)| *counted == group)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        let eligible = engine
            .find_for_selection(BloodGroupSelection::Group(group), today)?
            .len();

        utils::print_table_row(
            &[
                group.label(),
                &registered.to_string(),
                &eligible.to_string().green().to_string(),
            ],
            &widths,
        );
    }

    Ok(())
}

fn initialize(config: &Config) -> error::Result<()> {
    println!("{}", "Initializing donor finder...".green());
    let registry = SqliteRegistry::open(&config.database.path)?;
    println!("{}", "✓ Registry schema ready".green());
    println!("{}", "✓ Configuration loaded".green());
    println!("\n{}", "Configuration:".cyan());
    println!("  Registry:       {}", config.database.path);
    println!("  Donors:         {}", registry.total_donors()?);
    println!(
        "  Cooldown:       {}",
        utils::format_cooldown(config.eligibility.cooldown())
    );
    println!("  Order:          {:?}", config.eligibility.order);

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!("  {} to list eligible O+ donors", "donor-finder find --group O+".yellow());
    println!("  {} to view per-group counts", "donor-finder summary".yellow());
    #[cfg(feature = "tui")]
    println!("  {} to launch the interactive finder", "donor-finder tui".yellow());
    Ok(())
}
