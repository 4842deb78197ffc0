use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{Read, Write};
use std::path::Path;

use realmdata::report::{self, DashboardReport};
use realmdata::{Dashboard, SortConfig, SortDirection, SortKey, Tab};

mod args;

use args::{Cli, Commands, ViewArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Resources(args) => show_view(Tab::Resources, &args),
        Commands::Military(args) => show_view(Tab::Military, &args),
        Commands::Validate { input } => validate(&input),
        Commands::Sample { output } => write_sample(output.as_deref()),
    }
}

fn load_dashboard(path: &Path) -> Result<Dashboard> {
    let mut dashboard = Dashboard::new();
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read snapshot from stdin")?;
        dashboard
            .load_json(&text)
            .context("Could not load realms from stdin")?;
    } else {
        let realms = realmdata::load::load_file(path)
            .with_context(|| format!("Could not load realms from {}", path.display()))?;
        dashboard.load_realms(realms);
    }
    Ok(dashboard)
}

fn show_view(tab: Tab, args: &ViewArgs) -> Result<()> {
    let mut dashboard = load_dashboard(&args.input)?;

    let Some(key) = SortKey::from_column(&args.sort, dashboard.snapshot().matrix()) else {
        bail!(
            "Unknown sort column '{}': expected 'resource', 'total', or a realm name",
            args.sort
        );
    };
    let direction = if args.descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    dashboard.set_sort(SortConfig { key, direction });
    if let Some(term) = &args.search {
        dashboard.set_search(term.as_str());
    }
    if !dashboard.has_data() {
        log::warn!("Snapshot contains no realms");
    }
    dashboard.set_tab(tab);
    log::debug!("View: {:?}", dashboard.view());

    let snapshot = dashboard.snapshot();
    if args.json {
        let report = DashboardReport::new(snapshot, dashboard.view())
            .with_timestamp(dashboard.last_updated());
        println!("{}", report::json_report(&report)?);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(
        handle,
        "Last updated: {}",
        dashboard.last_updated().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(handle)?;
    match tab {
        Tab::Military => report::print_military_view(snapshot, dashboard.view(), &mut handle)?,
        _ => report::print_resource_table(snapshot, dashboard.view(), &mut handle)?,
    }
    Ok(())
}

fn validate(input: &Path) -> Result<()> {
    let dashboard = load_dashboard(input)?;
    let snapshot = dashboard.snapshot();
    println!(
        "OK: {} realms, {} resources ({} economic, {} military)",
        snapshot.realms().len(),
        snapshot.resource_names().len(),
        snapshot.economic().len(),
        snapshot.military().len()
    );
    Ok(())
}

fn write_sample(output: Option<&Path>) -> Result<()> {
    let json = realmdata::load::sample_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write sample to: {}", path.display()))?;
            log::info!("Sample written to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
