use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use trip_budget::cli::{Cli, Commands, ConfigCommands};
use trip_budget::{BudgetEstimator, TripBudgetConfig, TripBudgetError, telemetry, validation, web};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = TripBudgetConfig::load_from_path(args.config.clone())?;
    if args.verbose {
        config.logging.level = "debug".to_string();
    }

    match args.get_command() {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
                config.validate()?;
            }
            let _guard = telemetry::init(&config.logging, Some(&config.telemetry))?;
            web::run(config).await?;
        }
        Commands::Estimate {
            destination,
            style,
            mode,
            people,
            days,
        } => {
            let _guard = telemetry::init(&config.logging, None)?;
            let payload = json!({
                "destination": destination,
                "travelStyle": style,
                "travelMode": mode,
                "people": people,
                "days": days,
            });

            let trip = validation::validate(&payload).map_err(TripBudgetError::from)?;
            let estimate = BudgetEstimator::standard().estimate(&trip)?;
            tracing::info!(
                "Budget calculated for {} people to {} for {} days",
                trip.people,
                trip.destination,
                trip.days
            );

            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        Commands::Config { action } => match action {
            ConfigCommands::Show => {
                let rendered = serde_json::to_string_pretty(&config)
                    .with_context(|| "Failed to render configuration")?;
                println!("{rendered}");
            }
            ConfigCommands::Validate => {
                config.validate()?;
                println!("Configuration is valid");
            }
        },
    }

    Ok(())
}
