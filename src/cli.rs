use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::Text;

use crate::service::calendar_service::CalendarService;
use crate::service::color_policy::color_for;
use crate::service::enricher::enrich;
use crate::service::update_flow::{handle_calendar_update, UpdateOutcome};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one resolve-and-enrich pass against a calendar.
    Enrich { calendar_id: Option<String> },
    /// Enrich a title interactively without touching any calendar.
    Preview {},
}

pub async fn cli(api_token: String, default_calendar: String) {
    // Fine to panic here
    let cli = Cli::parse();
    match &cli.command {
        Commands::Enrich { calendar_id } => {
            let calendar_id = calendar_id.clone().unwrap_or(default_calendar);
            let service = CalendarService::new(api_token);
            match handle_calendar_update(&service, &calendar_id, Utc::now()).await {
                Ok(UpdateOutcome::NoEvent) => {
                    println!("No event modified recently in {}", calendar_id);
                }
                Ok(UpdateOutcome::Skipped) => {
                    println!("Event carries the skip marker, nothing changed");
                }
                Ok(UpdateOutcome::Enriched {
                    title_changed,
                    color,
                }) => {
                    println!("Done. title_changed={}, color={:?}", title_changed, color);
                }
                Err(e) => {
                    println!("Failed to enrich calendar {}: {}", calendar_id, e);
                }
            }
        }
        Commands::Preview {} => {
            if let Err(e) = preview_prompt() {
                println!("Preview failed: {}", e);
            }
        }
    }
}

fn preview_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let title = Text::new("Event title to enrich:").prompt()?;
    let enrichment = enrich(&title);
    println!("Title:    {}", enrichment.title);
    println!("Category: {:?}", enrichment.category);
    println!("Color:    {:?}", color_for(enrichment.category));
    Ok(())
}
