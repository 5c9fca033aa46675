#![allow(non_snake_case)]

mod cli;
mod clients;
mod config;
mod events;
mod handlers;
mod models;
mod runtime;
mod service;

use std::env;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use crate::config::AppConfig;

const DEFAULT_RUN_MODE: &str = "cli";
const DEFAULT_CALENDAR_ID: &str = "primary";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    let run_mode = get_prop("RUN_MODE").unwrap_or(DEFAULT_RUN_MODE.to_string());
    let api_token = get_prop("GOOGLE_API_TOKEN")
        .expect("GOOGLE_API_TOKEN environment variable not set");
    let default_calendar =
        get_prop("CALENDAR_ID").unwrap_or(DEFAULT_CALENDAR_ID.to_string());

    if run_mode == "api" {
        let port = get_prop("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        runtime::run_api(api_token, default_calendar, port).await;
    } else if run_mode == "cli" {
        cli::cli(api_token, default_calendar).await;
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
