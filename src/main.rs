use clap::Parser;
use std::process::ExitCode;

use gh_activity::cli::Cli;
use gh_activity::config::ConfigLoader;
use gh_activity::core::{decode_activities, fetch_activity, filter_recent, ReportGenerator};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ConfigLoader::load_from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to read config {}: {}", path.display(), err);
                return ExitCode::from(2);
            }
        },
        None => ConfigLoader::load(),
    };

    let url = config.events_url(&cli.username);
    let body = match fetch_activity(&url) {
        Some(body) if !body.is_empty() => body,
        _ => {
            println!("No data received");
            return ExitCode::from(1);
        }
    };

    let activities = decode_activities(&body);
    let recent = filter_recent(activities, chrono::Utc::now());

    let generator = ReportGenerator::new(&cli.username);
    let report = generator.generate(&recent);

    for notice in &report.notices {
        eprintln!("{}", notice);
    }

    println!("{}", generator.header());
    for line in &report.lines {
        println!("{}", line);
    }

    if cli.summary {
        for line in generator.summary(&report.counts) {
            println!("{}", line);
        }
    }

    ExitCode::SUCCESS
}
