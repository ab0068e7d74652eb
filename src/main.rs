use campus_match::config::{LoggingSettings, Settings};
use campus_match::core::Matcher;
use campus_match::models::{FindMatchesRequest, FindMatchesResponse};
use campus_match::services::ProfileStore;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

fn init_logging(settings: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr; stdout carries the JSON result
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    let request = match FindMatchesRequest::from_args(std::env::args().skip(1)) {
        Ok(request) => request,
        Err(e) => {
            error!("{}; usage: campus-match <userId> [limit]", e);
            return ExitCode::from(2);
        }
    };

    if let Err(errors) = request.validate() {
        error!("Invalid request: {}", errors);
        return ExitCode::from(2);
    }

    let store = match ProfileStore::from_path(&settings.data.profiles_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load profiles: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Loaded {} profiles", store.len());

    let viewer = match store.get(&request.user_id) {
        Ok(profile) => profile,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let matcher = Matcher::new(
        settings.scoring.points,
        settings.matching.require_mutual_interest,
    );
    let limit = settings.matching.effective_limit(request.limit);

    info!("Finding matches for user: {}, limit: {}", request.user_id, limit);

    let result = matcher.find_matches(viewer, store.candidates_for(&request.user_id), limit);

    let response = FindMatchesResponse {
        user_id: request.user_id.clone(),
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        response.user_id,
        response.total_candidates
    );

    match serde_json::to_string_pretty(&response) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}
