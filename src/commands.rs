//! Command implementations behind the CLI

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::SourceArgs;
use crate::config::Settings;
use crate::core::{Analysis, Annotator, LocationTable};
use crate::error::AppError;
use crate::models::{Matchup, School, TurnaroundSummary};
use crate::routes::{self, AppState};
use crate::services::{
    cache_to_supplement, export_csv, export_summary, load_cache, load_matchups, render_html, render_text, sample_matchups,
    save_matchups, write_text, BracketTextParser, Geocoder, OsaaScraper, RenderOptions,
};

const PARSED_DESCRIPTION: &str = "OSAA Baseball/Softball Playoff Matchups - Parsed from raw bracket data";

fn read_input(path: &str) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Input {
        path: path.to_string(),
        source,
    })
}

/// Load matchups from the selected source
pub async fn load_source(source: &SourceArgs, settings: &Settings) -> Result<Vec<Matchup>, AppError> {
    if source.sample {
        info!("Generating sample data...");
        return Ok(sample_matchups());
    }

    if source.scrape {
        info!("Scraping OSAA brackets...");
        let scrape = &settings.scrape;
        let scraper = OsaaScraper::new(
            scrape.base_url.clone(),
            &scrape.user_agent,
            Duration::from_secs(scrape.timeout_secs),
            Duration::from_millis(scrape.delay_ms),
            LocationTable::new(),
        )?;
        return Ok(scraper.scrape_all(&scrape.years, &scrape.divisions).await);
    }

    if let Some(text) = &source.text {
        info!("Parsing bracket text from {}...", text);
        let parser = BracketTextParser::new()?;
        return Ok(parser.parse(&read_input(text)?).matchups);
    }

    info!("Loading data from {}...", source.json);
    Ok(load_matchups(&source.json)?)
}

/// Location table with geocoded supplement entries
///
/// An existing geocode cache is always used. New lookups only happen when
/// geocoding is enabled.
pub async fn build_locations(matchups: &[Matchup], settings: &Settings) -> LocationTable {
    let geocode = &settings.geocode;
    let cache_path = Path::new(&geocode.cache_file);

    if !geocode.enabled {
        let supplement: HashMap<String, School> = match load_cache(cache_path) {
            Ok(cache) => cache_to_supplement(&cache),
            Err(e) => {
                warn!("Ignoring unreadable geocode cache {}: {}", cache_path.display(), e);
                HashMap::new()
            }
        };
        return LocationTable::with_supplement(supplement);
    }

    let mut geocoder = match Geocoder::new(
        geocode.endpoint.clone(),
        &geocode.user_agent,
        Some(cache_path.to_path_buf()),
        Duration::from_millis(geocode.delay_ms),
    ) {
        Ok(geocoder) => geocoder,
        Err(e) => {
            warn!("Geocoding disabled: {}", e);
            return LocationTable::new();
        }
    };

    let builtin = LocationTable::new();
    let teams: BTreeSet<&str> = matchups
        .iter()
        .flat_map(|m| [m.team1.as_str(), m.team2.as_str()])
        .collect();
    geocoder.resolve_missing(teams, &builtin).await;

    LocationTable::with_supplement(geocoder.supplement())
}

async fn run_analysis(source: &SourceArgs, settings: &Settings) -> Result<Analysis, AppError> {
    let matchups = load_source(source, settings).await?;
    let locations = build_locations(&matchups, settings).await;
    let annotator = Annotator::new(locations, settings.thresholds(), settings.analysis.min_distance);

    let analysis = Analysis::run(&annotator, matchups, &settings.analysis.regional_teams);

    if !analysis.annotation.unresolved_teams.is_empty() {
        warn!(
            "{} teams could not be located: {:?}",
            analysis.annotation.unresolved_teams.len(),
            analysis.annotation.unresolved_teams
        );
    }

    Ok(analysis)
}

fn render_options(settings: &Settings, top_n: Option<usize>) -> RenderOptions {
    RenderOptions {
        min_distance: settings.analysis.min_distance,
        thresholds: settings.thresholds(),
        top_n: top_n.unwrap_or(settings.analysis.top_n),
    }
}

fn summary_of(analysis: &Analysis, top_n: usize) -> TurnaroundSummary {
    TurnaroundSummary::new(&analysis.report, &analysis.regional, &analysis.tiers, top_n)
}

/// `report`: tier breakdown plus CSV, HTML and summary files
pub async fn report(
    settings: &Settings,
    source: &SourceArgs,
    csv: Option<String>,
    html: Option<String>,
    summary: Option<String>,
) -> Result<(), AppError> {
    let analysis = run_analysis(source, settings).await?;
    let games = &analysis.annotation.games;

    if games.is_empty() {
        warn!("No games found with {}+ miles distance", settings.analysis.min_distance);
        return Ok(());
    }

    let options = render_options(settings, None);
    let tiers = &analysis.tiers;
    println!("\nTotal long-haul games ({:.0}+ mi): {}", options.min_distance, games.len());
    println!("  Green (up to {:.0} mi): {}", options.thresholds.green_max, tiers.green);
    println!("  Yellow (up to {:.0} mi): {}", options.thresholds.yellow_max, tiers.yellow);
    println!("  Red (over {:.0} mi): {}", options.thresholds.yellow_max, tiers.red);

    let output = &settings.output;
    export_csv(csv.as_deref().unwrap_or(&output.csv), games)?;

    let html_path = html.as_deref().unwrap_or(&output.html);
    write_text(html_path, &render_html(&analysis, &options)?)?;
    info!("Generated {} with {} games", html_path, games.len());

    export_summary(
        summary.as_deref().unwrap_or(&output.summary),
        &summary_of(&analysis, options.top_n),
    )?;

    Ok(())
}

/// `analyze`: print the turnaround report and write the summary JSON
pub async fn analyze(
    settings: &Settings,
    source: &SourceArgs,
    out: Option<String>,
    top: Option<usize>,
) -> Result<(), AppError> {
    let analysis = run_analysis(source, settings).await?;

    if analysis.annotation.games.is_empty() {
        warn!("No long-haul games to analyze");
        return Ok(());
    }

    let options = render_options(settings, top);
    println!("{}", render_text(&analysis, &options));

    export_summary(
        out.as_deref().unwrap_or(&settings.output.summary),
        &summary_of(&analysis, options.top_n),
    )?;

    Ok(())
}

/// `parse`: raw bracket text to bracket JSON
pub fn parse(input: &str, out: &str) -> Result<(), AppError> {
    let parser = BracketTextParser::new()?;
    let parsed = parser.parse(&read_input(input)?);

    println!("Found {} matchups", parsed.matchups.len());
    if parsed.matchups.is_empty() {
        warn!("Nothing to write");
        return Ok(());
    }

    println!("\nBreakdown:");
    for (key, count) in &parsed.counts {
        println!("  {}: {} games", key, count);
    }

    save_matchups(out, &parsed.matchups, Some(PARSED_DESCRIPTION.to_string()))?;
    Ok(())
}

/// `serve`: precompute the report and serve it until shutdown
pub async fn serve(
    settings: &Settings,
    source: &SourceArgs,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), AppError> {
    let analysis = run_analysis(source, settings).await?;
    let options = render_options(settings, None);

    if analysis.annotation.games.is_empty() {
        warn!("Serving an empty report");
    }

    let html = render_html(&analysis, &options)?;
    let summary = summary_of(&analysis, options.top_n);

    let app_state = AppState {
        games: Arc::new(analysis.annotation.games),
        summary: Arc::new(summary),
        html: Arc::new(html),
    };

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let workers = settings.server.workers.unwrap_or(2);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
