use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::filter_games;
use crate::models::{
    AnnotatedGame, ErrorResponse, GameRecord, GamesQuery, GamesResponse, HealthResponse, TurnaroundSummary,
};

/// Application state shared across all handlers
///
/// The report is computed once before the server starts and never changes.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<Vec<AnnotatedGame>>,
    pub summary: Arc<TurnaroundSummary>,
    pub html: Arc<String>,
}

/// Configure all report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/games", web::get().to(list_games))
        .route("/turnaround", web::get().to(turnaround));
}

/// Rendered HTML report
///
/// GET /
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(state.html.as_str().to_owned())
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        games_loaded: state.games.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Long-haul games, filtered like the report page
///
/// GET /api/v1/games?sport=baseball&year=2024&division=5A&tier=red&round=First%20Round
async fn list_games(state: web::Data<AppState>, query: web::Query<GamesQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let filter = match query.to_filter() {
        Ok(filter) => filter,
        Err(message) => {
            tracing::debug!("Rejected games query: {}", message);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid filter".to_string(),
                message,
                status_code: 400,
            });
        }
    };

    let games: Vec<GameRecord> = filter_games(&state.games, &filter)
        .into_iter()
        .map(GameRecord::from)
        .collect();

    tracing::debug!("Returning {} of {} games", games.len(), state.games.len());

    HttpResponse::Ok().json(GamesResponse {
        total_results: games.len(),
        games,
    })
}

/// Turnaround analysis summary
///
/// GET /api/v1/turnaround
async fn turnaround(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.summary.as_ref())
}
