//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! DATA_FILE (JSON snapshot path; omit for in-memory only).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Data, Json, Query},
    App, HttpResponse, HttpServer, Responder,
};
use pong_league_web::{
    record_match, sort_rows, standings, Direction, LeagueError, LeagueStore, MatchSubmission,
    COLUMN_COUNT,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration shared with handlers.
struct AppConfig {
    /// Snapshot file; the store is saved here after every successful write.
    data_file: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query string for the standings endpoint: optional column sort.
#[derive(Deserialize)]
struct StandingsQuery {
    /// Column index 0-7.
    sort: Option<usize>,
    /// "asc" (default) or "desc".
    dir: Option<String>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pong-league-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Standings rows with derived fields, in collection order unless sorted.
#[get("/api/standings")]
async fn api_standings(store: Data<LeagueStore>, query: Query<StandingsQuery>) -> HttpResponse {
    let players = match store.list_players() {
        Ok(players) => players,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut rows = standings(&players);
    if let Some(column) = query.sort {
        if column >= COLUMN_COUNT {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Unknown sort column" }));
        }
        let direction = match query.dir.as_deref() {
            Some("desc") => Direction::Descending,
            _ => Direction::Ascending,
        };
        sort_rows(&mut rows, column, direction);
    }
    HttpResponse::Ok().json(rows)
}

/// Standings as CSV (same rows and column order as the JSON endpoint).
#[get("/api/standings.csv")]
async fn api_standings_csv(store: Data<LeagueStore>) -> HttpResponse {
    let players = match store.list_players() {
        Ok(players) => players,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in standings(&players) {
        if let Err(e) = writer.serialize(row) {
            log::error!("CSV export failed: {}", e);
            return HttpResponse::InternalServerError().body("csv error");
        }
    }
    match writer.into_inner() {
        Ok(data) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(data),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().body("csv error")
        }
    }
}

/// The append-only match log, newest first.
#[get("/api/matches")]
async fn api_list_matches(store: Data<LeagueStore>) -> HttpResponse {
    match store.list_matches() {
        Ok(mut matches) => {
            matches.reverse();
            HttpResponse::Ok().json(matches)
        }
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Record a match result: validates, appends the log entry, and updates both
/// players' counters in one store transaction.
#[post("/api/matches")]
async fn api_submit_match(
    store: Data<LeagueStore>,
    config: Data<AppConfig>,
    body: Json<MatchSubmission>,
) -> HttpResponse {
    match record_match(&store, &body) {
        Ok(outcome) => {
            log::info!(
                "Recorded match: {} {} - {} {}",
                outcome.record.player1,
                outcome.record.score1,
                outcome.record.score2,
                outcome.record.player2
            );
            if let Some(path) = &config.data_file {
                if let Err(e) = store.save(path) {
                    log::warn!("Snapshot save failed: {}", e);
                }
            }
            HttpResponse::Ok().json(outcome)
        }
        Err(LeagueError::Store(e)) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": e.to_string() })),
        Err(e) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let data_file = std::env::var("DATA_FILE").ok().map(PathBuf::from);
    let store = match &data_file {
        Some(path) => LeagueStore::load(path).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => {
            log::info!("DATA_FILE not set; standings are in-memory only");
            LeagueStore::new()
        }
    };
    let store = Data::new(store);
    let config = Data::new(AppConfig { data_file });

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_list_matches)
            .service(api_submit_match)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
