use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use clap::Parser;
use moodbank::analysis;
use moodbank::api::session::SessionId;
use moodbank::api::ApiError;
use moodbank::cli::{
    commands::{Cli, Commands},
    run_cli,
};
use moodbank::config::AppConfig;
use moodbank::kb::EmotionKb;
use moodbank::store::{self, StoreHandle};
use tracing::{error, info};

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

async fn index() -> impl Responder {
    let html = include_str!("../static/index.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

async fn track() -> impl Responder {
    let html = include_str!("../static/track.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

async fn insights(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    store: web::Data<StoreHandle>,
) -> impl Responder {
    let session = SessionId::resolve(&req, &config.session);
    let entries = store.lock().unwrap().list_by_session(session.id());
    let pattern = analysis::analyze(&entries);
    let pattern_json = serde_json::to_string(&pattern).unwrap_or_else(|_| "null".to_string());

    let html = include_str!("../static/insights.html").replace("__PATTERN__", &pattern_json);

    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = session.issue_cookie(&config.session) {
        resp.cookie(cookie);
    }
    resp.content_type("text/html").body(html)
}

async fn solutions() -> impl Responder {
    let html = include_str!("../static/solutions.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        run_cli(cli.command);
        return Ok(());
    }

    info!("Starting MoodBank server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let store = store::new_store();
    let kb = web::Data::new(EmotionKb::load());

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(kb.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::Validation(err.to_string()).into()
            }))
            .route("/", web::get().to(index))
            .route("/track", web::get().to(track))
            .route("/insights", web::get().to(insights))
            .route("/solutions", web::get().to(solutions))
            .route("/health", web::get().to(health))
            .configure(moodbank::api::routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
