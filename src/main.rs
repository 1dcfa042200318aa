use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use perf_review_server::config::CorsConfig;
use perf_review_server::{handlers, health_check, AppError, AppState, Settings};
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

fn build_cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let cors = if config.allow_any_origin {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_any_header()
    } else {
        Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://127.0.0.1:5173")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type"])
    };

    cors.max_age(config.max_age as usize)
}

#[actix_web::main]
async fn main() -> perf_review_server::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = Settings::new()?;
    info!("Configuration loaded for {} ({})", config.project_name, config.environment);

    let state = web::Data::new(AppState::new(config).await?);
    info!("Connected to database, schema ready");

    let settings = state.config.clone();
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))?;
    info!(
        "Serving API at http://{}:{}{}",
        settings.server.host, settings.server.port, settings.server.api_prefix
    );

    let server_settings = settings.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&server_settings.cors))
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .service(web::scope(&server_settings.server.api_prefix).configure(handlers::configure))
    })
    .listen(listener)?
    .workers(settings.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
