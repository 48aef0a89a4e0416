use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use studay_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{RequestIdMiddleware, ACCESS_LOG_FORMAT},
    services::session_store::spawn_idle_sweep,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config
        .validate()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let cors_origin = config.cors_allowed_origin.clone();
    let idle_timeout = config.session_idle_timeout();

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    spawn_idle_sweep(state.sessions.clone(), idle_timeout);

    log::info!(
        "Starting HTTP server on {}:{} (quiz service: {})",
        bind_addr.0,
        bind_addr.1,
        state.config.quiz_service_url
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(ACCESS_LOG_FORMAT))
            .wrap(cors)
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
