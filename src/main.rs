use actix_web::{middleware::Logger, web, App, HttpServer};

use topic_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers::configure_routes,
    middleware::{build_cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;

    log::info!(
        "Starting quiz server on {}:{} (articles from {})",
        config.web_server_host,
        config.web_server_port,
        config.wiki_base_url
    );

    let cors_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(build_cors(&cors_config))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
