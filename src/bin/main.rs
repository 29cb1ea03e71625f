use actix_web::{
    http::StatusCode,
    middleware::{ErrorHandlers, Logger},
    web, App, HttpServer,
};
use kingdom_wars_bot::{config::settings, http, metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let cfg = settings();
    let profile = web::Data::new(cfg.profile());
    let metrics = metrics::build()?;

    log::info!(
        "Kingdom Wars bot `{}` playing {} / {} listening on {}:{}",
        cfg.bot_name,
        cfg.combat,
        cfg.negotiation,
        cfg.host,
        cfg.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandlers::new().handler(
                StatusCode::INTERNAL_SERVER_ERROR,
                http::errors::internal_error,
            ))
            .wrap(Logger::new("[KW-BOT] %r %s %b %Dms"))
            .wrap(metrics.clone())
            .app_data(profile.clone())
            .configure(http::routes::init_routes)
    })
    .bind(cfg.bind_addr())?
    .run()
    .await?;

    Ok(())
}
