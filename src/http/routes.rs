use crate::{config::settings, http};
use actix_web::web;

/// Mount every endpoint at the root, as the game engine expects.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    mount(cfg, settings().body_limit);
}

/// Same as [`init_routes`] with an explicit body limit.
pub fn mount(cfg: &mut web::ServiceConfig, body_limit: usize) {
    cfg.app_data(http::errors::json_config(body_limit))
        .configure(http::health::init_routes)
        .configure(http::turns::init_routes)
        .default_service(web::to(http::errors::not_found));
}
