//! Liveness check and bot metadata.

use crate::{game::BotProfile, protocol::HealthStatus};
use actix_web::{get, web, HttpResponse, Responder};

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::ok())
}

/// GET /info
#[get("/info")]
pub async fn info(profile: web::Data<BotProfile>) -> impl Responder {
    HttpResponse::Ok().json(profile.info())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz).service(info);
}
