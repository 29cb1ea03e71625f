//! The two per-turn endpoints the game engine calls.
//!
//! Bodies arrive as loose JSON; [`GameSnapshot::from_json`] turns them into
//! something the policy can work with, so these handlers cannot fail once
//! the body has parsed.

use crate::game::{self, BotProfile, GameSnapshot};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::Value;

/// POST /negotiate
#[post("/negotiate")]
pub async fn negotiate_turn(
    body: web::Json<Value>,
    profile: web::Data<BotProfile>,
) -> impl Responder {
    let snapshot = GameSnapshot::from_json(body.into_inner());
    let proposals = game::negotiate(&snapshot, profile.negotiation);

    log::debug!(
        "negotiate turn {}: {} enemies -> {} proposals ({})",
        snapshot.turn_number,
        snapshot.enemy_towers.len(),
        proposals.len(),
        profile.negotiation
    );
    HttpResponse::Ok().json(proposals)
}

/// POST /combat
#[post("/combat")]
pub async fn combat_turn(body: web::Json<Value>, profile: web::Data<BotProfile>) -> impl Responder {
    let snapshot = GameSnapshot::from_json(body.into_inner());
    let actions = game::decide(&snapshot, &profile.combat_config);

    log::debug!(
        "combat turn {}: {} enemies -> {:?} ({})",
        snapshot.turn_number,
        snapshot.enemy_towers.len(),
        actions,
        profile.combat
    );
    HttpResponse::Ok().json(actions)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(negotiate_turn).service(combat_turn);
}
