//! Lenient per-turn snapshot as sent by the game engine.
//!
//! Every field is optional on the wire and may carry garbage. Field-name
//! synonyms and numeric coercion are resolved here, once, so the policy only
//! ever sees a canonical [`GameSnapshot`].

use crate::game::types::{AttackRecord, GameSnapshot, PlayerId, TowerState};
use serde::Deserialize;
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSnapshot {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    player_tower: Option<WireTower>,

    #[serde_as(as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    enemy_towers: Vec<WireTower>,

    #[serde_as(as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    previous_attacks: Vec<WireAttack>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    turn_number: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    turn: Option<f64>,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTower {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    player_id: Option<PlayerId>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    level: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    resources: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    hp: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    defense: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    armor: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    income: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    resource_income: Option<f64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    income_per_turn: Option<f64>,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAttack {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    attacker_id: Option<PlayerId>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    player_id: Option<PlayerId>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    source_id: Option<PlayerId>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    action: Option<WireAttackAction>,
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAttackAction {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    target_id: Option<PlayerId>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    troop_count: Option<f64>,
}

/// Non-finite, negative and absent values all become 0; fractions truncate.
fn quantity(v: Option<f64>) -> u64 {
    match v {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc() as u64,
        _ => 0,
    }
}

/// Like [`quantity`], but a tower with any hp left keeps at least 1.
fn hit_points(v: Option<f64>) -> u64 {
    match v {
        Some(n) if n.is_finite() && n > 0.0 => quantity(v).max(1),
        _ => 0,
    }
}

impl From<WireTower> for TowerState {
    fn from(w: WireTower) -> Self {
        let level = u32::try_from(quantity(w.level)).unwrap_or(u32::MAX).max(1);
        let defense = w.defense.filter(|d| d.is_finite()).or(w.armor);
        let income = w.income.or(w.resource_income).or(w.income_per_turn);

        TowerState {
            player_id: w.player_id,
            level,
            resources: quantity(w.resources),
            hp: hit_points(w.hp),
            defense: quantity(defense),
            income: quantity(income),
        }
    }
}

impl From<WireAttack> for AttackRecord {
    fn from(w: WireAttack) -> Self {
        let action = w.action.unwrap_or_default();
        AttackRecord {
            attacker_id: w.attacker_id.or(w.player_id).or(w.source_id),
            target_id: action.target_id,
            troop_count: quantity(action.troop_count),
        }
    }
}

impl From<WireSnapshot> for GameSnapshot {
    fn from(w: WireSnapshot) -> Self {
        GameSnapshot {
            player_tower: w.player_tower.map(TowerState::from),
            enemy_towers: w
                .enemy_towers
                .into_iter()
                .map(TowerState::from)
                // nothing to ally with or aim at without an id
                .filter(|t| t.player_id.is_some())
                .collect(),
            previous_attacks: w
                .previous_attacks
                .into_iter()
                .map(AttackRecord::from)
                .collect(),
            turn_number: u32::try_from(quantity(w.turn_number.or(w.turn))).unwrap_or(u32::MAX),
        }
    }
}

impl GameSnapshot {
    /// Canonicalise an already-parsed request body. Never fails: anything
    /// that is not an object yields an empty snapshot.
    pub fn from_json(body: Value) -> Self {
        if !body.is_object() {
            return GameSnapshot::default();
        }
        serde_json::from_value::<WireSnapshot>(body)
            .unwrap_or_default()
            .into()
    }
}
