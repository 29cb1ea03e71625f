//! Enemy ordering helpers shared by the combat and negotiation policies.

use crate::game::types::{AttackRecord, PlayerId, TowerState};

/// How much damage it takes to bring a tower down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeModel {
    /// Hit points only.
    Hp,
    /// Hit points plus accumulated defense.
    HpAndDefense,
}

pub fn effective_life(enemy: &TowerState, model: LifeModel) -> u64 {
    match model {
        LifeModel::Hp => enemy.hp,
        LifeModel::HpAndDefense => enemy.hp.saturating_add(enemy.defense),
    }
}

/// Cheapest-to-eliminate first. The sort is stable, so equal lives keep
/// roster order.
pub fn by_ascending_life<'a>(
    enemies: impl IntoIterator<Item = &'a TowerState>,
    model: LifeModel,
) -> Vec<(&'a TowerState, u64)> {
    let mut ranked: Vec<_> = enemies
        .into_iter()
        .map(|e| (e, effective_life(e, model)))
        .collect();
    ranked.sort_by_key(|&(_, life)| life);
    ranked
}

fn strength(enemy: &TowerState) -> u64 {
    u64::from(enemy.level)
        .saturating_mul(100)
        .saturating_add(enemy.hp)
        .saturating_add(enemy.defense)
}

/// Highest `level*100 + hp + defense`; first occurrence wins ties.
pub fn strongest(enemies: &[TowerState]) -> Option<&TowerState> {
    // max_by_key keeps the last maximum, so walk backwards
    enemies.iter().rev().max_by_key(|e| strength(e))
}

/// Lowest `hp + defense`; first occurrence wins ties.
pub fn weakest(enemies: &[TowerState]) -> Option<&TowerState> {
    enemies
        .iter()
        .min_by_key(|e| effective_life(e, LifeModel::HpAndDefense))
}

/// Towers that attacked `me` last turn, with the troops each sent, in the
/// order they first appear in the history.
pub fn aggressors<'a>(history: &'a [AttackRecord], me: &PlayerId) -> Vec<(&'a PlayerId, u64)> {
    let mut out: Vec<(&PlayerId, u64)> = Vec::new();
    for record in history {
        let (Some(attacker), Some(target)) = (&record.attacker_id, &record.target_id) else {
            continue;
        };
        if target != me || attacker == me {
            continue;
        }
        match out.iter_mut().find(|(id, _)| *id == attacker) {
            Some((_, troops)) => *troops = troops.saturating_add(record.troop_count),
            None => out.push((attacker, record.troop_count)),
        }
    }
    out
}
