//! Alliance proposals sent before combat each turn.

use crate::game::{
    ranking,
    types::{GameSnapshot, NegotiationProposal, PlayerId, TowerState},
};
use std::{fmt, str::FromStr};

/// Which negotiation behaviour the bot runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegotiationStrategy {
    /// Offer an alliance to everybody, never ask for an attack.
    #[default]
    Peaceful,
    /// Ally with the strongest enemy and point it at the weakest.
    StrengthBased,
    /// Shun last turn's attackers and ask everybody else to hit the worst one.
    Retaliatory,
}

impl NegotiationStrategy {
    pub const ALL: [NegotiationStrategy; 3] = [
        NegotiationStrategy::Peaceful,
        NegotiationStrategy::StrengthBased,
        NegotiationStrategy::Retaliatory,
    ];

    pub fn id(self) -> &'static str {
        match self {
            NegotiationStrategy::Peaceful => "peaceful",
            NegotiationStrategy::StrengthBased => "strength",
            NegotiationStrategy::Retaliatory => "retaliatory",
        }
    }
}

impl fmt::Display for NegotiationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NegotiationStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|n| n.id() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown negotiation strategy `{s}`"))
    }
}

/// Proposals for this turn. Empty when we have no tower or nobody to talk to.
pub fn negotiate(
    snapshot: &GameSnapshot,
    strategy: NegotiationStrategy,
) -> Vec<NegotiationProposal> {
    let Some((me, enemies)) = snapshot.contenders() else {
        return Vec::new();
    };

    // never negotiate with ourselves, whatever the roster says
    let others: Vec<TowerState> = enemies
        .iter()
        .filter(|e| me.player_id.is_none() || e.player_id != me.player_id)
        .cloned()
        .collect();

    match strategy {
        NegotiationStrategy::Peaceful => peaceful(&others),
        NegotiationStrategy::StrengthBased => strength_based(&others),
        NegotiationStrategy::Retaliatory => retaliatory(snapshot, me, &others),
    }
}

fn peaceful(enemies: &[TowerState]) -> Vec<NegotiationProposal> {
    enemies
        .iter()
        .filter_map(|e| e.player_id.clone())
        .map(|ally_id| NegotiationProposal {
            ally_id,
            attack_target_id: None,
        })
        .collect()
}

fn strength_based(enemies: &[TowerState]) -> Vec<NegotiationProposal> {
    let (Some(strong), Some(weak)) = (ranking::strongest(enemies), ranking::weakest(enemies)) else {
        return Vec::new();
    };
    let Some(ally_id) = strong.player_id.clone() else {
        return Vec::new();
    };
    let attack_target_id = weak.player_id.clone().filter(|t| *t != ally_id);

    vec![NegotiationProposal {
        ally_id,
        attack_target_id,
    }]
}

fn retaliatory(
    snapshot: &GameSnapshot,
    me: &TowerState,
    enemies: &[TowerState],
) -> Vec<NegotiationProposal> {
    let Some(my_id) = &me.player_id else {
        return peaceful(enemies);
    };

    let standing = |id: &PlayerId| enemies.iter().find(|e| e.player_id.as_ref() == Some(id));
    let hostile: Vec<(&PlayerId, u64)> = ranking::aggressors(&snapshot.previous_attacks, my_id)
        .into_iter()
        .filter(|&(id, _)| standing(id).is_some())
        .collect();

    // heaviest living hitter, first occurrence on ties
    let target = hostile
        .iter()
        .filter(|&&(id, _)| standing(id).is_some_and(TowerState::is_alive))
        .rev()
        .max_by_key(|&&(_, troops)| troops)
        .map(|&(id, _)| id.clone());

    let Some(target) = target else {
        return peaceful(enemies);
    };

    enemies
        .iter()
        .filter_map(|e| e.player_id.clone())
        .filter(|id| !hostile.iter().any(|(h, _)| *h == id))
        .map(|ally_id| NegotiationProposal {
            ally_id,
            attack_target_id: Some(target.clone()),
        })
        .collect()
}
