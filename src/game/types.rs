use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque match-participant identifier, echoed back in the JSON type it came in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PlayerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Number(n) => write!(f, "{n}"),
            PlayerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId::Text(s.to_owned())
    }
}

impl From<i64> for PlayerId {
    fn from(n: i64) -> Self {
        PlayerId::Number(n)
    }
}

/// One tower (ours or an enemy's) after canonicalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowerState {
    pub player_id: Option<PlayerId>,
    pub level: u32, // always >= 1
    pub resources: u64,
    pub hp: u64,
    pub defense: u64, // `defense` or its synonym `armor`
    pub income: u64,
}

impl TowerState {
    /// A level-1 tower with nothing else set.
    pub fn new(player_id: impl Into<PlayerId>) -> Self {
        TowerState {
            player_id: Some(player_id.into()),
            ..TowerState::default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Default for TowerState {
    fn default() -> Self {
        TowerState {
            player_id: None,
            level: 1,
            resources: 0,
            hp: 0,
            defense: 0,
            income: 0,
        }
    }
}

/// Who hit whom on the previous turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttackRecord {
    pub attacker_id: Option<PlayerId>,
    pub target_id: Option<PlayerId>,
    pub troop_count: u64,
}

/// Everything the policy sees for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub player_tower: Option<TowerState>,
    pub enemy_towers: Vec<TowerState>,
    pub previous_attacks: Vec<AttackRecord>,
    pub turn_number: u32,
}

impl GameSnapshot {
    /// Own tower plus a non-empty roster, or `None` when there is nothing to decide.
    pub fn contenders(&self) -> Option<(&TowerState, &[TowerState])> {
        match &self.player_tower {
            Some(me) if !self.enemy_towers.is_empty() => Some((me, &self.enemy_towers)),
            _ => None,
        }
    }
}

/// One entry of the combat response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Armor {
        amount: u64,
    },
    Upgrade,
    Attack {
        #[serde(rename = "targetId")]
        target_id: PlayerId,
        #[serde(rename = "troopCount")]
        troop_count: u64,
    },
}

impl Action {
    /// Resources this action consumes, given the cost of the pending upgrade.
    /// Summing it over a turn's actions checks the result against the budget.
    pub fn spend(&self, upgrade_cost: u64) -> u64 {
        match self {
            Action::Armor { amount } => *amount,
            Action::Upgrade => upgrade_cost,
            Action::Attack { troop_count, .. } => *troop_count,
        }
    }
}

/// Non-binding alliance signal sent during negotiation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationProposal {
    pub ally_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_target_id: Option<PlayerId>,
}
