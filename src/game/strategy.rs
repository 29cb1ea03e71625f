//! Named combat presets and the profile advertised on `/info`.

use crate::game::{
    combat::{CombatConfig, EarlyDefense},
    negotiation::NegotiationStrategy,
    ranking::LifeModel,
};
use crate::protocol::BotInfo;
use std::{fmt, str::FromStr};

/// The tuned strategy variants the bot has shipped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombatPreset {
    /// Upgrade to 4, then throw everything at the cheapest targets.
    Aggressive,
    /// 5% armor every turn, upgrade to 4, attack at 1.2x enemy hp.
    #[default]
    Steady,
    /// All-in armor when enemy income outweighs our life.
    Guarded,
    /// Threat-aware defense with early, late and post-cap phases.
    Fortress,
}

impl CombatPreset {
    pub const ALL: [CombatPreset; 4] = [
        CombatPreset::Aggressive,
        CombatPreset::Steady,
        CombatPreset::Guarded,
        CombatPreset::Fortress,
    ];

    /// Short name used in configuration.
    pub fn id(self) -> &'static str {
        match self {
            CombatPreset::Aggressive => "aggressive",
            CombatPreset::Steady => "steady",
            CombatPreset::Guarded => "guarded",
            CombatPreset::Fortress => "fortress",
        }
    }

    /// Descriptive identifier reported to the game engine.
    pub fn slug(self) -> &'static str {
        match self {
            CombatPreset::Aggressive => "upgrade-to-4-attack-at-1x-enemy-hp",
            CombatPreset::Steady => "upgrade-to-4-defend-5pct-attack-at-1.2x-enemy-hp",
            CombatPreset::Guarded => "economic-defense-upgrade-to-4-attack-at-1.2x-enemy-life",
            CombatPreset::Fortress => "phased-defense-upgrade-to-5-attack-at-1.1x-enemy-life",
        }
    }

    pub fn config(self) -> CombatConfig {
        match self {
            CombatPreset::Aggressive => CombatConfig {
                early_defense: None,
                late_game_turn: None,
                max_level: 4,
                split_at_cap: false,
                economic_defense: None,
                flat_armor: None,
                attack_multiplier: 1.0,
                life: LifeModel::Hp,
                skip_fallen: false,
            },
            CombatPreset::Steady => CombatConfig {
                flat_armor: Some(0.05),
                attack_multiplier: 1.2,
                ..CombatPreset::Aggressive.config()
            },
            CombatPreset::Guarded => CombatConfig {
                economic_defense: Some(1.0),
                attack_multiplier: 1.2,
                life: LifeModel::HpAndDefense,
                skip_fallen: true,
                ..CombatPreset::Aggressive.config()
            },
            CombatPreset::Fortress => CombatConfig {
                early_defense: Some(EarlyDefense {
                    hp_below: 100,
                    before_turn: 25,
                    income_share: 0.5,
                }),
                late_game_turn: Some(50),
                max_level: 5,
                split_at_cap: true,
                economic_defense: Some(0.5),
                flat_armor: None,
                attack_multiplier: 1.1,
                life: LifeModel::HpAndDefense,
                skip_fallen: true,
            },
        }
    }
}

impl fmt::Display for CombatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CombatPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == wanted || p.slug() == wanted)
            .ok_or_else(|| anyhow::anyhow!("unknown combat strategy `{s}`"))
    }
}

/// What this bot instance plays, shared read-only with every worker.
#[derive(Debug, Clone, PartialEq)]
pub struct BotProfile {
    pub name: String,
    pub combat: CombatPreset,
    pub combat_config: CombatConfig,
    pub negotiation: NegotiationStrategy,
}

impl BotProfile {
    pub fn new(
        name: impl Into<String>,
        combat: CombatPreset,
        negotiation: NegotiationStrategy,
    ) -> Self {
        BotProfile {
            name: name.into(),
            combat,
            combat_config: combat.config(),
            negotiation,
        }
    }

    pub fn info(&self) -> BotInfo {
        BotInfo {
            name: self.name.clone(),
            strategy: self.combat.slug().into(),
            negotiation: self.negotiation.id().into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
