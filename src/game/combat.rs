//! Per-turn resource allocator.
//!
//! One [`Budget`] starts at the tower's resources and is threaded through an
//! ordered list of steps: defense, then upgrade, then attacks. Each step sees
//! whatever the earlier ones left and may end the turn early. Spending goes
//! through checked subtraction, so the emitted actions can never cost more
//! than the tower had.

use crate::game::{
    ranking::{self, LifeModel},
    types::{Action, GameSnapshot, PlayerId, TowerState},
    upgrade::upgrade_cost,
};
use std::ops::ControlFlow;

/// Armor top-up while the tower is fragile and the match is young.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyDefense {
    /// Triggers while own hp is strictly below this.
    pub hp_below: u64,
    /// Only before this turn number.
    pub before_turn: u32,
    /// Share of per-turn income put into armor.
    pub income_share: f64,
}

/// Tuning knobs for one combat strategy. Every step is optional except
/// upgrading and attacking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatConfig {
    pub early_defense: Option<EarlyDefense>,
    /// From this turn on, everything goes into armor.
    pub late_game_turn: Option<u32>,
    /// No upgrades at or beyond this level.
    pub max_level: u32,
    /// At `max_level`, split resources between armor and the last enemy.
    pub split_at_cap: bool,
    /// Share of resources put into armor when enemy income outweighs our life.
    pub economic_defense: Option<f64>,
    /// Share of resources put into armor every turn.
    pub flat_armor: Option<f64>,
    /// Attack only when resources exceed this multiple of total enemy life.
    pub attack_multiplier: f64,
    pub life: LifeModel,
    /// Ignore enemies that are already at 0 hp.
    pub skip_fallen: bool,
}

/// Running balance and the actions committed against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    remaining: u64,
    actions: Vec<Action>,
}

impl Budget {
    pub fn new(resources: u64) -> Self {
        Budget {
            remaining: resources,
            actions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Actions committed so far, in the order they were bought.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }

    fn spend(&mut self, amount: u64) -> bool {
        match self.remaining.checked_sub(amount) {
            Some(left) => {
                self.remaining = left;
                true
            }
            None => false,
        }
    }

    /// Invests up to `amount` in armor, capped by what is left.
    pub fn armor(&mut self, amount: u64) {
        let amount = amount.min(self.remaining);
        if amount > 0 && self.spend(amount) {
            self.actions.push(Action::Armor { amount });
        }
    }

    /// Buys the next level if affordable.
    pub fn upgrade(&mut self, cost: u64) -> bool {
        let bought = self.spend(cost);
        if bought {
            self.actions.push(Action::Upgrade);
        }
        bought
    }

    /// Sends up to `troops` at `target`, capped by what is left. Returns the
    /// number actually sent.
    pub fn attack(&mut self, target: &PlayerId, troops: u64) -> u64 {
        let troops = troops.min(self.remaining);
        if troops == 0 || !self.spend(troops) {
            return 0;
        }
        self.actions.push(Action::Attack {
            target_id: target.clone(),
            troop_count: troops,
        });
        troops
    }
}

/// Everything a step may look at.
struct Turn<'a> {
    me: &'a TowerState,
    enemies: Vec<&'a TowerState>,
    turn: u32,
    cfg: &'a CombatConfig,
}

type Step = fn(&Turn<'_>, &mut Budget) -> ControlFlow<()>;

const STEPS: [Step; 6] = [
    early_defense,
    late_game,
    split_at_cap,
    defense_investment,
    upgrade,
    attack,
];

/// Ordered actions for this turn. Empty without an own tower or enemies.
pub fn decide(snapshot: &GameSnapshot, cfg: &CombatConfig) -> Vec<Action> {
    let Some((me, roster)) = snapshot.contenders() else {
        return Vec::new();
    };

    let turn = Turn {
        me,
        enemies: roster
            .iter()
            .filter(|e| !cfg.skip_fallen || e.is_alive())
            .collect(),
        turn: snapshot.turn_number,
        cfg,
    };

    let mut budget = Budget::new(me.resources);
    for step in STEPS {
        if step(&turn, &mut budget).is_break() {
            break;
        }
    }
    budget.into_actions()
}

/// `floor(amount * fraction)`, never more than `amount`.
fn share(amount: u64, fraction: f64) -> u64 {
    let part = (amount as f64 * fraction.clamp(0.0, 1.0)).floor() as u64;
    part.min(amount)
}

fn early_defense(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    if let Some(rule) = t.cfg.early_defense {
        if t.me.hp < rule.hp_below && t.me.income > 0 && t.turn < rule.before_turn {
            budget.armor(share(t.me.income, rule.income_share));
        }
    }
    ControlFlow::Continue(())
}

fn late_game(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    match t.cfg.late_game_turn {
        Some(from) if t.turn >= from => {
            budget.armor(budget.remaining());
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    }
}

fn split_at_cap(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    if !t.cfg.split_at_cap || t.me.level < t.cfg.max_level {
        return ControlFlow::Continue(());
    }

    budget.armor(budget.remaining() / 2);
    if let [sole] = t.enemies.as_slice() {
        if let Some(id) = &sole.player_id {
            budget.attack(id, budget.remaining());
        }
    }
    ControlFlow::Break(())
}

fn defense_investment(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    if let Some(fraction) = t.cfg.economic_defense {
        let enemy_income = t
            .enemies
            .iter()
            .fold(0_u64, |sum, e| sum.saturating_add(e.income));
        if enemy_income > t.me.hp.saturating_add(t.me.defense) {
            budget.armor(share(budget.remaining(), fraction));
        }
    }
    if let Some(pct) = t.cfg.flat_armor {
        budget.armor(share(budget.remaining(), pct));
    }
    ControlFlow::Continue(())
}

fn upgrade(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    if t.me.level < t.cfg.max_level {
        let cost = upgrade_cost(t.me.level);
        if budget.remaining() >= cost {
            budget.upgrade(cost);
        }
    }
    ControlFlow::Continue(())
}

fn attack(t: &Turn<'_>, budget: &mut Budget) -> ControlFlow<()> {
    let ranked = ranking::by_ascending_life(t.enemies.iter().copied(), t.cfg.life);
    let total = ranked
        .iter()
        .fold(0_u64, |sum, &(_, life)| sum.saturating_add(life));

    let troops = budget.remaining();
    if troops == 0 || troops as f64 <= t.cfg.attack_multiplier * total as f64 {
        return ControlFlow::Continue(());
    }

    for (enemy, life) in ranked {
        if budget.remaining() == 0 {
            break;
        }
        if let Some(id) = &enemy.player_id {
            // one over effective life guarantees the kill
            budget.attack(id, life.saturating_add(1));
        }
    }
    ControlFlow::Break(())
}
