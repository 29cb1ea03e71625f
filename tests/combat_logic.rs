//! Unit tests for the per-turn combat allocator.
//!
//! Run with `cargo test --test combat_logic`.

use kingdom_wars_bot::game::{
    combat::{decide, Budget, CombatConfig},
    strategy::CombatPreset,
    types::{Action, GameSnapshot, PlayerId, TowerState},
};

fn me(resources: u64, level: u32, hp: u64) -> TowerState {
    TowerState {
        resources,
        level,
        hp,
        ..TowerState::new("me")
    }
}

fn enemy(id: &str, hp: u64, defense: u64) -> TowerState {
    TowerState {
        hp,
        defense,
        ..TowerState::new(id)
    }
}

fn snapshot(me: TowerState, enemies: Vec<TowerState>, turn: u32) -> GameSnapshot {
    GameSnapshot {
        player_tower: Some(me),
        enemy_towers: enemies,
        previous_attacks: Vec::new(),
        turn_number: turn,
    }
}

fn armor(amount: u64) -> Action {
    Action::Armor { amount }
}

fn attack(target: &str, troops: u64) -> Action {
    Action::Attack {
        target_id: PlayerId::from(target),
        troop_count: troops,
    }
}

fn threshold_only() -> CombatConfig {
    CombatConfig {
        flat_armor: None,
        ..CombatPreset::Steady.config()
    }
}

#[test]
fn upgrades_then_finishes_lone_enemy_with_one_spare_troop() {
    let snap = snapshot(me(1000, 1, 500), vec![enemy("B", 100, 0)], 0);

    let actions = decide(&snap, &threshold_only());

    assert_eq!(actions, vec![Action::Upgrade, attack("B", 101)]);
}

#[test]
fn steady_invests_five_percent_before_anything_else() {
    let snap = snapshot(me(1000, 1, 500), vec![enemy("B", 100, 0)], 0);

    let actions = decide(&snap, &CombatPreset::Steady.config());

    assert_eq!(actions, vec![armor(50), Action::Upgrade, attack("B", 101)]);
}

#[test]
fn nothing_to_do_without_enemies_or_own_tower() {
    let no_enemies = snapshot(me(1000, 1, 500), Vec::new(), 0);
    let no_tower = GameSnapshot {
        player_tower: None,
        enemy_towers: vec![enemy("B", 100, 0)],
        ..GameSnapshot::default()
    };

    for preset in CombatPreset::ALL {
        assert!(decide(&no_enemies, &preset.config()).is_empty());
        assert!(decide(&no_tower, &preset.config()).is_empty());
    }
}

#[test]
fn cheapest_target_first_and_leftover_stays_unspent() {
    // lives 200 and 50; 300 left after the upgrade, 300 > 1.1 * 250
    let snap = snapshot(
        me(350, 1, 500),
        vec![enemy("C", 200, 0), enemy("A", 30, 20)],
        0,
    );

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(
        actions,
        vec![Action::Upgrade, attack("A", 51), attack("C", 201)]
    );
}

#[test]
fn equal_lives_keep_roster_order_when_troops_run_short() {
    let snap = snapshot(
        me(141, 4, 500),
        vec![enemy("X", 70, 0), enemy("Y", 70, 0)],
        0,
    );

    let actions = decide(&snap, &CombatPreset::Aggressive.config());

    assert_eq!(actions, vec![attack("X", 71), attack("Y", 70)]);
}

#[test]
fn holds_fire_until_multiplier_is_strictly_exceeded() {
    let snap = snapshot(me(100, 4, 500), vec![enemy("B", 100, 0)], 0);
    assert!(decide(&snap, &CombatPreset::Aggressive.config()).is_empty());

    let snap = snapshot(me(145, 1, 500), vec![enemy("B", 100, 0)], 0);
    // 5% armor (7), upgrade (50), 88 left is not above 1.2 * 100
    assert_eq!(
        decide(&snap, &CombatPreset::Steady.config()),
        vec![armor(7), Action::Upgrade]
    );
}

#[test]
fn hp_only_presets_still_poke_fallen_enemies() {
    let snap = snapshot(
        me(200, 4, 500),
        vec![enemy("A", 0, 0), enemy("B", 50, 0)],
        0,
    );

    let actions = decide(&snap, &CombatPreset::Steady.config());

    assert_eq!(actions, vec![armor(10), attack("A", 1), attack("B", 51)]);
}

#[test]
fn capped_tower_with_several_enemies_only_armors_half() {
    let snap = snapshot(
        me(401, 5, 500),
        vec![enemy("A", 100, 0), enemy("B", 100, 0)],
        10,
    );

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(200)]);
}

#[test]
fn capped_tower_splits_between_armor_and_last_enemy() {
    let snap = snapshot(
        me(301, 5, 500),
        vec![enemy("A", 0, 0), enemy("B", 900, 0)],
        10,
    );

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(150), attack("B", 151)]);
}

#[test]
fn capped_tower_with_no_one_standing_armors_half() {
    let snap = snapshot(me(200, 5, 500), vec![enemy("A", 0, 0)], 10);

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(100)]);
}

#[test]
fn late_game_puts_everything_into_armor() {
    let snap = snapshot(me(700, 2, 500), vec![enemy("A", 10, 0)], 50);

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(700)]);
}

#[test]
fn early_threat_spends_half_of_income_on_armor() {
    let mut mine = me(100, 1, 80);
    mine.income = 30;
    let snap = snapshot(mine, vec![enemy("A", 1000, 0)], 3);

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(15), Action::Upgrade]);
}

#[test]
fn early_threat_armor_is_capped_by_resources() {
    let mut mine = me(5, 1, 80);
    mine.income = 30;
    let snap = snapshot(mine, vec![enemy("A", 1000, 0)], 3);

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![armor(5)]);
}

#[test]
fn early_threat_is_ignored_once_the_match_matures() {
    let mut mine = me(100, 1, 80);
    mine.income = 30;
    let snap = snapshot(mine, vec![enemy("A", 1000, 0)], 25);

    let actions = decide(&snap, &CombatPreset::Fortress.config());

    assert_eq!(actions, vec![Action::Upgrade]);
}

#[test]
fn richer_enemy_economy_triggers_armor() {
    let mut mine = me(400, 2, 100);
    mine.defense = 20;
    let mut a = enemy("A", 300, 0);
    a.income = 80;
    let mut b = enemy("B", 300, 0);
    b.income = 60;
    let snap = snapshot(mine, vec![a, b], 5);

    // fortress: half of 400, then the 88 upgrade
    assert_eq!(
        decide(&snap, &CombatPreset::Fortress.config()),
        vec![armor(200), Action::Upgrade]
    );
    // guarded: all of it
    assert_eq!(
        decide(&snap, &CombatPreset::Guarded.config()),
        vec![armor(400)]
    );
}

#[test]
fn barely_standing_enemy_is_not_skipped() {
    let snap = GameSnapshot::from_json(serde_json::json!({
        "playerTower": { "playerId": "me", "resources": 100, "level": 4, "hp": 500 },
        "enemyTowers": [{ "playerId": "A", "hp": 0.5 }]
    }));

    let actions = decide(&snap, &CombatPreset::Guarded.config());

    assert_eq!(actions, vec![attack("A", 2)]);
}

#[test]
fn same_snapshot_same_answer() {
    let snap = snapshot(
        me(900, 2, 300),
        vec![enemy("A", 120, 30), enemy("B", 40, 0), enemy("C", 120, 30)],
        12,
    );
    for preset in CombatPreset::ALL {
        let cfg = preset.config();
        assert_eq!(decide(&snap, &cfg), decide(&snap, &cfg));
    }
}

#[test]
fn budget_never_goes_negative() {
    let mut budget = Budget::new(100);
    budget.armor(30);
    assert!(!budget.upgrade(88));
    assert_eq!(budget.attack(&PlayerId::from("A"), 500), 70);
    budget.armor(10);

    assert_eq!(budget.remaining(), 0);
    assert_eq!(budget.actions(), &[armor(30), attack("A", 70)]);
}
