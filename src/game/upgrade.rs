//! Tower upgrade pricing (base 50, ×1.75 per level).

const BASE_COST: f64 = 50.0;
const GROWTH: f64 = 1.75;

/// Resources needed to go from `level` to `level + 1`.
/// Rounds half away from zero, like the game engine.
pub fn upgrade_cost(level: u32) -> u64 {
    let exp = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
    (BASE_COST * GROWTH.powi(exp)).round() as u64
}
