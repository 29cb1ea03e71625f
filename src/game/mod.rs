//! Turn decision policy: pure functions from a snapshot to actions.

pub mod combat;
pub mod negotiation;
pub mod ranking;
pub mod snapshot;
pub mod strategy;
pub mod types;
pub mod upgrade;

pub use combat::{decide, CombatConfig};
pub use negotiation::{negotiate, NegotiationStrategy};
pub use strategy::{BotProfile, CombatPreset};
pub use types::{Action, GameSnapshot, NegotiationProposal, PlayerId, TowerState};
