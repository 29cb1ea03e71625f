//! Runtime configuration for the Kingdom Wars bot.

use crate::game::{BotProfile, CombatPreset, NegotiationStrategy};
use once_cell::sync::Lazy;
use std::{env, str::FromStr};

#[derive(Debug)]
pub struct Settings {
    /// Interface to bind.
    pub host: String,
    pub port: u16,
    /// Largest accepted request body (bytes).
    pub body_limit: usize,
    /// Name reported on `/info`.
    pub bot_name: String,
    pub combat: CombatPreset,
    pub negotiation: NegotiationStrategy,
}

impl Settings {
    fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let body_limit = env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024); // 1 MiB

        let bot_name = env::var("BOT_NAME").unwrap_or_else(|_| "Mega Ogudor Bot".into());

        Settings {
            host,
            port,
            body_limit,
            bot_name,
            combat: parse_or_default("COMBAT_STRATEGY"),
            negotiation: parse_or_default("NEGOTIATION_STRATEGY"),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn profile(&self) -> BotProfile {
        BotProfile::new(self.bot_name.clone(), self.combat, self.negotiation)
    }
}

/// Unknown names are logged and replaced by the default strategy.
fn parse_or_default<T>(key: &str) -> T
where
    T: FromStr<Err = anyhow::Error> + Default,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e: anyhow::Error| {
            log::warn!("{key}: {e:#}, using default");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
