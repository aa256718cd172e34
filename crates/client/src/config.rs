//! Scripted demo configuration.
use std::env;
use std::path::PathBuf;

/// Settings for the headless demo run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    pub script: ScriptConfig,
    /// Also write logs to `duel.log` in this directory.
    pub log_dir: Option<PathBuf>,
}

/// How the scripted player behaves.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptConfig {
    /// Enemies to fight in a row.
    pub encounters: u32,
    /// Seconds into each charge-up at which the scripted defender reacts.
    pub reaction_at: f32,
    /// Hard stop for the driver loop.
    pub max_ticks: u64,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            encounters: 3,
            reaction_at: 1.45,
            max_ticks: 100_000,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_ENCOUNTERS` - Enemies to fight (default: 3)
    /// - `DUEL_REACTION_AT` - Reaction time into each charge, seconds (default: 1.45)
    /// - `DUEL_MAX_TICKS` - Driver safety cap (default: 100000)
    /// - `DUEL_LOG_DIR` - Directory for a log file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(encounters) = read_env::<u32>("DUEL_ENCOUNTERS") {
            config.script.encounters = encounters;
        }

        if let Some(reaction_at) = read_env::<f32>("DUEL_REACTION_AT") {
            config.script.reaction_at = reaction_at.max(0.0);
        }

        if let Some(max_ticks) = read_env::<u64>("DUEL_MAX_TICKS") {
            config.script.max_ticks = max_ticks.max(1);
        }

        config.log_dir = env::var("DUEL_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
