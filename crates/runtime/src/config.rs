//! Runtime configuration structures and loaders.
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use duel_core::CombatConfig;

use crate::api::ConfigLoadError;

/// Host-level timing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct HostConfig {
    /// Seconds the finished encounter stays up before the host ends it.
    pub outcome_delay: f32,
}

impl HostConfig {
    /// Linger after victory or defeat when playing with on-screen pacing.
    pub const PACED_OUTCOME_DELAY: f32 = 1.5;

    pub const fn new() -> Self {
        Self { outcome_delay: 0.0 }
    }

    pub const fn paced() -> Self {
        Self {
            outcome_delay: Self::PACED_OUTCOME_DELAY,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to stand up a host and its driver loop.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub combat: CombatConfig,
    pub host: HostConfig,
    pub player_max_hp: f32,
    /// Period of the fixed-step driver.
    pub tick_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            host: HostConfig::default(),
            player_max_hp: crate::Progress::DEFAULT_PLAYER_MAX_HP,
            tick_interval: Duration::from_millis(16),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_CONFIG` - Path to a RON `CombatConfig` (default: built-in values)
    /// - `DUEL_PACED` - Use on-screen pacing delays between turns (default: false)
    /// - `DUEL_PLAYER_MAX_HP` - Player max HP for a new game (default: 100)
    /// - `DUEL_TICK_MS` - Driver step in milliseconds (default: 16)
    /// - `DUEL_OUTCOME_DELAY` - Seconds before a finished encounter ends (default: 0)
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigLoadError> {
        let mut config = Self::default();

        if let Some(path) = lookup("DUEL_CONFIG") {
            config.combat = CombatConfigLoader::load(Path::new(&path))?;
        }

        if parse_var::<bool>(&lookup, "DUEL_PACED")?.unwrap_or(false) {
            config.combat.turn_delay = CombatConfig::PACED_TURN_DELAY;
            config.host = HostConfig::paced();
        }

        if let Some(max_hp) = parse_var::<f32>(&lookup, "DUEL_PLAYER_MAX_HP")? {
            config.player_max_hp = max_hp;
        }

        if let Some(ms) = parse_var::<u64>(&lookup, "DUEL_TICK_MS")? {
            config.tick_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(delay) = parse_var::<f32>(&lookup, "DUEL_OUTCOME_DELAY")? {
            config.host.outcome_delay = delay.max(0.0);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.combat.validate()?;
        if !self.player_max_hp.is_finite() || self.player_max_hp <= 0.0 {
            return Err(ConfigLoadError::InvalidEnv {
                key: "DUEL_PLAYER_MAX_HP",
                value: self.player_max_hp.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigLoadError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigLoadError::InvalidEnv { key, value: raw })
}

/// Loader for combat tuning from RON files.
///
/// Fields left out of the file keep their defaults:
///
/// ```ron
/// (
///     enemy_max_hp: 80.0,
///     charge_time: 1.2,
///     easing: Linear,
///     reaction_window: (start: 0.85, end: 1.0),
/// )
/// ```
pub struct CombatConfigLoader;

impl CombatConfigLoader {
    pub fn load(path: &Path) -> Result<CombatConfig, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<CombatConfig, ConfigLoadError> {
        let config: CombatConfig =
            ron::from_str(content).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use duel_core::{ConfigError, Easing};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = RuntimeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn paced_flag_sets_both_delays() {
        let config = RuntimeConfig::from_lookup(lookup(&[("DUEL_PACED", "true")])).unwrap();
        assert_eq!(config.combat.turn_delay, 0.5);
        assert_eq!(config.host.outcome_delay, 1.5);
    }

    #[test]
    fn reads_numeric_overrides() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("DUEL_PLAYER_MAX_HP", "250"),
            ("DUEL_TICK_MS", "0"),
            ("DUEL_OUTCOME_DELAY", "0.75"),
        ]))
        .unwrap();
        assert_eq!(config.player_max_hp, 250.0);
        assert_eq!(config.tick_interval, Duration::from_millis(1));
        assert_eq!(config.host.outcome_delay, 0.75);
    }

    #[test]
    fn rejects_unparsable_values() {
        let err = RuntimeConfig::from_lookup(lookup(&[("DUEL_TICK_MS", "fast")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidEnv {
                key: "DUEL_TICK_MS",
                ..
            }
        ));

        let err =
            RuntimeConfig::from_lookup(lookup(&[("DUEL_PLAYER_MAX_HP", "-3")])).unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidEnv { .. }));
    }

    #[test]
    fn parses_partial_ron() {
        let config = CombatConfigLoader::parse(
            "(enemy_max_hp: 80.0, easing: Linear, reaction_window: (start: 0.85, end: 1.0))",
        )
        .unwrap();
        assert_eq!(config.enemy_max_hp, 80.0);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.reaction_window.start, 0.85);
        assert_eq!(config.player_damage, CombatConfig::DEFAULT_PLAYER_DAMAGE);
    }

    #[test]
    fn rejects_invalid_ron_values() {
        let err = CombatConfigLoader::parse("(charge_time: 0.0)").unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::NonPositive {
                field: "charge_time",
                ..
            })
        ));
        assert!(matches!(
            CombatConfigLoader::parse("(enemy_max_hp: "),
            Err(ConfigLoadError::Parse(_))
        ));
    }

    #[test]
    fn loads_config_file_from_env_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(enemy_damage: 25.0, turn_delay: 0.25)").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = RuntimeConfig::from_lookup(lookup(&[("DUEL_CONFIG", path.as_str())])).unwrap();
        assert_eq!(config.combat.enemy_damage, 25.0);
        assert_eq!(config.combat.turn_delay, 0.25);

        let missing = CombatConfigLoader::load(Path::new("/nonexistent/duel.ron"));
        assert!(matches!(missing, Err(ConfigLoadError::Read { .. })));
    }
}
