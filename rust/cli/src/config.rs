use blackjack_engine::engine::{DEFAULT_DECKS, EngineConfig, STARTING_MONEY};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub decks: u8,
    pub starting_money: i64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub decks: ValueSource,
    pub starting_money: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            starting_money: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line flags on top of file and environment values.
    pub fn with_overrides(
        mut self,
        decks: Option<u8>,
        starting_money: Option<i64>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = decks {
            self.config.decks = v;
            self.sources.decks = ValueSource::Cli;
        }
        if let Some(v) = starting_money {
            self.config.starting_money = v;
            self.sources.starting_money = ValueSource::Cli;
        }
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

impl Config {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            decks: self.decks,
            starting_money: self.starting_money,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            starting_money: STARTING_MONEY,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub const CONFIG_ENV: &str = "BLACKJACK_CONFIG";
pub const DECKS_ENV: &str = "BLACKJACK_DECKS";
pub const STARTING_MONEY_ENV: &str = "BLACKJACK_STARTING_MONEY";
pub const SEED_ENV: &str = "BLACKJACK_SEED";

/// Resolves configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `BLACKJACK_CONFIG`, then
/// the individual `BLACKJACK_*` variables, looked up through `env`.
pub fn load_with_sources_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = env(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.starting_money {
            cfg.starting_money = v;
            sources.starting_money = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(decks) = env(DECKS_ENV)
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(money) = env(STARTING_MONEY_ENV)
        && !money.is_empty()
    {
        cfg.starting_money = money
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting money".into()))?;
        sources.starting_money = ValueSource::Env;
    }
    if let Some(seed) = env(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    starting_money: Option<i64>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: decks must be >=1".into(),
        ));
    }
    if cfg.starting_money <= 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_money must be >0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = load_with_sources_from(env_of(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.config.decks, 6);
        assert_eq!(resolved.config.starting_money, 1000);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blackjack.toml");
        fs::write(&path, "decks = 2\nstarting_money = 500\nseed = 456\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let env = env_of(&[(CONFIG_ENV, path_str.as_str()), (SEED_ENV, "789")]);
        let resolved = load_with_sources_from(env).unwrap();
        assert_eq!(resolved.config.decks, 2);
        assert_eq!(resolved.sources.decks, ValueSource::File);
        assert_eq!(resolved.config.starting_money, 500);
        assert_eq!(resolved.config.seed, Some(789));
        assert_eq!(resolved.sources.seed, ValueSource::Env);

        let resolved = resolved.with_overrides(Some(4), None, Some(1)).unwrap();
        assert_eq!(resolved.config.decks, 4);
        assert_eq!(resolved.sources.decks, ValueSource::Cli);
        assert_eq!(resolved.config.seed, Some(1));
        assert_eq!(resolved.sources.starting_money, ValueSource::File);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            load_with_sources_from(env_of(&[(DECKS_ENV, "0")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_with_sources_from(env_of(&[(STARTING_MONEY_ENV, "-5")])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            load_with_sources_from(env_of(&[(SEED_ENV, "abc")])),
            Err(ConfigError::Invalid(_))
        ));
        let resolved = load_with_sources_from(env_of(&[])).unwrap();
        assert!(resolved.with_overrides(None, Some(0), None).is_err());
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let env = env_of(&[(CONFIG_ENV, "/nonexistent/blackjack.toml")]);
        let err = load_with_sources_from(env).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
