//! Runtime configuration read from the environment

pub const LOG_LEVEL_VAR: &str = "DNAZAP_LOG_LEVEL";
pub const SEED_VAR: &str = "DNAZAP_SEED";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    /// Fixed RNG seed for reproducible mutation runs.
    pub seed: Option<u64>,
    /// Why a provided seed was ignored, reported once logging is up.
    pub seed_error: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            seed: None,
            seed_error: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_values(
            std::env::var(LOG_LEVEL_VAR).ok().as_deref(),
            std::env::var(SEED_VAR).ok().as_deref(),
        )
    }

    /// Build a config from raw variable values, falling back on bad input.
    pub fn from_values(log_level: Option<&str>, seed: Option<&str>) -> Config {
        let log_level = match log_level.map(|level| level.trim().to_lowercase()) {
            Some(level) if LOG_LEVELS.contains(&level.as_str()) => level,
            Some(level) => {
                eprintln!("Invalid log level '{level}', defaulting to 'info'");
                "info".to_string()
            }
            None => "info".to_string(),
        };

        let (seed, seed_error) = match seed.map(|raw| (raw, raw.trim().parse::<u64>())) {
            Some((_, Ok(seed))) => (Some(seed), None),
            Some((raw, Err(e))) => (None, Some(format!("Ignoring {SEED_VAR}={raw:?}: {e}"))),
            None => (None, None),
        };

        Config { log_level, seed, seed_error }
    }

    /// Problems found while reading the environment.
    pub fn warnings(&self) -> Vec<String> {
        self.seed_error.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_values(None, None), Config::default());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        assert_eq!(Config::from_values(Some("DEBUG"), None).log_level, "debug");
    }

    #[test]
    fn test_invalid_log_level_falls_back() {
        assert_eq!(Config::from_values(Some("loud"), None).log_level, "info");
    }

    #[test]
    fn test_seed_parsing() {
        assert_eq!(Config::from_values(None, Some("42")).seed, Some(42));
        assert_eq!(Config::from_values(None, Some(" 7 ")).seed, Some(7));
        assert_eq!(Config::from_values(None, Some("forty-two")).seed, None);
    }

    #[test]
    fn test_bad_seed_is_kept_as_warning() {
        let config = Config::from_values(None, Some("forty-two"));
        assert_eq!(config.seed, None);

        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(SEED_VAR));
        assert!(warnings[0].contains("forty-two"));

        assert!(Config::from_values(None, Some("42")).warnings().is_empty());
    }
}
