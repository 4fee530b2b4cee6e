use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, warn, error, debug};
use env_logger::{Builder, Target};

use crate::config::{Config, LOG_LEVEL_VAR, SEED_VAR};

/// Directory the log files are written to
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dnazap")
        .join("logs")
}

/// Initialize file logging at the configured level
pub fn init_logging(config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("dnazap_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    // The terminal belongs to the TUI, so everything goes to the file
    Builder::new()
        .parse_filters(&format!("dnazap={}", config.log_level))
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Log system information at startup
pub fn log_system_info(config: &Config) {
    info!("=== DnaZap Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());
    info!("Log level: {}", config.log_level);

    match config.seed {
        Some(seed) => info!("Mutation RNG seeded from {SEED_VAR}={seed}"),
        None => info!("Mutation RNG seeded from OS entropy"),
    }

    for warning in config.warnings() {
        warn!("{warning}");
    }

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key == LOG_LEVEL_VAR || key == SEED_VAR {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== DnaZap Shutting Down ===");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report an error that ends the session, to the log and to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        error!("CRITICAL ERROR: {error}");
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());

        let config = Config::from_values(None, Some("forty-two"));
        let result = init_logging(&config);
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path()));

        // Config is read before the logger exists; its warnings land here
        log_system_info(&config);
        log::logger().flush();
        let contents = std::fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("[WARN]"));
        assert!(contents.contains("Ignoring DNAZAP_SEED=\"forty-two\""));
    }
}
