//! Logger installation.

use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Where log output goes.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Write to stdout.
    pub console: bool,
    /// Also write to this file, truncating it.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            },
            console: true,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a logger is already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Install the global logger. Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if config.console {
        loggers.push(TermLogger::new(
            config.level,
            Config::default(),
            TerminalMode::Stdout,
            ColorChoice::Auto,
        ));
    }

    if let Some(path) = &config.file {
        let file = File::create(path).map_err(|source| LogInitError::Io {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(config.level, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    log::debug!("logging initialised at {}", config.level);
    Ok(())
}
