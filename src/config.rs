// Ledger Assets Library: asset lifecycle transaction pipeline
// Written in 2020 by
//     Dr. Maxim Orlovsky <orlovsky@pandoracore.com>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the MIT License
// along with this software.
// If not, see <https://opensource.org/licenses/MIT>.

//! Node configuration: logging verbosity and module parameters gating the
//! transaction keepers.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then environment variables prefixed with `ASSETS_` (for instance
//! `ASSETS_MINT_ENABLED=false` or `ASSETS_VERBOSITY=3`).

use std::env;
use std::path::Path;

use log::LevelFilter;
use settings::{Environment, File};

/// Prefix of the environment variables overriding configuration values
pub const ENV_PREFIX: &str = "ASSETS";

/// Module parameters passed to the transaction keepers
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Parameters {
    /// Whether new assets may be minted
    pub mint_enabled: bool,
    /// Whether existing assets may be burned
    pub burn_enabled: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            mint_enabled: true,
            burn_enabled: true,
        }
    }
}

/// Complete node configuration as it is read from the config sources
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(crate = "serde_crate", default)]
pub struct Config {
    /// Number of verbosity flags, see [`LogLevel`]
    pub verbosity: u8,
    pub mint_enabled: bool,
    pub burn_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        let parameters = Parameters::default();
        Config {
            verbosity: LogLevel::Error.verbosity(),
            mint_enabled: parameters.mint_enabled,
            burn_enabled: parameters.burn_enabled,
        }
    }
}

impl Config {
    /// Loads configuration from the optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let mut layers = settings::Config::new();
        layers.set_default("verbosity", defaults.verbosity as i64)?;
        layers.set_default("mint_enabled", defaults.mint_enabled)?;
        layers.set_default("burn_enabled", defaults.burn_enabled)?;
        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            layers.merge(File::from(path))?;
        }
        layers.merge(Environment::with_prefix(ENV_PREFIX))?;
        let config: Config = layers.try_into()?;
        trace!("Effective configuration: {:?}", config);
        Ok(config)
    }

    #[inline]
    pub fn log_level(&self) -> LogLevel {
        LogLevel::with_verbosity(self.verbosity)
    }

    #[inline]
    pub fn parameters(&self) -> Parameters {
        Parameters {
            mint_enabled: self.mint_enabled,
            burn_enabled: self.burn_enabled,
        }
    }
}

/// Errors reading node configuration
#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ConfigError {
    /// unable to read configuration: {_0}
    #[from]
    Settings(settings::ConfigError),
}

/// Logging verbosity selected by the `verbosity` configuration value
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Display)]
pub enum LogLevel {
    /// Errors only
    #[display("error")]
    Error = 0,

    #[display("warn")]
    Warn,

    /// Keeper initialization
    #[display("info")]
    Info,

    /// Reason of every rejected transaction and configuration sources
    #[display("debug")]
    Debug,

    /// Each pipeline step and every ledger state write
    #[display("trace")]
    Trace,
}

impl LogLevel {
    /// Number of verbosity points matching this level
    pub fn verbosity(&self) -> u8 {
        *self as u8
    }

    /// Picks level for the configured verbosity; values above the most
    /// verbose level saturate to [`LogLevel::Trace`]
    pub fn with_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Installs `env_logger` filtering at this level; directives from
    /// `RUST_LOG` are applied on top of it
    pub fn apply(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(self.level_filter());
        if let Ok(directives) = env::var("RUST_LOG") {
            builder.parse_filters(&directives);
        }
        if builder.try_init().is_err() {
            warn!("Logger is already initialized; keeping its settings");
        }
    }
}
