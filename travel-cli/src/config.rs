//! Application configuration.
//!
//! The demo network, starting balance, and default preferences can be
//! supplied as a JSON file; without one, the built-in demo data is
//! used.

use std::fs;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::{Comfort, Money, Network, TransportOption};
use crate::planner::{JourneyPrefs, SortPriority};

/// Errors loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid config JSON
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One transport option in the config file.
///
/// Travel time is given in hours and converted to minute precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionConfig {
    pub name: String,
    pub cost: f64,
    pub hours: f64,
    pub comfort: u8,
}

impl OptionConfig {
    fn to_option(&self) -> TransportOption {
        TransportOption::new(
            self.name.clone(),
            Money::from_dollars(self.cost),
            Duration::minutes((self.hours * 60.0).round() as i64),
            Comfort::new(self.comfort),
        )
    }
}

/// One station in the config file, with its outgoing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub name: String,
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Wallet balance granted at sign-up, in dollars.
    pub starting_balance: f64,

    /// Default comfort threshold offered when planning.
    pub default_min_comfort: u8,

    /// Default sort priority offered when planning.
    pub default_priority: SortPriority,

    /// Stations in journey order; each hop uses the origin's options.
    pub network: Vec<StationConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            starting_balance: 100.0,
            default_min_comfort: 3,
            default_priority: SortPriority::Time,
            network: vec![
                StationConfig {
                    name: "Station A".to_string(),
                    options: vec![
                        OptionConfig {
                            name: "Bus".to_string(),
                            cost: 50.0,
                            hours: 5.0,
                            comfort: 3,
                        },
                        OptionConfig {
                            name: "Train".to_string(),
                            cost: 80.0,
                            hours: 3.0,
                            comfort: 4,
                        },
                        OptionConfig {
                            name: "Flight".to_string(),
                            cost: 200.0,
                            hours: 1.0,
                            comfort: 5,
                        },
                    ],
                },
                StationConfig {
                    name: "Station B".to_string(),
                    options: Vec::new(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Returns the configured starting balance.
    pub fn starting_balance(&self) -> Money {
        Money::from_dollars(self.starting_balance)
    }

    /// Returns the configured default preferences.
    pub fn default_prefs(&self) -> JourneyPrefs {
        JourneyPrefs::new(Comfort::new(self.default_min_comfort), self.default_priority)
    }

    /// Builds the station network described by the config.
    pub fn network(&self) -> Network {
        let mut network = Network::new();
        for station in &self.network {
            let id = network.add_station(station.name.clone());
            for option in &station.options {
                network.add_option(id, option.to_option());
            }
        }
        network
    }
}
