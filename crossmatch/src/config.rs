use crate::error::MatchError;
use log::warn;
use serde_derive::Deserialize;

/// Session settings for the order generator and driver loop.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub rounds: u64,
    pub orders_per_round: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub max_quantity: u64,
    pub seed: Option<u64>,
    pub dump_book: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        RuntimeConfig {
            rounds: 10,
            orders_per_round: 20,
            min_price: 1.0,
            max_price: 100.0,
            max_quantity: 100,
            seed: None,
            dump_book: false,
        }
    }

    /// Loads the config, falling back to defaults when the file is missing or
    /// malformed.
    pub fn from_toml(path: &str) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    "Something went wrong reading the runtime config file {}, {:?}",
                    path, e
                );
                return RuntimeConfig::new();
            }
        };
        match toml::from_str(&contents) {
            Ok(c) => c,
            Err(e) => {
                warn!(
                    "Something went wrong parsing the runtime config file {}, {:?}",
                    path, e
                );
                RuntimeConfig::new()
            }
        }
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if !(self.min_price.is_finite() && self.max_price.is_finite()) {
            return Err(MatchError::InvalidConfig(
                "price bounds must be finite".to_string(),
            ));
        }
        if self.min_price >= self.max_price {
            return Err(MatchError::InvalidConfig(format!(
                "min_price {} must be below max_price {}",
                self.min_price, self.max_price
            )));
        }
        if self.max_quantity == 0 {
            return Err(MatchError::InvalidConfig(
                "max_quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
