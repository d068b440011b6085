/*!
 * Simulation Configuration
 * Environment-driven settings for the driver binary
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_PROCESS_COUNT, DEFAULT_TABLE_CAPACITY};
use crate::core::serde::is_false;
use serde::{Deserialize, Serialize};
use std::env;

/// Slots in the process table
pub const ENV_TABLE_CAPACITY: &str = "SCHEDSIM_TABLE_CAPACITY";
/// Processes the driver spawns and admits
pub const ENV_PROCESS_COUNT: &str = "SCHEDSIM_PROCESS_COUNT";
/// Seed for the priority workload; entropy when unset
pub const ENV_SEED: &str = "SCHEDSIM_SEED";
/// Dump a JSON table snapshot to stdout after the run
pub const ENV_JSON: &str = "SCHEDSIM_JSON";

/// Driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    pub table_capacity: usize,
    pub process_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub json_snapshot: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            table_capacity: DEFAULT_TABLE_CAPACITY,
            process_count: DEFAULT_PROCESS_COUNT,
            seed: None,
            json_snapshot: false,
        }
    }
}

impl SimConfig {
    /// Read settings from the environment, falling back to the defaults.
    ///
    /// The process count may not exceed the table capacity; the driver
    /// spawns every process before admitting any.
    pub fn from_env() -> Result<Self, ConfigError> {
        let table_capacity = read_usize(ENV_TABLE_CAPACITY, DEFAULT_TABLE_CAPACITY)?;
        let process_count = read_usize(ENV_PROCESS_COUNT, DEFAULT_PROCESS_COUNT)?;
        if process_count > table_capacity {
            return Err(ConfigError::OutOfRange {
                var: ENV_PROCESS_COUNT.to_string(),
                value: process_count as u64,
                max: table_capacity as u64,
            });
        }

        let seed = match env::var(ENV_SEED) {
            Ok(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Malformed {
                var: ENV_SEED.to_string(),
                value: raw,
            })?),
            Err(_) => None,
        };

        let json_snapshot = env::var(ENV_JSON)
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false);

        Ok(Self {
            table_capacity,
            process_count,
            seed,
            json_snapshot,
        })
    }
}

fn read_usize(var: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Malformed {
            var: var.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
