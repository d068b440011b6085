/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("{var}: cannot parse {value:?} as an unsigned integer")]
    #[diagnostic(
        code(config::malformed),
        help("Set the variable to a plain unsigned integer, or unset it to use the default.")
    )]
    Malformed { var: String, value: String },

    #[error("{var}: {value} exceeds the maximum of {max}")]
    #[diagnostic(
        code(config::out_of_range),
        help("Lower the value, or raise SCHEDSIM_TABLE_CAPACITY to make room.")
    )]
    OutOfRange { var: String, value: u64, max: u64 },
}

/// Dispatch-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum DispatchError {
    #[error("Process table full: all {capacity} slots occupied")]
    #[diagnostic(
        code(dispatch::table_full),
        help("Release a finished process or create the dispatcher with more slots.")
    )]
    TableFull { capacity: usize },

    #[error("No process with pid {0}")]
    #[diagnostic(
        code(dispatch::unknown_pid),
        help("The process may have been released already or was never spawned.")
    )]
    UnknownPid(Pid),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_serialize_with_tags() {
        let err = DispatchError::TableFull { capacity: 20 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("table_full"));
        assert!(json.contains("20"));

        let err = ConfigError::Malformed {
            var: "SCHEDSIM_SEED".to_string(),
            value: "abc".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("malformed"));
    }

    #[test]
    fn messages_name_the_offender() {
        assert_eq!(
            DispatchError::UnknownPid(7).to_string(),
            "No process with pid 7"
        );
    }
}
