use derive_getters::Getters;

use crate::tools::env_args::retrieve_arg_value;
use crate::tools::log_error_and_message;

/// The roster size used when no `--capacity` argument is given.
const DEFAULT_CAPACITY: usize = 30;

#[derive(Debug, Getters, PartialEq)]
pub struct ConsoleConfig {
    capacity: usize,
}

impl ConsoleConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Builds the configuration from the command-line arguments.
    /// An unreadable `--capacity` value falls back to the default.
    pub fn from_args() -> Self {
        let capacity = retrieve_arg_value(vec!["-c", "--capacity"])
            .and_then(|value| {
                value
                    .parse()
                    .map_err(log_error_and_message(
                        "Can't read the --capacity argument, using the default.",
                        (),
                    ))
                    .ok()
            })
            .unwrap_or(DEFAULT_CAPACITY);

        Self::new(capacity)
    }
}
