use std::fmt::Debug;

use log::error;

pub mod env_args;

/// Brings a name into its comparison form: surrounding whitespace ignored,
/// case folded. Stored names are never normalized, only compared ones.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn log_error<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_error_and_message<E: Debug, T>(message: &str, value_to_return: T) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
