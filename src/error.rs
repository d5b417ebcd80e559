use crate::console::error::ConsoleError;
use crate::registry::error::RegistryError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("An error has occurred within the club registry.")]
    Registry(#[from] RegistryError),
    #[error("An error has occurred while driving the console.")]
    Console(#[from] ConsoleError),
}
