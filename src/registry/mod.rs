use crate::registry::error::RegistryError;

pub mod club_registry;
pub mod cursor;
pub mod error;
pub mod ordering;

type Result<T, E = RegistryError> = std::result::Result<T, E>;
