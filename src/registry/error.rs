use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Not enough room for a new club: all {capacity} slots are taken.")]
    CapacityExhausted { capacity: usize },
    #[error("The `{operation}` operation is not available. Please try again in another version.")]
    Unsupported { operation: &'static str },
    #[error("No more clubs in this traversal.")]
    CursorExhausted,
}
