use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("A club must have at least one member, got {0}.")]
    InvalidMemberCount(u32),
}
