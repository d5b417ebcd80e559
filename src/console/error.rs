use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConsoleError {
    #[error("Can't read the next command from the console input.")]
    Input(String),
    #[error("Can't write to the console output.")]
    Output(String),
}
