use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Standard input closed before a name was entered!")]
    EndOfInput,
    #[error("Result of {a} {symbol} {b} is undefined!")]
    Arithmetic { a: i32, b: i32, symbol: char },
}
