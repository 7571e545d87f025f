//! # Greeter
//!
//! Console greeting exercise: prints a banner, the host properties, asks for
//! the user's name, greets them and finishes with a small calculation demo.

use std::io::{BufRead, Write};

use log::debug;

pub mod calculations;
pub mod error;
pub mod properties;

pub use error::GreeterError;
pub use properties::{HostProperties, Property, PropertySource};

pub const HELLO: &str = "Hello, World!";
pub const WELCOME: &str = "Chao mung den voi lap trinh Java!";
pub const SEPARATOR: &str = "========================================";
pub const PROMPT: &str = "Nhap ten cua ban: ";
pub const SUCCESS: &str = "Chuc mung ban da chay thanh cong chuong trinh Java!";
pub const CALCULATIONS_HEADER: &str = "--- Demo tinh toan don gian ---";

/// Reads a single line and strips its line terminator.
///
/// An empty line is a valid name and invalid UTF-8 is replaced with U+FFFD.
/// End of stream before any byte is an error.
pub fn read_name(input: &mut impl BufRead) -> Result<String, GreeterError> {
    let mut buf = Vec::new();
    let bytes_read = input.read_until(b'\n', &mut buf)?;
    debug!("Read {} bytes from input.", bytes_read);
    if bytes_read == 0 {
        return Err(GreeterError::EndOfInput);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Runs the whole greeting sequence.
///
/// `input` is consumed and dropped as soon as the name is read. Output written
/// before a failure is left in `output`.
///
/// # Errors
///
/// This function will return an error if:
///
/// - Writing to `output` fails.
/// - Reading from `input` fails or the stream is already closed.
pub fn greet<R: BufRead, W: Write>(
    source: &impl PropertySource,
    mut input: R,
    output: &mut W,
) -> Result<(), GreeterError> {
    writeln!(output, "{HELLO}")?;
    writeln!(output, "{WELCOME}")?;
    writeln!(output, "{SEPARATOR}")?;
    for (label, value) in properties::report(source) {
        writeln!(output, "{label}: {value}")?;
    }
    writeln!(output, "{SEPARATOR}")?;

    write!(output, "{PROMPT}")?;
    output.flush()?;
    let name = read_name(&mut input)?;
    drop(input);

    writeln!(output, "Xin chao, {name}!")?;
    writeln!(output, "{SUCCESS}")?;

    writeln!(output)?;
    writeln!(output, "{CALCULATIONS_HEADER}")?;
    for calculation in calculations::calculate(calculations::A, calculations::B)? {
        writeln!(output, "{calculation}")?;
    }
    output.flush()?;
    Ok(())
}
